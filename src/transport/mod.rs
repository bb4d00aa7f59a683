use crate::protocol::Message;

/// A bidirectional, message-oriented link to the peer. `recv` blocks until
/// exactly one complete logical message is available.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()>;
    async fn recv(&mut self) -> anyhow::Result<Message>;
}

pub mod in_memory;
pub mod tcp;
