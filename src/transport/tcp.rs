use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, ToSocketAddrs};

use crate::protocol::Message;
use crate::transport::Transport;

/// Upper bound on a single encoded message. Gomoku messages are a handful
/// of bytes; anything near this limit is a corrupt or hostile stream.
const MAX_MESSAGE_SIZE: u32 = 1024;

/// TCP transport with explicit framing: each message is a u32 big-endian
/// length prefix followed by that many bincode bytes. Framing guarantees one
/// `recv` yields exactly one logical message no matter how the stream
/// coalesces or splits the writes.
pub struct TcpTransport {
    stream: TcpStream,
    max_message_size: u32,
}

impl TcpTransport {
    pub fn new(stream: TcpStream) -> Self {
        Self {
            stream,
            max_message_size: MAX_MESSAGE_SIZE,
        }
    }

    pub async fn connect<A: ToSocketAddrs>(addr: A) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(addr).await?;
        Ok(Self::new(stream))
    }
}

fn map_write_err(e: std::io::Error) -> anyhow::Error {
    if e.kind() == std::io::ErrorKind::BrokenPipe
        || e.kind() == std::io::ErrorKind::ConnectionReset
    {
        anyhow::anyhow!("Connection closed by peer")
    } else {
        anyhow::anyhow!("Write error: {}", e)
    }
}

fn map_read_err(e: std::io::Error) -> anyhow::Error {
    if e.kind() == std::io::ErrorKind::UnexpectedEof {
        anyhow::anyhow!("Connection closed by peer")
    } else if e.kind() == std::io::ErrorKind::ConnectionReset {
        anyhow::anyhow!("Connection reset by peer")
    } else {
        anyhow::anyhow!("Read error: {}", e)
    }
}

#[async_trait::async_trait]
impl Transport for TcpTransport {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
        let data = bincode::serialize(&msg)
            .map_err(|e| anyhow::anyhow!("Serialization error: {}", e))?;

        if data.len() as u32 > self.max_message_size {
            return Err(anyhow::anyhow!(
                "Message too large: {} bytes (max: {})",
                data.len(),
                self.max_message_size
            ));
        }

        let len = (data.len() as u32).to_be_bytes();
        self.stream.write_all(&len).await.map_err(map_write_err)?;
        self.stream.write_all(&data).await.map_err(map_write_err)?;
        Ok(())
    }

    async fn recv(&mut self) -> anyhow::Result<Message> {
        let mut len_buf = [0u8; 4];
        self.stream
            .read_exact(&mut len_buf)
            .await
            .map_err(map_read_err)?;

        let len = u32::from_be_bytes(len_buf);
        if len > self.max_message_size {
            return Err(anyhow::anyhow!(
                "Message too large: {} bytes (max: {})",
                len,
                self.max_message_size
            ));
        }
        if len == 0 {
            return Err(anyhow::anyhow!("Invalid message length: 0"));
        }

        let mut buf = vec![0u8; len as usize];
        self.stream
            .read_exact(&mut buf)
            .await
            .map_err(map_read_err)?;

        bincode::deserialize(&buf).map_err(|e| anyhow::anyhow!("Deserialization error: {}", e))
    }
}
