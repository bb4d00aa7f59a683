//! Wire messages exchanged between the two peers.

use serde::{Deserialize, Serialize};

/// Bumped whenever the wire format changes incompatibly.
pub const PROTOCOL_VERSION: u32 = 1;

/// Every message on the stream is one of these variants, length-prefix
/// framed by the transport. Control variants appear only during the
/// handshake; `Move` is the only payload once play begins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    /// Sent by the host right after accepting the connection. Carries the
    /// agreed first mover so both peers build identical player tables.
    ConnectionRequest {
        version: u32,
        host_moves_first: bool,
    },
    /// Guest accepts the session.
    ConnectionConfirmed { version: u32 },
    /// Guest declines the session; both processes stop.
    ConnectionDenied,
    /// A stone placed by the sender at (row, col).
    Move { row: u8, col: u8 },
}
