mod board;
mod common;
mod config;
mod game;
mod logging;
pub mod protocol;
pub mod session;
pub mod transport;
pub mod ui;

pub use board::{Board, Mark};
pub use common::{MoveError, MoveOutcome};
pub use config::{CELL_SIZE, FRAME_RATE, GRID_SIZE, SCREEN_SIZE, WIN_LENGTH};
pub use game::{Color, GameState, Player, Role};
pub use logging::init_logging;
pub use protocol::{Message, PROTOCOL_VERSION};
pub use session::{guest_handshake, host_handshake, pixel_to_cell, GameSession};
pub use transport::tcp::TcpTransport;
