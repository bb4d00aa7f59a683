//! Common types for Gomoku: move errors and move outcomes.

/// Result of a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Mark placed, turn passed to the other player.
    Placed,
    /// Mark placed and it completed five in a row; game is over.
    PlacedAndWon,
}

/// Reasons a move is rejected. The state is left untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Coordinates fall outside the grid.
    OutOfBounds,
    /// Target cell already holds a mark.
    Occupied,
    /// A winner exists; the board is frozen.
    GameOver,
}

impl core::fmt::Display for MoveError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MoveError::OutOfBounds => write!(f, "coordinates are outside the board"),
            MoveError::Occupied => write!(f, "cell is already occupied"),
            MoveError::GameOver => write!(f, "game is already over"),
        }
    }
}

impl std::error::Error for MoveError {}
