use crate::{
    board::{Board, Mark},
    common::{MoveError, MoveOutcome},
};

/// Which end of the connection a player sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Host,
    Guest,
}

impl Role {
    pub fn other(self) -> Self {
        match self {
            Role::Host => Role::Guest,
            Role::Guest => Role::Host,
        }
    }
}

/// Display color of a player's mark. Rendering attribute only, never on the
/// wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Blue,
}

/// One of the two players. Created once at game start; never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub mark: Mark,
    pub role: Role,
    pub color: Color,
}

/// Authoritative local copy of the shared game state: grid, turn order and
/// winner. Each peer holds its own instance; the move protocol keeps them
/// identical.
pub struct GameState {
    board: Board,
    players: [Player; 2],
    current: usize,
    winner: Option<usize>,
    moves_played: usize,
}

impl GameState {
    /// Build the game with both players. The first mover always plays X in
    /// red; `host_moves_first` decides which role that is, and both peers
    /// construct it from the value agreed during the handshake so their
    /// player tables match.
    pub fn new(host_moves_first: bool) -> Self {
        let first_role = if host_moves_first { Role::Host } else { Role::Guest };
        let players = [
            Player {
                mark: Mark::X,
                role: first_role,
                color: Color::Red,
            },
            Player {
                mark: Mark::O,
                role: first_role.other(),
                color: Color::Blue,
            },
        ];
        Self {
            board: Board::new(),
            players,
            current: 0,
            winner: None,
            moves_played: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose mark the next successful `make_move` places.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|i| &self.players[i])
    }

    pub fn player_with_role(&self, role: Role) -> &Player {
        self.players
            .iter()
            .find(|p| p.role == role)
            .unwrap_or(&self.players[0])
    }

    pub fn player_with_mark(&self, mark: Mark) -> &Player {
        self.players
            .iter()
            .find(|p| p.mark == mark)
            .unwrap_or(&self.players[0])
    }

    /// Count of marks on the board. Lets renderers skip unchanged frames.
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Place the current player's mark at (row, col).
    ///
    /// Rejects the move without touching any state when the game is over,
    /// the coordinates are off the board, or the cell is taken. On success
    /// the win check runs centered on the placed cell: a win freezes the
    /// board permanently, otherwise the turn passes to the other player.
    ///
    /// Deliberately permissive about turns: whoever is stored as the current
    /// player at call time is the mover. Turn discipline is the
    /// synchronizer's job, not the state machine's.
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, MoveError> {
        if self.winner.is_some() {
            return Err(MoveError::GameOver);
        }
        if !Board::in_bounds(row, col) {
            return Err(MoveError::OutOfBounds);
        }
        if self.board.get(row, col).is_some() {
            return Err(MoveError::Occupied);
        }

        let mark = self.players[self.current].mark;
        self.board.set(row, col, mark);
        self.moves_played += 1;

        if self.board.wins_at(row, col, mark) {
            self.winner = Some(self.current);
            Ok(MoveOutcome::PlacedAndWon)
        } else {
            self.current = 1 - self.current;
            Ok(MoveOutcome::Placed)
        }
    }
}
