use crate::config::{GRID_SIZE, WIN_LENGTH};

/// One of the two stone marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The opposing mark.
    pub fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl core::fmt::Display for Mark {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// The four scan axes for win detection: vertical, horizontal and the two
/// diagonals. Each is walked in both signs from the placed cell.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Fixed 15x15 grid of cells. `None` is an empty cell; a cell never changes
/// once set.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Mark>; GRID_SIZE]; GRID_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[None; GRID_SIZE]; GRID_SIZE],
        }
    }

    pub fn in_bounds(row: usize, col: usize) -> bool {
        row < GRID_SIZE && col < GRID_SIZE
    }

    /// Mark at (row, col), or `None` if empty. Out-of-bounds reads are the
    /// caller's bug; this panics like any slice index would.
    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        self.cells[row][col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, mark: Mark) {
        self.cells[row][col] = Some(mark);
    }

    /// Whether the mark at (row, col) completes a run of `WIN_LENGTH`.
    ///
    /// Scans only the four axes through the placed cell, at most four steps
    /// each way, stopping at the first mismatch or edge. A win can only be
    /// created by the move just made, so this never rescans the board.
    pub fn wins_at(&self, row: usize, col: usize, mark: Mark) -> bool {
        for (dr, dc) in DIRECTIONS {
            let count =
                1 + self.run_length(row, col, dr, dc, mark) + self.run_length(row, col, -dr, -dc, mark);
            if count >= WIN_LENGTH {
                return true;
            }
        }
        false
    }

    /// Contiguous cells holding `mark` strictly beyond (row, col) along
    /// (dr, dc), capped at `WIN_LENGTH - 1` steps.
    fn run_length(&self, row: usize, col: usize, dr: isize, dc: isize, mark: Mark) -> usize {
        let mut count = 0;
        for step in 1..WIN_LENGTH as isize {
            let r = row as isize + step * dr;
            let c = col as isize + step * dc;
            if r < 0 || c < 0 {
                break;
            }
            let (r, c) = (r as usize, c as usize);
            if !Self::in_bounds(r, c) || self.cells[r][c] != Some(mark) {
                break;
            }
            count += 1;
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Board {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for row in &self.cells {
            for cell in row {
                match cell {
                    Some(m) => write!(f, "{}", m)?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
