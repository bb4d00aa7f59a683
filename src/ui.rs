//! Rendering and input collaborators.
//!
//! The session only knows the [`Frontend`] trait: pixel click events in and
//! read-only renders of the game state out. [`TermFrontend`] is the bundled
//! terminal implementation; typed coordinates are turned into a click at the
//! cell center so the same pixel mapping runs as with a pointer.

use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use crate::{
    config::{CELL_SIZE, GRID_SIZE},
    game::{Color, GameState},
};

/// Input produced by the render/input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer click at canvas pixel coordinates.
    Click { x: u32, y: u32 },
    /// Operator wants out.
    Quit,
}

/// The session's view of the UI. `render` is called every tick whether or
/// not the state changed; implementations decide how much work that is.
pub trait Frontend: Send {
    fn poll_input(&mut self) -> Option<InputEvent>;
    fn render(&mut self, game: &GameState);
}

/// Parse a board coordinate like `H8` (column letter A-O, row number 1-15).
pub fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    let input = input.trim();
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., H8)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-O", col_ch));
    }
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    if col >= GRID_SIZE {
        return Err(format!("Column '{}' out of bounds - must be A-O", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-15", row_str))?;
    if row == 0 || row > GRID_SIZE {
        return Err(format!("Row {} out of bounds - must be 1-15", row));
    }
    Ok((row - 1, col))
}

/// Pixel position of the center of a cell, the point a pointer click on
/// that cell would most plausibly land on.
pub fn cell_center(row: usize, col: usize) -> (u32, u32) {
    (
        col as u32 * CELL_SIZE + CELL_SIZE / 2,
        row as u32 * CELL_SIZE + CELL_SIZE / 2,
    )
}

fn ansi(color: Color) -> &'static str {
    match color {
        Color::Red => "\x1b[31m",
        Color::Blue => "\x1b[34m",
    }
}

/// Terminal frontend: reads coordinates from stdin on a helper thread,
/// prints the board whenever it changes.
pub struct TermFrontend {
    events: Receiver<InputEvent>,
    last_rendered: Option<usize>,
}

impl TermFrontend {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
                    let _ = tx.send(InputEvent::Quit);
                    break;
                }
                match parse_coord(trimmed) {
                    Ok((row, col)) => {
                        let (x, y) = cell_center(row, col);
                        if tx.send(InputEvent::Click { x, y }).is_err() {
                            break;
                        }
                    }
                    Err(e) => println!("{}", e),
                }
            }
            // stdin closed: treat as quit
            let _ = tx.send(InputEvent::Quit);
        });
        Self {
            events: rx,
            last_rendered: None,
        }
    }

    fn print_board(&self, game: &GameState) {
        print!("\n   ");
        for c in 0..GRID_SIZE {
            print!(" {}", (b'A' + c as u8) as char);
        }
        println!();
        for r in 0..GRID_SIZE {
            print!("{:2} ", r + 1);
            for c in 0..GRID_SIZE {
                match game.board().get(r, c) {
                    Some(mark) => {
                        let color = game.player_with_mark(mark).color;
                        print!(" {}{}\x1b[0m", ansi(color), mark);
                    }
                    None => print!(" ."),
                }
            }
            println!();
        }
        if let Some(winner) = game.winner() {
            println!("\n*** Player {} wins! ***", winner.mark);
            println!("Type q to quit.");
        } else {
            println!(
                "\nPlayer {} to move. Enter a coordinate (e.g. H8), or q to quit:",
                game.current_player().mark
            );
        }
        let _ = io::stdout().flush();
    }
}

impl Default for TermFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontend for TermFrontend {
    fn poll_input(&mut self) -> Option<InputEvent> {
        match self.events.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(InputEvent::Quit),
        }
    }

    fn render(&mut self, game: &GameState) {
        // Re-rendering an unchanged terminal every tick is pure noise.
        let revision = game.moves_played() + game.winner().map_or(0, |_| 1);
        if self.last_rendered == Some(revision) {
            return;
        }
        self.last_rendered = Some(revision);
        self.print_board(game);
    }
}

/// Blocking yes/no question used by the guest when the host's connection
/// request arrives. The setup phase is synchronous by design.
pub fn prompt_accept() -> bool {
    print!("Incoming connection request. Accept? [y/n] ");
    let _ = io::stdout().flush();
    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
