/// Board dimension; the grid is `GRID_SIZE` x `GRID_SIZE` cells.
pub const GRID_SIZE: usize = 15;

/// Number of contiguous same-mark cells needed to win.
pub const WIN_LENGTH: usize = 5;

/// Canvas edge length in pixels.
pub const SCREEN_SIZE: u32 = 600;

/// Pixel edge length of one cell.
pub const CELL_SIZE: u32 = SCREEN_SIZE / GRID_SIZE as u32;

/// Ticks per second of the synchronizer loop.
pub const FRAME_RATE: u32 = 30;
