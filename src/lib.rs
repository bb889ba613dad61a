//! Arrow Walk - a grid puzzle of random arrows
//!
//! Every cell of the board holds a fixed arrow pointing up, down, left, or
//! right. A marker is dropped on a random cell and follows the arrows one
//! step per tick until it either walks off the board (escape) or steps onto
//! a cell it has already visited (collision).
//!
//! Core modules:
//! - `sim`: Deterministic simulation (board, cells, cursor advancement,
//!   cycle probing)
//! - `settings`: User preferences (board size, tick interval, seed)
//!
//! Rendering, input handling, and audio are front-end concerns; the binary in
//! `main.rs` is a minimal terminal driver that reads sim state and drains sim
//! events.

pub mod settings;
pub mod sim;

pub use settings::Settings;
pub use sim::{Board, BoardEvent, Cell, Direction, InvalidSize, Pos, will_loop};

/// Game configuration constants
pub mod consts {
    /// Smallest constructible board dimension (anything less is trivial)
    pub const MIN_BOARD_SIZE: usize = 3;
    /// Largest constructible board dimension (more won't fit on screen)
    pub const MAX_BOARD_SIZE: usize = 41;

    /// Default board dimensions
    pub const DEFAULT_BOARD_SIZE: usize = 13;

    /// Default heartbeat interval between cursor steps (milliseconds)
    pub const DEFAULT_TICK_MS: u64 = 500;
}
