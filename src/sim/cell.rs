//! Grid cells and the directions their arrows point
//!
//! A cell's arrow is fixed at shuffle time; `successor` caches the neighbor
//! the arrow points at so the static pointer graph can be probed without
//! touching gameplay state.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One of the four compass directions an arrow can point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Draw a uniformly random direction
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        match rng.random_range(0..4) {
            0 => Direction::Up,
            1 => Direction::Down,
            2 => Direction::Left,
            _ => Direction::Right,
        }
    }

    /// Row/column offset of one step in this direction
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Single-character glyph for text rendering
    pub fn glyph(self) -> char {
        match self {
            Direction::Up => '^',
            Direction::Down => 'v',
            Direction::Left => '<',
            Direction::Right => '>',
        }
    }
}

/// A grid coordinate (row-major)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Pos {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// A single board position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    /// The fixed arrow assigned at shuffle time
    pub arrow: Direction,
    /// True for exactly the cell currently holding the cursor
    pub occupied: bool,
    /// True once the cursor has ever occupied this cell; cleared only by a
    /// full board reset or recreate
    pub visited: bool,
    /// The neighbor the arrow points at, `None` when it points off-grid.
    /// Written only by arrow shuffling; may form cycles with other cells'
    /// successors, which is exactly what the cycle probe inspects.
    pub successor: Option<Pos>,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            arrow: Direction::Up,
            occupied: false,
            visited: false,
            successor: None,
        }
    }
}

impl Cell {
    /// Clear the gameplay flags, leaving arrow and successor untouched
    pub fn clear_marks(&mut self) {
        self.occupied = false;
        self.visited = false;
    }
}
