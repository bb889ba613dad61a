//! The arrow board: grid state, cursor advancement, and the static probe
//!
//! The board is mutated only by a single external driver (tick handler plus
//! input handlers); nothing here blocks, suspends, or calls back out. The
//! front-end learns about noteworthy moments by draining [`BoardEvent`]s.

use std::fmt::{self, Display, Formatter};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::cell::{Cell, Direction, Pos};
use super::cycle::will_loop;
use crate::consts::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Requested board dimensions fall outside the constructible range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSize {
    pub rows: usize,
    pub cols: usize,
}

impl Display for InvalidSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "board size {}x{} is outside {}..={}",
            self.rows, self.cols, MIN_BOARD_SIZE, MAX_BOARD_SIZE
        )
    }
}

impl std::error::Error for InvalidSize {}

/// Notifications for the front-end (audio/visual feedback), not sim state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardEvent {
    /// The cursor occupied a cell
    Step(Pos),
    /// The round ended because the cursor's arrow led to an already-visited
    /// cell (payload: the visited cell it ran into)
    Collision(Pos),
    /// The round ended because the cursor's arrow pointed off the board
    /// (payload: the cell the cursor ended on)
    Escaped(Pos),
}

/// The grid simulation: cells, cursor, and round state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Dense row-major grid
    cells: Vec<Cell>,
    /// Active cursor position; `None` on a fresh or reset board
    cursor: Option<Pos>,
    round_over: bool,
    /// Seed the board was created with, kept for reproducibility
    seed: u64,
    rng: Pcg32,
    /// Pending notifications, drained by the front-end each tick
    #[serde(skip)]
    events: Vec<BoardEvent>,
}

impl Board {
    /// Create a board and shuffle its arrows.
    ///
    /// Both dimensions must lie within
    /// [`MIN_BOARD_SIZE`]`..=`[`MAX_BOARD_SIZE`]; nothing is allocated on
    /// failure.
    pub fn new(rows: usize, cols: usize, seed: u64) -> Result<Self, InvalidSize> {
        let range = MIN_BOARD_SIZE..=MAX_BOARD_SIZE;
        if !range.contains(&rows) || !range.contains(&cols) {
            return Err(InvalidSize { rows, cols });
        }

        let mut board = Self {
            rows,
            cols,
            cells: vec![Cell::default(); rows * cols],
            cursor: None,
            round_over: false,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        };
        board.shuffle_arrows();
        Ok(board)
    }

    pub fn num_rows(&self) -> usize {
        self.rows
    }

    pub fn num_cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn round_over(&self) -> bool {
        self.round_over
    }

    /// Active cursor position, if a round has been seeded
    pub fn cursor(&self) -> Option<Pos> {
        self.cursor
    }

    /// Seed this board was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The cell at `pos`, or `None` out of bounds
    pub fn cell(&self, pos: Pos) -> Option<&Cell> {
        if pos.row < self.rows && pos.col < self.cols {
            Some(&self.cells[pos.row * self.cols + pos.col])
        } else {
            None
        }
    }

    /// Take all notifications emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<BoardEvent> {
        std::mem::take(&mut self.events)
    }

    /// Discard every cell and start over with a fresh shuffle.
    ///
    /// Unlike [`reset`](Self::reset), this re-randomizes the arrows.
    pub fn recreate(&mut self) {
        self.cells = vec![Cell::default(); self.rows * self.cols];
        self.cursor = None;
        self.round_over = false;
        self.shuffle_arrows();
    }

    /// Clear gameplay state, keeping the current arrow assignment.
    ///
    /// Idempotent; arrows and successor links are bit-for-bit untouched.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.clear_marks();
        }
        self.cursor = None;
        self.round_over = false;
    }

    /// Assign every cell a fresh uniformly random arrow, row-major, and
    /// recompute its successor link.
    ///
    /// This is the only writer of `successor`. Gameplay flags are left
    /// alone; the static pointer graph is independent of them.
    pub fn shuffle_arrows(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let dir = Direction::random(&mut self.rng);
                self.assign_arrow(Pos::new(row, col), dir);
            }
        }
    }

    /// Point `pos` in direction `dir` and relink its successor
    fn assign_arrow(&mut self, pos: Pos, dir: Direction) {
        let successor = self.neighbor(pos, dir);
        let cell = &mut self.cells[pos.row * self.cols + pos.col];
        cell.arrow = dir;
        cell.successor = successor;
    }

    /// The grid-adjacent neighbor of `pos` in direction `dir`, `None` if it
    /// is off the board
    fn neighbor(&self, pos: Pos, dir: Direction) -> Option<Pos> {
        let (dr, dc) = dir.delta();
        let row = pos.row.checked_add_signed(dr)?;
        let col = pos.col.checked_add_signed(dc)?;
        if row < self.rows && col < self.cols {
            Some(Pos::new(row, col))
        } else {
            None
        }
    }

    /// Mark `pos` occupied and visited and move the cursor onto it.
    ///
    /// The previous cell's `occupied` flag is deliberately left alone; the
    /// caller clears it once the hand-off is complete (see
    /// [`advance_cursor`](Self::advance_cursor)). Out-of-bounds positions
    /// are a safe no-op.
    pub fn occupy_cell(&mut self, pos: Pos) {
        if pos.row >= self.rows || pos.col >= self.cols {
            return;
        }
        let cell = &mut self.cells[pos.row * self.cols + pos.col];
        cell.occupied = true;
        cell.visited = true;
        self.cursor = Some(pos);
        self.events.push(BoardEvent::Step(pos));
    }

    /// Advance the cursor one step along the current cell's arrow.
    ///
    /// Returns whether the round is over. A board with no cursor, or a
    /// finished round, is a no-op.
    pub fn advance_cursor(&mut self) -> bool {
        let Some(cur) = self.cursor else {
            return self.round_over;
        };
        if self.round_over {
            return true;
        }

        let arrow = self.cells[cur.row * self.cols + cur.col].arrow;
        match self.neighbor(cur, arrow) {
            None => {
                // Walked off the edge; the cursor stays put, still occupied
                self.round_over = true;
                self.events.push(BoardEvent::Escaped(cur));
            }
            Some(next) if self.cells[next.row * self.cols + next.col].visited => {
                self.round_over = true;
                self.events.push(BoardEvent::Collision(next));
            }
            Some(next) => {
                self.occupy_cell(next);
                self.cells[cur.row * self.cols + cur.col].occupied = false;
            }
        }
        self.round_over
    }

    /// Drop the cursor on a uniformly random cell and probe its fate.
    ///
    /// The probe result is purely informational; it never gates the round.
    /// Returns the seeded position, or `None` on a board with no cells.
    pub fn seed_path(&mut self) -> Option<Pos> {
        if self.is_empty() {
            return None;
        }
        let pos = Pos::new(
            self.rng.random_range(0..self.rows),
            self.rng.random_range(0..self.cols),
        );
        self.occupy_cell(pos);

        let loops = self.probe(pos);
        log::info!(
            "seeded at ({}, {}); the marker can {}escape",
            pos.row,
            pos.col,
            if loops { "not " } else { "" }
        );
        Some(pos)
    }

    /// Would following successor links from `pos` loop back on itself?
    ///
    /// Reads only the static pointer graph laid down by the last shuffle;
    /// `visited`/`occupied` play no part, so this can be asked before any
    /// gameplay happens. Out-of-bounds positions are vacuously loop-free.
    pub fn probe(&self, pos: Pos) -> bool {
        let start = self.cell(pos).map(|_| pos);
        will_loop(start, |p| self.cell(p).and_then(|c| c.successor))
    }
}
