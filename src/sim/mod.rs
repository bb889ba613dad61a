//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Driven by an external fixed-period tick, one step per call
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod board;
pub mod cell;
pub mod cycle;

pub use board::{Board, BoardEvent, InvalidSize};
pub use cell::{Cell, Direction, Pos};
pub use cycle::will_loop;
