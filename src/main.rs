//! Arrow Walk entry point
//!
//! A headless terminal front-end: builds a board from settings, drops the
//! marker on a random cell, then advances it once per tick and redraws the
//! grid as text until the round ends. Only reads sim state and drains sim
//! events; all game rules live in `arrow_walk::sim`.

use std::path::Path;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use rand::Rng;

use arrow_walk::sim::{Board, BoardEvent, Pos};
use arrow_walk::Settings;

const SETTINGS_PATH: &str = "arrow-walk.json";

/// Render the grid as text: `*` marks the cursor, `.` a visited cell,
/// otherwise the cell's arrow glyph
fn render(board: &Board) -> String {
    let mut out = String::with_capacity((board.num_cols() * 2 + 1) * board.num_rows());
    for row in 0..board.num_rows() {
        for col in 0..board.num_cols() {
            let cell = board
                .cell(Pos::new(row, col))
                .expect("in-bounds cell");
            let glyph = if cell.occupied {
                '*'
            } else if cell.visited {
                '.'
            } else {
                cell.arrow.glyph()
            };
            out.push(glyph);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

fn report(event: BoardEvent) {
    match event {
        BoardEvent::Step(pos) => log::debug!("step onto ({}, {})", pos.row, pos.col),
        BoardEvent::Collision(pos) => {
            log::info!("ran into its own trail at ({}, {})", pos.row, pos.col);
        }
        BoardEvent::Escaped(pos) => {
            log::info!("walked off the board from ({}, {})", pos.row, pos.col);
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Arrow Walk starting...");

    let settings = Settings::load(Path::new(SETTINGS_PATH));
    let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
    log::info!(
        "board {}x{}, tick {} ms, seed {seed}",
        settings.rows,
        settings.cols,
        settings.tick_ms
    );

    let mut board = match Board::new(settings.rows, settings.cols, seed) {
        Ok(board) => board,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    board.seed_path();
    let tick = Duration::from_millis(settings.tick_ms);

    loop {
        println!("{}", render(&board));
        for event in board.drain_events() {
            report(event);
        }
        if board.round_over() {
            break;
        }
        thread::sleep(tick);
        board.advance_cursor();
    }

    log::info!("Round over");
    ExitCode::SUCCESS
}
