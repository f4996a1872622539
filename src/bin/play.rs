//! Interactive terminal checkers.
//!
//! Reads cell taps from stdin and forwards them into the rules engine the
//! way a pointer-driven frontend would: try to select the cell, fall back
//! to moving the current selection there, fall back to clearing the
//! selection.
//!
//! Commands:
//! - `<row> <col>`: tap a cell
//! - `reset`: restart from the standard layout
//! - `quit` (or `q`): exit

use std::io::{self, BufRead, Write};

use log::{debug, info};

use rust_checkers::game::CheckersGame;
use rust_checkers::render::render_game;

enum Command {
    Tap(usize, usize),
    Reset,
    Quit,
}

fn parse(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    match (words.next()?, words.next(), words.next()) {
        ("quit" | "q", None, _) => Some(Command::Quit),
        ("reset", None, _) => Some(Command::Reset),
        (row, Some(col), None) => {
            let row = row.parse().ok()?;
            let col = col.parse().ok()?;
            Some(Command::Tap(row, col))
        }
        _ => None,
    }
}

/// Dispatch a cell tap: select, else move, else clear the selection.
fn tap(game: &mut CheckersGame, row: usize, col: usize) {
    if game.select(row, col) {
        debug!("selected ({row}, {col})");
    } else if game.move_selected(row, col) {
        debug!("moved to ({row}, {col}), {} to play", game.current_player());
    } else {
        debug!("tap ({row}, {col}) matched nothing, clearing selection");
        game.deselect();
    }
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut game = CheckersGame::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    write!(stdout, "{}> ", render_game(&game))?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(stdout, "> ")?;
            stdout.flush()?;
            continue;
        }

        match parse(&line) {
            Some(Command::Quit) => break,
            Some(Command::Reset) => {
                game.reset();
                info!("game reset");
            }
            Some(Command::Tap(row, col)) => tap(&mut game, row, col),
            None => {
                writeln!(stdout, "commands: <row> <col>, reset, quit")?;
            }
        }

        write!(stdout, "{}", render_game(&game))?;
        if !game.can_any_move() {
            writeln!(stdout, "{} has no legal moves", game.current_player())?;
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    Ok(())
}
