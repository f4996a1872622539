//! Plain-text board rendering for terminal frontends.
//!
//! Pure functions from game state to strings; nothing here mutates the
//! engine. The selected square is wrapped in parentheses and every cached
//! destination is marked with `*`, mirroring what a graphical frontend
//! would highlight.

use crate::core::{Board, Color, Piece, Position, BOARD_SIZE};
use crate::game::CheckersGame;

/// Glyph for one cell: men are lowercase, kings uppercase, empty dark
/// squares show a dot.
fn glyph(cell: Option<Piece>, dark: bool) -> char {
    match cell {
        Some(piece) => match (piece.color, piece.is_king()) {
            (Color::Red, false) => 'r',
            (Color::Red, true) => 'R',
            (Color::Black, false) => 'b',
            (Color::Black, true) => 'B',
        },
        None if dark => '.',
        None => ' ',
    }
}

fn render(board: &Board, selected: Option<Position>, destinations: &[Position]) -> String {
    let mut out = String::new();

    out.push_str("   ");
    for col in 0..BOARD_SIZE {
        out.push_str(&format!(" {col} "));
    }
    out.push('\n');

    for row in 0..BOARD_SIZE {
        out.push_str(&format!(" {row} "));
        for col in 0..BOARD_SIZE {
            let pos = Position::new(row, col);
            let g = glyph(board.piece_at(pos), pos.is_dark());
            if selected == Some(pos) {
                out.push_str(&format!("({g})"));
            } else if destinations.contains(&pos) {
                out.push_str(" * ");
            } else {
                out.push_str(&format!(" {g} "));
            }
        }
        out.push('\n');
    }

    out
}

/// Render a bare board with no highlights.
#[must_use]
pub fn render_board(board: &Board) -> String {
    render(board, None, &[])
}

/// Render a game: board with selection and destination highlights, plus
/// whose turn it is.
#[must_use]
pub fn render_game(game: &CheckersGame) -> String {
    let destinations: Vec<Position> = game.valid_moves().iter().map(|mv| mv.to).collect();
    let mut out = render(game.board(), game.selected(), &destinations);
    out.push_str(&format!("{} to move\n", game.current_player()));
    out
}
