//! Legal move generation for a single piece.
//!
//! ## Rules
//!
//! - Non-king pieces move along the two forward diagonals for their color;
//!   kings use all four diagonals.
//! - A step lands on an adjacent empty diagonal square.
//! - A capture jumps an adjacent opposing piece onto the empty square
//!   behind it, recording the jumped square on the move.
//! - Capture depth is one: no multi-jump chains are searched, even when a
//!   further capture would be available after landing.
//! - Captures are not forced: steps and captures are both returned.

use crate::core::{Board, Color, Move, MoveList, Piece, Position};

/// The four diagonal directions, forward-for-Red first.
const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Directions a piece may move in.
fn directions(piece: Piece) -> &'static [(i8, i8)] {
    if piece.is_king() {
        &DIAGONALS
    } else if piece.color == Color::Red {
        &DIAGONALS[..2]
    } else {
        &DIAGONALS[2..]
    }
}

/// Compute the candidate moves for the piece at `from`.
///
/// Returns an empty list if the square is empty. Steps come before
/// captures in the returned list.
///
/// ```
/// use rust_checkers::core::{Board, Move, Position};
/// use rust_checkers::rules::moves_from;
///
/// let board = Board::standard();
/// let moves = moves_from(&board, Position::new(5, 0));
/// assert_eq!(moves.as_slice(), &[Move::step(Position::new(5, 0), Position::new(4, 1))]);
/// ```
#[must_use]
pub fn moves_from(board: &Board, from: Position) -> MoveList {
    let mut moves = MoveList::new();
    let Some(piece) = board.piece_at(from) else {
        return moves;
    };
    let dirs = directions(piece);

    // Steps: adjacent empty diagonal.
    for &(dr, dc) in dirs {
        if let Some(to) = from.offset(dr, dc) {
            if board.piece_at(to).is_none() {
                moves.push(Move::step(from, to));
            }
        }
    }

    // Captures: empty landing square two away, opposing piece between.
    for &(dr, dc) in dirs {
        let Some(over) = from.offset(dr, dc) else {
            continue;
        };
        let Some(to) = from.offset(2 * dr, 2 * dc) else {
            continue;
        };
        if board.piece_at(to).is_some() {
            continue;
        }
        if let Some(jumped) = board.piece_at(over) {
            if jumped.color != piece.color {
                moves.push(Move::jump(from, to, over));
            }
        }
    }

    moves
}

/// Whether any piece of `color` has at least one legal move.
///
/// Scans the whole board with the same generator used for selection.
#[must_use]
pub fn has_any_move(board: &Board, color: Color) -> bool {
    board
        .pieces()
        .filter(|&(_, piece)| piece.color == color)
        .any(|(pos, _)| !moves_from(board, pos).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directions_non_king() {
        assert_eq!(directions(Piece::new(Color::Red)), &[(-1, -1), (-1, 1)]);
        assert_eq!(directions(Piece::new(Color::Black)), &[(1, -1), (1, 1)]);
    }

    #[test]
    fn test_directions_king() {
        assert_eq!(directions(Piece::king(Color::Red)).len(), 4);
        assert_eq!(directions(Piece::king(Color::Black)).len(), 4);
    }

    #[test]
    fn test_empty_square_has_no_moves() {
        let board = Board::standard();
        assert!(moves_from(&board, Position::new(4, 1)).is_empty());
    }

    #[test]
    fn test_back_row_piece_is_blocked_at_start() {
        // (6, 1)'s forward diagonals are both occupied by its own side.
        let board = Board::standard();
        assert!(moves_from(&board, Position::new(6, 1)).is_empty());
    }

    #[test]
    fn test_has_any_move_standard() {
        let board = Board::standard();
        assert!(has_any_move(&board, Color::Red));
        assert!(has_any_move(&board, Color::Black));
    }

    #[test]
    fn test_has_any_move_empty_board() {
        let board = Board::new();
        assert!(!has_any_move(&board, Color::Red));
        assert!(!has_any_move(&board, Color::Black));
    }
}
