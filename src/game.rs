//! The `CheckersGame` state holder.
//!
//! ## State
//!
//! Owns the board, the side to move, and an optional selection. The
//! selection pairs a square of the current player with the cached list of
//! candidate moves from that square; the cache is recomputed on every
//! selection and dropped on deselection or a completed move, never reused
//! across turns.
//!
//! ## Contract
//!
//! Expected invalid input (out-of-bounds coordinates, selecting an empty
//! or opposing square, moving to a non-candidate square) is an ordinary
//! negative result: the operation returns `false` and leaves every field
//! untouched. Queries hand out value copies, never aliased references into
//! the board.

use crate::core::{Board, Color, Move, MoveList, Piece, Position};
use crate::rules::{has_any_move, moves_from};

/// The current selection: a square plus its cached candidate moves.
#[derive(Clone, Debug)]
struct Selection {
    pos: Position,
    moves: MoveList,
}

/// An 8x8 checkers game: board, turn, and selection state.
///
/// Drives the full no-selection / selection cycle:
///
/// ```
/// use rust_checkers::{CheckersGame, Color};
///
/// let mut game = CheckersGame::new();
/// assert_eq!(game.current_player(), Color::Red);
///
/// assert!(game.select(5, 0));
/// assert!(game.move_selected(4, 1));
/// assert_eq!(game.current_player(), Color::Black);
/// ```
#[derive(Clone, Debug)]
pub struct CheckersGame {
    board: Board,
    current_player: Color,
    selection: Option<Selection>,
}

impl CheckersGame {
    /// Create a game in the standard initial layout, Red to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::standard(),
            current_player: Color::Red,
            selection: None,
        }
    }

    /// Create a game from an arbitrary position with `to_move` to play and
    /// no selection. For scenario setup in tests and frontends.
    #[must_use]
    pub fn with_board(board: Board, to_move: Color) -> Self {
        Self {
            board,
            current_player: to_move,
            selection: None,
        }
    }

    /// Reinitialize to the standard layout: Black on rows 0-2, Red on rows
    /// 5-7, Red to move, no selection.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The side to move.
    #[must_use]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// A copy of the piece at `(row, col)`.
    ///
    /// Returns `None` for empty squares and for out-of-bounds coordinates;
    /// out-of-bounds is not an error.
    #[must_use]
    pub fn piece(&self, row: usize, col: usize) -> Option<Piece> {
        let pos = Position::try_new(row, col)?;
        self.board.piece_at(pos)
    }

    /// The selected square, if any.
    #[must_use]
    pub fn selected(&self) -> Option<Position> {
        self.selection.as_ref().map(|s| s.pos)
    }

    /// Select one of the current player's pieces.
    ///
    /// Succeeds only if `(row, col)` is in bounds and holds a piece of the
    /// current player's color; on success the candidate moves for that
    /// square are recomputed and cached. A piece with no moves can still be
    /// selected (its cache is just empty). On failure nothing changes.
    pub fn select(&mut self, row: usize, col: usize) -> bool {
        let Some(pos) = Position::try_new(row, col) else {
            return false;
        };
        match self.board.piece_at(pos) {
            Some(piece) if piece.color == self.current_player => {
                let moves = moves_from(&self.board, pos);
                self.selection = Some(Selection { pos, moves });
                true
            }
            _ => false,
        }
    }

    /// Clear the selection and its cached moves. Always succeeds.
    pub fn deselect(&mut self) {
        self.selection = None;
    }

    /// A copy of the cached candidate moves for the current selection, or
    /// an empty list if nothing is selected.
    #[must_use]
    pub fn valid_moves(&self) -> MoveList {
        self.selection
            .as_ref()
            .map(|s| s.moves.clone())
            .unwrap_or_default()
    }

    /// Move the selected piece to `(to_row, to_col)`.
    ///
    /// Succeeds only if a selection exists and the destination matches one
    /// of its cached candidates. On success, atomically: the piece is
    /// relocated, the captured piece (if the move carries one) is removed,
    /// the piece is crowned when it lands on its back rank, the selection
    /// is cleared, and the turn flips. On failure nothing changes.
    pub fn move_selected(&mut self, to_row: usize, to_col: usize) -> bool {
        let Some(selection) = self.selection.as_ref() else {
            return false;
        };
        let Some(mv) = find_move(&selection.moves, to_row, to_col) else {
            return false;
        };

        let Some(mut piece) = self.board.take(mv.from) else {
            // The selection invariant guarantees an occupied source square.
            debug_assert!(false, "selected square must hold a piece");
            return false;
        };

        if let Some(captured) = mv.capture {
            self.board.take(captured);
        }

        if !piece.is_king() && mv.to.row == piece.color.crown_row() {
            piece.crown();
        }
        self.board.place(mv.to, piece);

        self.selection = None;
        self.current_player = self.current_player.opponent();
        true
    }

    /// Read-only view of the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Deep value copy of the board, for read-only consumption.
    #[must_use]
    pub fn board_snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Whether the current player has at least one legal move.
    #[must_use]
    pub fn can_any_move(&self) -> bool {
        has_any_move(&self.board, self.current_player)
    }
}

impl Default for CheckersGame {
    fn default() -> Self {
        Self::new()
    }
}

/// Find the cached candidate landing on `(to_row, to_col)`, if any.
///
/// Steps land one square away and captures two, so at most one candidate
/// matches a destination.
fn find_move(moves: &MoveList, to_row: usize, to_col: usize) -> Option<Move> {
    moves
        .iter()
        .copied()
        .find(|mv| mv.to.row == to_row && mv.to.col == to_col)
}
