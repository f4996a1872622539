//! The 8x8 board.
//!
//! A flat fixed-size grid of optional pieces. Occupancy is disjoint (a
//! square holds at most one piece) and restricted to dark squares for the
//! lifetime of the board.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::piece::{Color, Piece};
use super::position::Position;

/// Board side length.
pub const BOARD_SIZE: usize = 8;

/// Number of initial piece rows per side.
const SETUP_ROWS: usize = 3;

/// An 8x8 checkers board.
///
/// `Board` is a plain value: cloning it yields an independent deep copy,
/// which is what [`crate::game::CheckersGame::board_snapshot`] hands out.
///
/// ```
/// use rust_checkers::core::{Board, Color, Position};
///
/// let board = Board::standard();
/// assert_eq!(board.piece_count(), 24);
/// assert_eq!(board.piece_at(Position::new(5, 0)).unwrap().color, Color::Red);
/// assert_eq!(board.piece_at(Position::new(4, 1)), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board in the standard initial layout: Black on the dark
    /// squares of rows 0-2, Red on the dark squares of rows 5-7.
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Self::new();
        for pos in Self::positions().filter(|p| p.is_dark()) {
            if pos.row < SETUP_ROWS {
                board.place(pos, Piece::new(Color::Black));
            } else if pos.row >= BOARD_SIZE - SETUP_ROWS {
                board.place(pos, Piece::new(Color::Red));
            }
        }
        board
    }

    /// Get a copy of the piece at a position, or `None` if empty.
    #[must_use]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.cells[pos.row][pos.col]
    }

    /// Put a piece on a square, replacing whatever was there.
    ///
    /// Only dark squares are ever occupied.
    pub fn place(&mut self, pos: Position, piece: Piece) {
        debug_assert!(pos.is_dark(), "pieces only occupy dark squares");
        self.cells[pos.row][pos.col] = Some(piece);
    }

    /// Remove and return the piece at a position, if any.
    pub fn take(&mut self, pos: Position) -> Option<Piece> {
        self.cells[pos.row][pos.col].take()
    }

    /// Iterate over all squares in row-major order.
    pub fn positions() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
    }

    /// Iterate over all occupied squares as `(position, piece)` pairs.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Self::positions().filter_map(move |pos| self.piece_at(pos).map(|piece| (pos, piece)))
    }

    /// Total number of pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }
}

impl Index<Position> for Board {
    type Output = Option<Piece>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.row][pos.col]
    }
}
