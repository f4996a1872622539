//! Board coordinates.
//!
//! ## Position
//!
//! A `(row, col)` pair with both components in `[0, BOARD_SIZE)`. Positions
//! are plain value types; diagonal stepping is checked, so walking off the
//! board yields `None` rather than wrapping or panicking.

use serde::{Deserialize, Serialize};

use super::board::BOARD_SIZE;

/// A square on the board, `(row, col)` with both in `[0, BOARD_SIZE)`.
///
/// Row 0 is the top of the board (Black's back rank), row 7 the bottom
/// (Red's back rank).
///
/// ```
/// use rust_checkers::core::Position;
///
/// let pos = Position::new(5, 0);
/// assert_eq!(pos.offset(-1, 1), Some(Position::new(4, 1)));
/// assert_eq!(pos.offset(-1, -1), None); // off the left edge
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a position. Both coordinates must be in bounds.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE, "position out of bounds");
        Self { row, col }
    }

    /// Create a position, returning `None` if either coordinate is out of
    /// bounds.
    ///
    /// Use this at API boundaries where coordinates come from untrusted
    /// input (user taps, wire data).
    #[must_use]
    pub const fn try_new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Step diagonally by `(dr, dc)`, returning `None` if the result leaves
    /// the board.
    #[must_use]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row.checked_add_signed(dr as isize)?;
        let col = self.col.checked_add_signed(dc as isize)?;
        Self::try_new(row, col)
    }

    /// Whether this is a dark square. Pieces only ever occupy dark squares.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_bounds() {
        assert_eq!(Position::try_new(0, 0), Some(Position::new(0, 0)));
        assert_eq!(Position::try_new(7, 7), Some(Position::new(7, 7)));
        assert_eq!(Position::try_new(8, 0), None);
        assert_eq!(Position::try_new(0, 8), None);
        assert_eq!(Position::try_new(100, 100), None);
    }

    #[test]
    fn test_offset_in_bounds() {
        let pos = Position::new(4, 3);

        assert_eq!(pos.offset(-1, -1), Some(Position::new(3, 2)));
        assert_eq!(pos.offset(-1, 1), Some(Position::new(3, 4)));
        assert_eq!(pos.offset(1, -1), Some(Position::new(5, 2)));
        assert_eq!(pos.offset(1, 1), Some(Position::new(5, 4)));
        assert_eq!(pos.offset(-2, 2), Some(Position::new(2, 5)));
    }

    #[test]
    fn test_offset_off_board() {
        assert_eq!(Position::new(0, 1).offset(-1, -1), None);
        assert_eq!(Position::new(0, 1).offset(-1, 1), None);
        assert_eq!(Position::new(7, 0).offset(1, 1), None);
        assert_eq!(Position::new(5, 0).offset(-1, -1), None);
        assert_eq!(Position::new(4, 7).offset(-1, 1), None);
        assert_eq!(Position::new(6, 6).offset(2, 2), None);
    }

    #[test]
    fn test_is_dark() {
        assert!(!Position::new(0, 0).is_dark());
        assert!(Position::new(0, 1).is_dark());
        assert!(Position::new(5, 0).is_dark());
        assert!(!Position::new(7, 7).is_dark());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Position::new(5, 0)), "(5, 0)");
    }

    #[test]
    fn test_serialization() {
        let pos = Position::new(3, 4);
        let json = serde_json::to_string(&pos).unwrap();
        let deserialized: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(pos, deserialized);
    }
}
