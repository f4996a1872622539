//! Piece colors and pieces.
//!
//! ## Color
//!
//! The two sides. Red sits on the bottom ranks and moves toward row 0;
//! Black sits on the top ranks and moves toward row 7. Red moves first.
//!
//! ## Piece
//!
//! A checker: a color plus a king flag. Crowning is one-way; a piece never
//! loses its king status.

use serde::{Deserialize, Serialize};

use super::board::BOARD_SIZE;

/// A side in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Row delta for a non-king piece of this color: Red advances toward
    /// row 0, Black toward row 7.
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Red => -1,
            Color::Black => 1,
        }
    }

    /// The back rank that crowns a piece of this color.
    #[must_use]
    pub const fn crown_row(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Black => BOARD_SIZE - 1,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => write!(f, "Red"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A single checker on the board.
///
/// The king flag is private: it starts false and can only transition to
/// true via [`Piece::crown`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    king: bool,
}

impl Piece {
    /// Create an uncrowned piece.
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self { color, king: false }
    }

    /// Create a pre-crowned piece, for setting up positions.
    #[must_use]
    pub const fn king(color: Color) -> Self {
        Self { color, king: true }
    }

    /// Whether this piece has been crowned.
    #[must_use]
    pub const fn is_king(self) -> bool {
        self.king
    }

    /// Crown this piece. Idempotent; there is no un-crowning.
    pub fn crown(&mut self) {
        self.king = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Color::Red.opponent(), Color::Black);
        assert_eq!(Color::Black.opponent(), Color::Red);
    }

    #[test]
    fn test_forward() {
        assert_eq!(Color::Red.forward(), -1);
        assert_eq!(Color::Black.forward(), 1);
    }

    #[test]
    fn test_crown_row() {
        assert_eq!(Color::Red.crown_row(), 0);
        assert_eq!(Color::Black.crown_row(), 7);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Color::Red), "Red");
        assert_eq!(format!("{}", Color::Black), "Black");
    }

    #[test]
    fn test_crowning_is_one_way() {
        let mut piece = Piece::new(Color::Red);
        assert!(!piece.is_king());

        piece.crown();
        assert!(piece.is_king());

        piece.crown(); // Idempotent
        assert!(piece.is_king());
    }

    #[test]
    fn test_king_constructor() {
        assert!(Piece::king(Color::Black).is_king());
        assert_eq!(Piece::king(Color::Black).color, Color::Black);
    }

    #[test]
    fn test_serialization() {
        let piece = Piece::king(Color::Red);
        let json = serde_json::to_string(&piece).unwrap();
        let deserialized: Piece = serde_json::from_str(&json).unwrap();
        assert_eq!(piece, deserialized);
    }
}
