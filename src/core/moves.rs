//! Move representation.
//!
//! A move is a source square, a destination square, and optionally the
//! square of a captured piece. Applying a capturing move removes the
//! captured piece atomically with the relocation.
//!
//! Moves are compared structurally; two moves are the same action exactly
//! when all three fields match.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::position::Position;

/// A single move: step or capture.
///
/// ```
/// use rust_checkers::core::{Move, Position};
///
/// let step = Move::step(Position::new(5, 0), Position::new(4, 1));
/// assert!(!step.is_capture());
///
/// let jump = Move::jump(Position::new(4, 1), Position::new(2, 3), Position::new(3, 2));
/// assert_eq!(jump.capture, Some(Position::new(3, 2)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    /// Square of the piece removed by this move, if it is a capture.
    pub capture: Option<Position>,
}

impl Move {
    /// A plain diagonal step.
    #[must_use]
    pub const fn step(from: Position, to: Position) -> Self {
        Self { from, to, capture: None }
    }

    /// A jump that captures the piece at `captured`.
    #[must_use]
    pub const fn jump(from: Position, to: Position, captured: Position) -> Self {
        Self { from, to, capture: Some(captured) }
    }

    /// Whether this move removes an opposing piece.
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.capture.is_some()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.capture {
            Some(captured) => write!(f, "{} x {} -> {}", self.from, captured, self.to),
            None => write!(f, "{} -> {}", self.from, self.to),
        }
    }
}

/// Candidate moves for a single piece.
///
/// A piece has at most 8 candidates (4 step directions + 4 capture
/// directions), so the list lives inline without heap allocation.
pub type MoveList = SmallVec<[Move; 8]>;
