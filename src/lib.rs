//! # rust-checkers
//!
//! A minimal 8x8 checkers rules engine for interactive play.
//!
//! ## Design Principles
//!
//! 1. **Engine Owns All State**: board, turn, and selection live behind
//!    [`game::CheckersGame`]; queries hand out value copies, never aliased
//!    references.
//!
//! 2. **Invalid Input Is Not An Error**: every fallible operation returns
//!    a `bool` success flag (or `None`/empty collections for queries) and
//!    leaves state untouched on failure. There are no error types and no
//!    panicking paths for expected input.
//!
//! 3. **Cache Tied To Selection**: candidate moves are computed when a
//!    piece is selected and dropped with the selection; nothing is
//!    memoized across turns.
//!
//! ## Rules Covered
//!
//! Single-step and single-capture diagonal moves, kinging on the back
//! rank, and turn alternation. Deliberately absent: forced captures,
//! multi-jump chains, win/draw detection.
//!
//! ## Modules
//!
//! - `core`: positions, colors, pieces, the board, moves
//! - `rules`: legal move generation
//! - `game`: the `CheckersGame` state holder
//! - `render`: text rendering for terminal frontends

pub mod core;
pub mod game;
pub mod render;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Board, Color, Move, MoveList, Piece, Position, BOARD_SIZE};

pub use crate::game::CheckersGame;

pub use crate::rules::{has_any_move, moves_from};

pub use crate::render::{render_board, render_game};
