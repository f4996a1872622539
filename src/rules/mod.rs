//! Movement rules.

pub mod movegen;

pub use movegen::{has_any_move, moves_from};
