//! The hexagonal board and its tiles.
//!
//! A board is built once from a side length and never changes shape. Only
//! the rules engine mutates the board of a running game; everybody else gets
//! an owned copy through `ReadOnlyModel::snapshot`.

mod board;

pub use board::{Board, OPENING};
