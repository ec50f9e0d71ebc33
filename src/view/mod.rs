//! Text view of the board.
//!
//! Renders snapshots as ASCII art and can follow a game as a state listener.

mod text;

pub use text::{render, tile_char, TextView};
