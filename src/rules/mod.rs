//! Rules engine.
//!
//! - `capture`: the directional capture search over a board
//! - `engine`: the `ReadOnlyModel` / `Model` traits and `GameResult`
//! - `game`: `HexReversi`, the concrete game state machine
//!
//! Strategies and views see a game only through `ReadOnlyModel`.

pub mod capture;
pub mod engine;
pub mod game;

pub use capture::{Captures, Line};
pub use engine::{GameResult, Model, ReadOnlyModel};
pub use game::HexReversi;
