//! Core value types: coordinates, players, tiles, configuration, errors, RNG.
//!
//! Everything here is a plain value with no knowledge of turn order or
//! listeners. The board and the rules engine are built on top.

pub mod coord;
pub mod player;
pub mod tile;
pub mod config;
pub mod error;
pub mod rng;

pub use coord::{Coord, Direction};
pub use player::{Player, PlayerMap};
pub use tile::Tile;
pub use config::{GameConfig, MIN_SIDE_LENGTH};
pub use error::{Result, ReversiError};
pub use rng::GameRng;
