//! Error type shared by every layer of the engine.

use derive_more::{Display, Error};

use super::coord::Coord;

/// Errors returned by board, engine and controller operations.
///
/// All errors are raised at the point of violation and leave the game
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ReversiError {
    /// Board side length below the minimum of 3, or too large to address.
    #[display("Side length {} is not playable (minimum 3)", _0)]
    InvalidSideLength(#[error(not(source))] u32),

    /// The coordinate is not part of the board.
    #[display("Coordinate {} is not on the board", _0)]
    InvalidCoordinate(#[error(not(source))] Coord),

    /// The target is occupied or captures nothing.
    #[display("Illegal move at {}", _0)]
    IllegalMove(#[error(not(source))] Coord),

    /// A disk is already placed on the tile.
    #[display("Tile {} already holds a disk", _0)]
    TileOccupied(#[error(not(source))] Coord),

    /// The tile has no disk.
    #[display("Tile {} is empty", _0)]
    TileEmpty(#[error(not(source))] Coord),

    /// The game has not been started.
    #[display("Game has not started")]
    NotStarted,

    /// The game was already started.
    #[display("Game has already started")]
    AlreadyStarted,
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, ReversiError>;
