//! # hex-reversi
//!
//! Rules engine for Reversi played on a regular hexagon of hex tiles.
//!
//! ## Design Principles
//!
//! 1. **One Writer**: `HexReversi` is the only thing that mutates its board.
//!    Everyone else reads through `ReadOnlyModel` or works on a snapshot.
//!
//! 2. **Explicit Lifecycle**: a game is created unstarted, listeners are
//!    registered, then `start_game` hands Player One the first turn.
//!
//! 3. **Pure Queries**: game over, legality and scores are recomputed from
//!    the board on every call and never change observable state.
//!
//! ## Coordinates
//!
//! Axial `(q, r)` with the centre at `(0, 0)`. The six neighbours of a cell
//! are `(-1,0) (0,-1) (1,-1) (1,0) (0,1) (-1,1)` away. Coordinates order by
//! row, then column, so the smallest coordinate is the upper-left-most one.
//!
//! ## Modules
//!
//! - `core`: coordinates, players, tiles, configuration, errors, RNG
//! - `board`: the fixed-shape hexagonal board
//! - `rules`: capture search, model traits, the `HexReversi` engine
//! - `listeners`: turn and state-change notification
//! - `strategy`: move choosers built on the read-only surface
//! - `controller`: plays a game between two strategies
//! - `view`: text rendering
//!
//! ## Example
//!
//! ```
//! use hex_reversi::{Coord, HexReversi, Model, Player, ReadOnlyModel};
//!
//! let mut game = HexReversi::new(6).unwrap();
//! game.start_game().unwrap();
//!
//! let flipped = game.move_at(Coord::new(1, 1)).unwrap();
//! assert_eq!(flipped, vec![Coord::new(0, 1)]);
//! assert_eq!(game.current_player_color().unwrap(), Player::Two);
//! assert_eq!(game.score(Player::One).unwrap(), 5);
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod listeners;
pub mod strategy;
pub mod controller;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    Coord, Direction,
    Player, PlayerMap,
    Tile,
    GameConfig, GameRng,
    Result, ReversiError,
};

pub use crate::board::Board;

pub use crate::rules::{GameResult, HexReversi, Model, ReadOnlyModel};

pub use crate::listeners::{
    ListenerRegistry, StateHandler, StateListener, TurnHandler, TurnListener,
};

pub use crate::strategy::{CornerSeeking, FirstLegal, MaxCapture, RandomMove, Strategy};

pub use crate::controller::{ControllerConfig, GameController, TurnOutcome};

pub use crate::view::TextView;
