//! Move selection strategies.
//!
//! A strategy inspects a game through `ReadOnlyModel` and proposes the next
//! move for the current player, or `None` to pass. Strategies never mutate
//! the game; the controller plays whatever they return.
//!
//! Ties are always broken towards the upper-left-most coordinate, i.e. the
//! smallest `Coord`, so deterministic strategies stay deterministic no matter
//! how the board is stored.

mod heuristics;
mod random;

pub use heuristics::{CornerSeeking, FirstLegal, MaxCapture};
pub use random::RandomMove;

use crate::core::{Coord, Result};
use crate::rules::ReadOnlyModel;

/// Chooses moves for one player.
pub trait Strategy {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Pick a move for the current player, or `None` to pass.
    fn choose_move(&mut self, model: &dyn ReadOnlyModel) -> Result<Option<Coord>>;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn choose_move(&mut self, model: &dyn ReadOnlyModel) -> Result<Option<Coord>> {
        (**self).choose_move(model)
    }
}
