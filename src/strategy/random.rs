//! Uniformly random move selection.

use crate::core::{Coord, GameRng, Result};
use crate::rules::ReadOnlyModel;

use super::Strategy;

/// Plays a uniformly random legal move. Deterministic for a given seed.
#[derive(Clone, Debug)]
pub struct RandomMove {
    rng: GameRng,
}

impl RandomMove {
    /// Random strategy seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// Random strategy drawing from an existing stream.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    /// An independent random strategy forked from this one's stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self::from_rng(self.rng.fork())
    }
}

impl Strategy for RandomMove {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, model: &dyn ReadOnlyModel) -> Result<Option<Coord>> {
        let moves = model.legal_moves()?;
        Ok(self.rng.choose(&moves).copied())
    }
}
