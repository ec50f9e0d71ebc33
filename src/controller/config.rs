//! Controller configuration.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, Result};

/// Settings for a controller-driven game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Board configuration.
    pub game: GameConfig,

    /// Turns (moves plus passes) after which `run` gives up.
    pub max_turns: usize,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            max_turns: 1_000,
        }
    }
}

impl ControllerConfig {
    /// Set the board side length (builder pattern).
    #[must_use]
    pub fn with_side_length(mut self, side_length: u32) -> Self {
        self.game.side_length = side_length;
        self
    }

    /// Set the turn limit (builder pattern).
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Check the board configuration.
    pub fn validate(&self) -> Result<()> {
        self.game.validate()
    }
}
