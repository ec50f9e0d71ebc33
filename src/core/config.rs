//! Game configuration.
//!
//! The board shape is the only thing a game is configured with: every game
//! uses the same hexagon tiling, opening and turn order.

use serde::{Deserialize, Serialize};

use super::error::{Result, ReversiError};

/// Smallest side length that leaves room around the opening disks.
pub const MIN_SIDE_LENGTH: u32 = 3;

/// Board configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Tiles along one edge of the hexagon.
    pub side_length: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { side_length: 6 }
    }
}

impl GameConfig {
    /// Set the side length (builder pattern).
    #[must_use]
    pub fn with_side_length(mut self, side_length: u32) -> Self {
        self.side_length = side_length;
        self
    }

    /// Check the configuration describes a playable board.
    ///
    /// Besides the minimum, twice the side length must fit `i32` so that
    /// coordinate sums and the step past the edge never overflow, and the
    /// tile count must fit `usize`.
    pub fn validate(&self) -> Result<()> {
        let invalid = ReversiError::InvalidSideLength(self.side_length);
        if self.side_length < MIN_SIDE_LENGTH {
            return Err(invalid);
        }
        self.side_length
            .checked_mul(2)
            .and_then(|diameter| i32::try_from(diameter).ok())
            .ok_or_else(|| invalid.clone())?;
        self.tile_count().ok_or(invalid)?;
        Ok(())
    }

    /// Number of tiles on a board of this size: `3N^2 - 3N + 1`, or `None`
    /// if that overflows `usize`.
    #[must_use]
    pub fn tile_count(&self) -> Option<usize> {
        let n = usize::try_from(self.side_length).ok()?;
        let sides = n.checked_mul(n)?.checked_sub(n)?.checked_mul(3)?;
        sides.checked_add(1)
    }

    /// Distance from the centre to the edge, for a validated configuration.
    pub fn radius(&self) -> Result<i32> {
        self.validate()?;
        i32::try_from(self.side_length - 1)
            .map_err(|_| ReversiError::InvalidSideLength(self.side_length))
    }
}
