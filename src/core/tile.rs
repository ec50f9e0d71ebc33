//! Board cells.
//!
//! A tile is either empty or holds a two-sided disk. Both faces are stored
//! directly, so reading the hidden face never requires touching the tile.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// State of a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// No disk.
    #[default]
    Empty,
    /// A disk showing `top`, with `bottom` facing the board.
    Occupied { top: Player, bottom: Player },
}

impl Tile {
    /// A disk showing `player`, with the opponent's colour underneath.
    #[must_use]
    pub const fn disk(player: Player) -> Self {
        Tile::Occupied {
            top: player,
            bottom: player.other(),
        }
    }

    /// Whether a disk is present.
    #[must_use]
    pub const fn has_disk(&self) -> bool {
        matches!(self, Tile::Occupied { .. })
    }

    /// Visible colour, if any.
    #[must_use]
    pub const fn top(&self) -> Option<Player> {
        match self {
            Tile::Empty => None,
            Tile::Occupied { top, .. } => Some(*top),
        }
    }

    /// Hidden colour, if any.
    #[must_use]
    pub const fn bottom(&self) -> Option<Player> {
        match self {
            Tile::Empty => None,
            Tile::Occupied { bottom, .. } => Some(*bottom),
        }
    }

    /// Place a disk. Returns `false` and leaves the tile alone if occupied.
    pub fn place(&mut self, top: Player, bottom: Player) -> bool {
        if self.has_disk() {
            return false;
        }
        *self = Tile::Occupied { top, bottom };
        true
    }

    /// Swap the faces of the disk, returning the new top colour.
    ///
    /// Returns `None` on an empty tile.
    pub fn flip(&mut self) -> Option<Player> {
        match self {
            Tile::Empty => None,
            Tile::Occupied { top, bottom } => {
                std::mem::swap(top, bottom);
                Some(*top)
            }
        }
    }
}
