//! Fixed-shape hexagonal board.

use im::OrdMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::core::config::GameConfig;
use crate::core::{Coord, Player, PlayerMap, Result, ReversiError, Tile};

/// The six opening disks around the centre, alternating colours.
pub const OPENING: [(Coord, Player); 6] = [
    (Coord::new(0, -1), Player::One),
    (Coord::new(1, -1), Player::Two),
    (Coord::new(1, 0), Player::One),
    (Coord::new(0, 1), Player::Two),
    (Coord::new(-1, 1), Player::One),
    (Coord::new(-1, 0), Player::Two),
];

/// A hexagon of tiles addressed by axial coordinates.
///
/// The coordinate set is fixed when the board is built; only tile states
/// change afterwards. Tiles live in a persistent ordered map, so cloning a
/// board is O(1) and the clone shares nothing observable with the original.
/// Iteration always follows `Coord` order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "BoardRepr", try_from = "BoardRepr")]
pub struct Board {
    side_length: u32,
    radius: i32,
    tiles: OrdMap<Coord, Tile>,
}

impl Board {
    /// Build a board with the standard opening.
    #[instrument]
    pub fn new(side_length: u32) -> Result<Self> {
        let mut board = Self::empty(side_length)?;
        for (coord, player) in OPENING {
            board.place_disk(coord, player, player.other())?;
        }
        debug!(tiles = board.len(), "board seeded");
        Ok(board)
    }

    /// Build a board from a configuration.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        Self::new(config.side_length)
    }

    /// Build a board with every tile empty.
    pub fn empty(side_length: u32) -> Result<Self> {
        let radius = GameConfig::default().with_side_length(side_length).radius()?;

        let mut tiles = OrdMap::new();
        for r in -radius..=radius {
            let q_min = (-radius).max(-r - radius);
            let q_max = radius.min(-r + radius);
            for q in q_min..=q_max {
                tiles.insert(Coord::new(q, r), Tile::Empty);
            }
        }

        Ok(Self {
            side_length,
            radius,
            tiles,
        })
    }

    /// Tiles along one edge.
    #[must_use]
    pub fn side_length(&self) -> u32 {
        self.side_length
    }

    /// Distance from the centre to the edge.
    #[must_use]
    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false; a board has at least 19 tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether `coord` is on the board.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.tiles.contains_key(&coord)
    }

    /// The tile at `coord`.
    pub fn tile(&self, coord: Coord) -> Result<Tile> {
        self.tiles
            .get(&coord)
            .copied()
            .ok_or(ReversiError::InvalidCoordinate(coord))
    }

    /// The tile at `coord`, or `None` off the board.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Tile> {
        self.tiles.get(&coord).copied()
    }

    /// Whether a disk sits at `coord`.
    pub fn has_disk(&self, coord: Coord) -> Result<bool> {
        Ok(self.tile(coord)?.has_disk())
    }

    /// Visible colour of the disk at `coord`.
    pub fn top_color(&self, coord: Coord) -> Result<Player> {
        self.tile(coord)?.top().ok_or(ReversiError::TileEmpty(coord))
    }

    /// Put a disk on an empty tile.
    pub fn place_disk(&mut self, coord: Coord, top: Player, bottom: Player) -> Result<()> {
        let tile = self
            .tiles
            .get_mut(&coord)
            .ok_or(ReversiError::InvalidCoordinate(coord))?;
        if !tile.place(top, bottom) {
            return Err(ReversiError::TileOccupied(coord));
        }
        Ok(())
    }

    /// Turn the disk at `coord` over, returning its new top colour.
    pub fn flip(&mut self, coord: Coord) -> Result<Player> {
        self.tiles
            .get_mut(&coord)
            .ok_or(ReversiError::InvalidCoordinate(coord))?
            .flip()
            .ok_or(ReversiError::TileEmpty(coord))
    }

    /// Iterate over `(coord, tile)` in `Coord` order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Tile)> + '_ {
        self.tiles.iter().map(|(c, t)| (*c, *t))
    }

    /// Iterate over coordinates in `Coord` order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.tiles.keys().copied()
    }

    /// Empty coordinates in `Coord` order.
    pub fn empty_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.iter()
            .filter(|(_, tile)| !tile.has_disk())
            .map(|(coord, _)| coord)
    }

    /// Number of disks showing `player`.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.tiles
            .values()
            .filter(|tile| tile.top() == Some(player))
            .count()
    }

    /// Disk counts for both players.
    #[must_use]
    pub fn counts(&self) -> PlayerMap<usize> {
        let mut counts = PlayerMap::with_value(0);
        for top in self.tiles.values().filter_map(Tile::top) {
            counts[top] += 1;
        }
        counts
    }

    /// Whether every tile holds a disk.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.tiles.values().all(Tile::has_disk)
    }

    /// The six corner tiles, in `Coord` order.
    #[must_use]
    pub fn corners(&self) -> Vec<Coord> {
        let r = self.radius();
        let mut corners = vec![
            Coord::new(0, -r),
            Coord::new(r, -r),
            Coord::new(-r, 0),
            Coord::new(r, 0),
            Coord::new(-r, r),
            Coord::new(0, r),
        ];
        corners.sort();
        corners
    }

    /// Rows of the board, top to bottom, each in `Coord` order.
    pub fn rows(&self) -> impl Iterator<Item = (i32, Vec<(Coord, Tile)>)> + '_ {
        let radius = self.radius();
        (-radius..=radius).map(move |r| {
            let row = self.iter().filter(|(c, _)| c.r == r).collect();
            (r, row)
        })
    }
}

/// Serialized form: the side length plus every occupied tile.
#[derive(Serialize, Deserialize)]
struct BoardRepr {
    side_length: u32,
    disks: Vec<(Coord, Tile)>,
}

impl From<Board> for BoardRepr {
    fn from(board: Board) -> Self {
        let disks = board.iter().filter(|(_, tile)| tile.has_disk()).collect();
        Self {
            side_length: board.side_length,
            disks,
        }
    }
}

impl TryFrom<BoardRepr> for Board {
    type Error = ReversiError;

    fn try_from(repr: BoardRepr) -> Result<Self> {
        let mut board = Board::empty(repr.side_length)?;
        for (coord, tile) in repr.disks {
            if let Tile::Occupied { top, bottom } = tile {
                board.place_disk(coord, top, bottom)?;
            }
        }
        Ok(board)
    }
}
