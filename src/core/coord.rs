//! Axial hex coordinates.
//!
//! ## Layout
//!
//! A cell is addressed by `(q, r)`. The implicit third axis is `s = -q - r`.
//! The centre of every board is `(0, 0)` and a board with side length `N`
//! contains exactly the cells whose distance to the centre is at most `N - 1`.
//!
//! ## Ordering
//!
//! Coordinates are totally ordered by `r` ascending, then `q` ascending.
//! This reads the board top row first, left to right, so the smallest
//! coordinate of any set is its "upper-left-most" member.
//!
//! ```
//! use hex_reversi::core::Coord;
//!
//! let mut cells = vec![Coord::new(1, 0), Coord::new(-1, 1), Coord::new(2, -1)];
//! cells.sort();
//! assert_eq!(cells, vec![Coord::new(2, -1), Coord::new(1, 0), Coord::new(-1, 1)]);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Axial hex coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub q: i32,
    pub r: i32,
}

impl Coord {
    /// The centre cell.
    pub const ORIGIN: Coord = Coord::new(0, 0);

    /// Create a new coordinate.
    #[must_use]
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The derived third axis, `-q - r`.
    #[must_use]
    pub const fn s(self) -> i32 {
        -self.q - self.r
    }

    /// Hex distance from the centre.
    #[must_use]
    pub fn distance_to_center(self) -> i32 {
        self.q.abs().max(self.r.abs()).max(self.s().abs())
    }

    /// Hex distance between two coordinates.
    #[must_use]
    pub fn distance_to(self, other: Coord) -> i32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = (self.s() - other.s()).abs();
        dq.max(dr).max(ds)
    }

    /// Offset this coordinate by a raw step.
    #[must_use]
    pub const fn step(self, dq: i32, dr: i32) -> Self {
        Self::new(self.q + dq, self.r + dr)
    }

    /// The adjacent cell in `direction`.
    #[must_use]
    pub const fn neighbor(self, direction: Direction) -> Self {
        let (dq, dr) = direction.delta();
        self.step(dq, dr)
    }

    /// All six neighbours, in `Direction::ALL` order.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        Direction::ALL.into_iter().map(move |d| self.neighbor(d))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.r.cmp(&other.r).then(self.q.cmp(&other.q))
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

/// One of the six axial unit directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// (-1, 0)
    West,
    /// (0, -1)
    NorthWest,
    /// (1, -1)
    NorthEast,
    /// (1, 0)
    East,
    /// (0, 1)
    SouthEast,
    /// (-1, 1)
    SouthWest,
}

impl Direction {
    /// Every direction, in capture search order.
    pub const ALL: [Direction; 6] = [
        Direction::West,
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// The `(dq, dr)` step for this direction.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::West => (-1, 0),
            Direction::NorthWest => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (0, 1),
            Direction::SouthWest => (-1, 1),
        }
    }

    /// The direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::SouthWest => Direction::NorthEast,
        }
    }
}
