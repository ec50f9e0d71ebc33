//! Directional capture search.
//!
//! From a candidate move, each of the six axial directions is walked one
//! tile at a time:
//!
//! - an empty tile ends the walk with nothing captured
//! - an opponent disk is collected and the walk continues
//! - an own disk ends the walk and everything collected is captured
//! - leaving the board discards whatever was collected
//!
//! The search only reads the board.

use smallvec::SmallVec;
use tracing::trace;

use crate::board::Board;
use crate::core::{Coord, Direction, Player};

/// Tiles captured along one direction.
pub type Line = SmallVec<[Coord; 8]>;

/// Tiles captured by a whole move.
pub type Captures = SmallVec<[Coord; 16]>;

/// Tiles `mover` would capture walking from `origin` in `direction`.
///
/// `origin` itself is never inspected.
#[must_use]
pub fn captures_in_direction(board: &Board, origin: Coord, direction: Direction, mover: Player) -> Line {
    let mut candidates = Line::new();
    let mut cursor = origin.neighbor(direction);

    while let Some(tile) = board.get(cursor) {
        match tile.top() {
            None => return Line::new(),
            Some(color) if color == mover => return candidates,
            Some(_) => candidates.push(cursor),
        }
        cursor = cursor.neighbor(direction);
    }

    Line::new()
}

/// Every tile `mover` would capture by playing at `origin`, in
/// `Direction::ALL` order.
#[must_use]
pub fn captures(board: &Board, origin: Coord, mover: Player) -> Captures {
    let mut all = Captures::new();
    for direction in Direction::ALL {
        let line = captures_in_direction(board, origin, direction, mover);
        if !line.is_empty() {
            trace!(%origin, ?direction, count = line.len(), "capture line");
        }
        all.extend(line);
    }
    all
}

/// Whether `mover` may play at `origin`: the tile is empty and at least one
/// direction captures something. Off-board coordinates are never legal.
#[must_use]
pub fn is_legal(board: &Board, origin: Coord, mover: Player) -> bool {
    match board.get(origin) {
        Some(tile) if !tile.has_disk() => Direction::ALL
            .into_iter()
            .any(|d| !captures_in_direction(board, origin, d, mover).is_empty()),
        _ => false,
    }
}

/// Whether `mover` has any legal move.
#[must_use]
pub fn has_legal_move(board: &Board, mover: Player) -> bool {
    board.empty_coords().any(|c| is_legal(board, c, mover))
}

/// Every legal move for `mover`, in `Coord` order.
#[must_use]
pub fn legal_moves(board: &Board, mover: Player) -> Vec<Coord> {
    board.empty_coords().filter(|c| is_legal(board, *c, mover)).collect()
}
