//! Plain-text rendering of a board.

use std::cell::{Cell, RefCell};

use crate::board::Board;
use crate::core::{Player, Tile};
use crate::listeners::StateListener;
use crate::rules::ReadOnlyModel;

/// Character for a tile: `X` for Player One, `O` for Player Two, `_` empty.
#[must_use]
pub fn tile_char(tile: Tile) -> char {
    match tile.top() {
        Some(Player::One) => 'X',
        Some(Player::Two) => 'O',
        None => '_',
    }
}

/// Render the board one row per line, top row first. Each row is indented
/// by its distance from the middle row so the hexagon keeps its shape.
#[must_use]
pub fn render(board: &Board) -> String {
    let mut out = String::new();
    for (r, row) in board.rows() {
        out.push_str(&" ".repeat(r.unsigned_abs() as usize));
        let cells: Vec<String> = row.iter().map(|(_, t)| tile_char(*t).to_string()).collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render(self))
    }
}

/// A state listener that keeps a text rendering of the game.
///
/// Listeners may not touch the model from inside a callback, so `changed`
/// only marks the view stale; `refresh` re-renders from a model afterwards.
#[derive(Debug)]
pub struct TextView {
    text: RefCell<String>,
    stale: Cell<bool>,
    changes: Cell<usize>,
}

impl TextView {
    /// An empty, stale view.
    #[must_use]
    pub fn new() -> Self {
        Self {
            text: RefCell::new(String::new()),
            stale: Cell::new(true),
            changes: Cell::new(0),
        }
    }

    /// Re-render from `model` if anything changed since the last refresh.
    /// Returns whether the text was updated.
    pub fn refresh(&self, model: &dyn ReadOnlyModel) -> bool {
        if !self.stale.get() {
            return false;
        }
        *self.text.borrow_mut() = render(&model.snapshot());
        self.stale.set(false);
        true
    }

    /// Latest rendering.
    #[must_use]
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    /// Whether a change arrived since the last refresh.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.stale.get()
    }

    /// Number of change notifications received.
    #[must_use]
    pub fn changes(&self) -> usize {
        self.changes.get()
    }
}

impl Default for TextView {
    fn default() -> Self {
        Self::new()
    }
}

impl StateListener for TextView {
    fn changed(&self) {
        self.changes.set(self.changes.get() + 1);
        self.stale.set(true);
    }
}
