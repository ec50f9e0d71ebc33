//! Listener registry.
//!
//! Two independent ordered lists: turn listeners, each bound to one player,
//! and state listeners. Handlers are identified by the address of their
//! shared allocation, so registering the same `Rc` twice is a no-op.

use std::rc::Rc;

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::core::Player;

use super::listener::{StateListener, TurnListener};

/// Shared turn handler.
pub type TurnHandler = Rc<dyn TurnListener>;

/// Shared state handler.
pub type StateHandler = Rc<dyn StateListener>;

fn identity<T: ?Sized>(handler: &Rc<T>) -> usize {
    Rc::as_ptr(handler) as *const () as usize
}

/// Ordered listener storage with identity dedup.
#[derive(Clone, Default)]
pub struct ListenerRegistry {
    turn: Vec<(TurnHandler, Player)>,
    state: Vec<StateHandler>,
    turn_ids: FxHashSet<usize>,
    state_ids: FxHashSet<usize>,
}

impl ListenerRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a turn handler for `player`.
    ///
    /// Returns `false` if this handler was already registered; the existing
    /// registration is kept unchanged.
    pub fn add_turn(&mut self, handler: TurnHandler, player: Player) -> bool {
        if !self.turn_ids.insert(identity(&handler)) {
            return false;
        }
        self.turn.push((handler, player));
        true
    }

    /// Register a state handler. Returns `false` for a duplicate.
    pub fn add_state(&mut self, handler: StateHandler) -> bool {
        if !self.state_ids.insert(identity(&handler)) {
            return false;
        }
        self.state.push(handler);
        true
    }

    /// Call `changed` on every state handler, in registration order.
    pub fn notify_changed(&self) {
        trace!(listeners = self.state.len(), "notify changed");
        for handler in &self.state {
            handler.changed();
        }
    }

    /// Call `your_turn` on every handler bound to `player`, in registration
    /// order.
    pub fn notify_turn(&self, player: Player) {
        trace!(%player, "notify turn");
        for (handler, _) in self.turn.iter().filter(|(_, p)| *p == player) {
            handler.your_turn();
        }
    }

    /// Number of turn handlers bound to `player`.
    #[must_use]
    pub fn turn_listener_count(&self, player: Player) -> usize {
        self.turn.iter().filter(|(_, p)| *p == player).count()
    }

    /// Number of state handlers.
    #[must_use]
    pub fn state_listener_count(&self) -> usize {
        self.state.len()
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("turn", &self.turn.len())
            .field("state", &self.state.len())
            .finish()
    }
}
