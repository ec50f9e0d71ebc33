//! Listener traits.
//!
//! Handlers are shared, single-threaded trait objects. They take `&self`;
//! a handler that records anything does so through interior mutability.
//! Plain closures implement both traits.

/// Notified when its player's turn begins.
pub trait TurnListener {
    /// It is now this listener's player's turn.
    fn your_turn(&self);
}

/// Notified after every successful move or pass.
pub trait StateListener {
    /// The game state changed.
    fn changed(&self);
}

impl<F: Fn()> TurnListener for F {
    fn your_turn(&self) {
        self()
    }
}

impl<F: Fn()> StateListener for F {
    fn changed(&self) {
        self()
    }
}
