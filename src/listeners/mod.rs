//! Turn and state-change notification.
//!
//! The engine owns a `ListenerRegistry` and fires it synchronously from
//! inside `move_at`, `pass_turn` and `start_game`. Handlers run in
//! registration order and must not call back into the engine's mutating
//! operations.

pub mod listener;
pub mod registry;

pub use listener::{StateListener, TurnListener};
pub use registry::{ListenerRegistry, StateHandler, TurnHandler};
