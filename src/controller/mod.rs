//! Controller: runs a game between two strategies.
//!
//! ## Usage
//!
//! ```
//! use hex_reversi::controller::{ControllerConfig, GameController};
//! use hex_reversi::strategy::{CornerSeeking, MaxCapture};
//!
//! let config = ControllerConfig::default().with_side_length(4);
//! let mut controller = GameController::from_config(
//!     &config,
//!     Box::new(CornerSeeking::new()),
//!     Box::new(MaxCapture),
//! )
//! .unwrap();
//!
//! let result = controller.run(config.max_turns).unwrap();
//! assert!(result.is_some());
//! ```

pub mod config;
pub mod driver;

pub use config::ControllerConfig;
pub use driver::{GameController, TurnOutcome};
