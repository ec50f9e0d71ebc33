//! Model traits: the read-only query surface and the mutating surface.
//!
//! Strategies and views depend on `ReadOnlyModel` only. A controller that
//! mediates between players and the game drives it through `Model`.

use crate::board::Board;
use crate::core::{Coord, Player, Result};
use crate::listeners::{StateHandler, TurnHandler};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// One player shows more disks.
    Winner(Player),
    /// Both players show the same number of disks.
    Draw,
}

impl GameResult {
    /// Decide the result from final disk counts.
    #[must_use]
    pub fn from_scores(one: usize, two: usize) -> Self {
        match one.cmp(&two) {
            std::cmp::Ordering::Greater => GameResult::Winner(Player::One),
            std::cmp::Ordering::Less => GameResult::Winner(Player::Two),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Queries that never change the game.
///
/// Every query except `side_length`, `is_started`, `snapshot` and listener
/// registration fails with `NotStarted` before the game starts.
pub trait ReadOnlyModel {
    /// Tiles along one edge of the board.
    fn side_length(&self) -> u32;

    /// Whether `start_game` has been called.
    fn is_started(&self) -> bool;

    /// Whether the current player may play at `at`.
    ///
    /// Fails with `InvalidCoordinate` off the board.
    fn is_move_possible(&self, at: Coord) -> Result<bool>;

    /// Tiles a move at `at` would flip for the current player. Empty when
    /// the move is illegal.
    fn captures_at(&self, at: Coord) -> Result<Vec<Coord>>;

    /// Every legal move for the current player, in `Coord` order.
    fn legal_moves(&self) -> Result<Vec<Coord>>;

    /// Whether the current player has any legal move.
    fn any_moves(&self) -> Result<bool>;

    /// Whether neither player has a legal move.
    fn is_game_over(&self) -> Result<bool>;

    /// Number of disks showing `player`.
    fn score(&self, player: Player) -> Result<usize>;

    /// Player to move.
    fn current_player_color(&self) -> Result<Player>;

    /// Player waiting.
    fn other_player_color(&self) -> Result<Player>;

    /// Whether a disk sits at `at`.
    fn has_disk(&self, at: Coord) -> Result<bool>;

    /// Visible colour at `at`.
    fn top_color(&self, at: Coord) -> Result<Player>;

    /// Owned copy of the board; changing it does not affect the game.
    fn snapshot(&self) -> Board;

    /// Register a state-change listener. Fails with `AlreadyStarted` once
    /// the game is running.
    fn add_read_only_listener(&mut self, handler: StateHandler) -> Result<()>;

    /// Final result once the game is over, `None` while it continues.
    fn winner(&self) -> Result<Option<GameResult>> {
        if !self.is_game_over()? {
            return Ok(None);
        }
        let counts = self.snapshot().counts();
        Ok(Some(GameResult::from_scores(counts[Player::One], counts[Player::Two])))
    }
}

/// Operations that advance the game.
pub trait Model: ReadOnlyModel {
    /// Play the current player's disk at `at`, returning the flipped tiles.
    fn move_at(&mut self, at: Coord) -> Result<Vec<Coord>>;

    /// Hand the turn to the other player without playing.
    fn pass_turn(&mut self) -> Result<()>;

    /// Start the game and notify Player One.
    fn start_game(&mut self) -> Result<()>;

    /// Register a turn listener for Player One (`true`) or Two (`false`).
    fn add_listener(&mut self, handler: TurnHandler, is_first_player: bool) -> Result<()>;
}
