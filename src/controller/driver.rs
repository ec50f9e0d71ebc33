//! Turn-by-turn driver between a model and two strategies.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::core::{Coord, Player, PlayerMap, Result};
use crate::rules::{GameResult, HexReversi, Model};
use crate::strategy::Strategy;

use super::config::ControllerConfig;

/// What happened on one turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// `player` played at `at`, flipping `flipped`.
    Moved {
        player: Player,
        at: Coord,
        flipped: Vec<Coord>,
    },
    /// `player` passed.
    Passed(Player),
}

impl TurnOutcome {
    /// The player who took the turn.
    #[must_use]
    pub fn player(&self) -> Player {
        match self {
            TurnOutcome::Moved { player, .. } | TurnOutcome::Passed(player) => *player,
        }
    }
}

/// Mediates between a game and the strategies playing it.
///
/// The controller is the only caller of the model's mutating operations.
/// Strategies see the model through `ReadOnlyModel`. An illegal move
/// proposed by a strategy is returned as `IllegalMove`; the controller does
/// not retry.
pub struct GameController<M: Model = HexReversi> {
    model: M,
    players: PlayerMap<Box<dyn Strategy>>,
    turns_played: usize,
}

impl GameController<HexReversi> {
    /// Build a fresh game from `config` and seat two strategies.
    pub fn from_config(
        config: &ControllerConfig,
        player_one: Box<dyn Strategy>,
        player_two: Box<dyn Strategy>,
    ) -> Result<Self> {
        config.validate()?;
        let model = HexReversi::from_config(&config.game)?;
        Ok(Self::new(model, player_one, player_two))
    }
}

impl<M: Model> GameController<M> {
    /// Seat two strategies at an existing model.
    pub fn new(model: M, player_one: Box<dyn Strategy>, player_two: Box<dyn Strategy>) -> Self {
        Self {
            model,
            players: PlayerMap::from_values(player_one, player_two),
            turns_played: 0,
        }
    }

    /// The model being driven.
    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable access, e.g. to register listeners before the game starts.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Give the model back.
    #[must_use]
    pub fn into_model(self) -> M {
        self.model
    }

    /// Turns played through this controller.
    #[must_use]
    pub fn turns_played(&self) -> usize {
        self.turns_played
    }

    /// Ask the current player's strategy for a move and play it, or pass.
    pub fn play_turn(&mut self) -> Result<TurnOutcome> {
        let player = self.model.current_player_color()?;
        let strategy = &mut self.players[player];
        let choice = strategy.choose_move(&self.model)?;

        let outcome = match choice {
            Some(at) => {
                let flipped = self.model.move_at(at)?;
                info!(%player, %at, flipped = flipped.len(), strategy = strategy.name(), "move");
                TurnOutcome::Moved { player, at, flipped }
            }
            None => {
                self.model.pass_turn()?;
                info!(%player, strategy = strategy.name(), "pass");
                TurnOutcome::Passed(player)
            }
        };

        self.turns_played += 1;
        Ok(outcome)
    }

    /// Start the game if needed and play until it is over or `max_turns`
    /// more turns have been played.
    ///
    /// Returns the result if the game finished.
    #[instrument(skip(self))]
    pub fn run(&mut self, max_turns: usize) -> Result<Option<GameResult>> {
        if !self.model.is_started() {
            self.model.start_game()?;
        }

        let mut played = 0;
        while played < max_turns && !self.model.is_game_over()? {
            self.play_turn()?;
            played += 1;
        }

        let result = self.model.winner()?;
        debug!(played, ?result, "run finished");
        Ok(result)
    }
}

impl<M: Model + std::fmt::Debug> std::fmt::Debug for GameController<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("model", &self.model)
            .field("player_one", &self.players[Player::One].name())
            .field("player_two", &self.players[Player::Two].name())
            .field("turns_played", &self.turns_played)
            .finish()
    }
}
