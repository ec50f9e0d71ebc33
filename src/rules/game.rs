//! The hexagonal Reversi game.
//!
//! `HexReversi` owns the board, the current player and the started flag.
//! It is the only writer of its board; everything else sees copies.
//!
//! ## Lifecycle
//!
//! - created unstarted with Player One to move
//! - listeners may only be registered before `start_game`
//! - `start_game` notifies Player One's turn listeners
//! - every successful `move_at` or `pass_turn` hands the turn over, fires
//!   state listeners, then the new current player's turn listeners
//!
//! Game over is never stored: it is recomputed from the board each time.

use tracing::{debug, instrument, warn};

use crate::board::Board;
use crate::core::{Coord, GameConfig, Player, Result, ReversiError};
use crate::listeners::{ListenerRegistry, StateHandler, TurnHandler};

use super::capture;
use super::engine::{Model, ReadOnlyModel};

/// Rules engine and game state.
#[derive(Debug)]
pub struct HexReversi {
    board: Board,
    current: Player,
    started: bool,
    listeners: ListenerRegistry,
}

impl HexReversi {
    /// Create an unstarted game on a fresh board.
    #[instrument]
    pub fn new(side_length: u32) -> Result<Self> {
        Ok(Self::from_board(Board::new(side_length)?))
    }

    /// Create an unstarted game from a configuration.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.side_length)
    }

    /// Create an unstarted game on an arbitrary position, Player One to move.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            current: Player::One,
            started: false,
            listeners: ListenerRegistry::new(),
        }
    }

    /// Independent copy with the same board, current player and started
    /// flag. Listeners are not copied.
    #[must_use]
    pub fn copy_model(&self) -> Self {
        Self {
            board: self.board.clone(),
            current: self.current,
            started: self.started,
            listeners: ListenerRegistry::new(),
        }
    }

    /// Whether `player` has any legal move on the current board.
    #[must_use]
    pub fn has_legal_move(&self, player: Player) -> bool {
        capture::has_legal_move(&self.board, player)
    }

    fn ensure_started(&self) -> Result<()> {
        if !self.started {
            return Err(ReversiError::NotStarted);
        }
        Ok(())
    }

    fn ensure_unstarted(&self) -> Result<()> {
        if self.started {
            return Err(ReversiError::AlreadyStarted);
        }
        Ok(())
    }

    fn ensure_on_board(&self, at: Coord) -> Result<()> {
        if !self.board.contains(at) {
            return Err(ReversiError::InvalidCoordinate(at));
        }
        Ok(())
    }

    fn advance_turn(&mut self) {
        self.current = self.current.other();
        debug!(player = %self.current, "turn advanced");
        self.listeners.notify_changed();
        self.listeners.notify_turn(self.current);
    }
}

impl ReadOnlyModel for HexReversi {
    fn side_length(&self) -> u32 {
        self.board.side_length()
    }

    fn is_started(&self) -> bool {
        self.started
    }

    fn is_move_possible(&self, at: Coord) -> Result<bool> {
        self.ensure_started()?;
        self.ensure_on_board(at)?;
        Ok(capture::is_legal(&self.board, at, self.current))
    }

    fn captures_at(&self, at: Coord) -> Result<Vec<Coord>> {
        if !self.is_move_possible(at)? {
            return Ok(Vec::new());
        }
        Ok(capture::captures(&self.board, at, self.current).into_vec())
    }

    fn legal_moves(&self) -> Result<Vec<Coord>> {
        self.ensure_started()?;
        Ok(capture::legal_moves(&self.board, self.current))
    }

    fn any_moves(&self) -> Result<bool> {
        self.ensure_started()?;
        Ok(self.has_legal_move(self.current))
    }

    fn is_game_over(&self) -> Result<bool> {
        self.ensure_started()?;
        if self.board.is_full() {
            return Ok(true);
        }
        Ok(!self.has_legal_move(self.current) && !self.has_legal_move(self.current.other()))
    }

    fn score(&self, player: Player) -> Result<usize> {
        self.ensure_started()?;
        Ok(self.board.count(player))
    }

    fn current_player_color(&self) -> Result<Player> {
        self.ensure_started()?;
        Ok(self.current)
    }

    fn other_player_color(&self) -> Result<Player> {
        self.ensure_started()?;
        Ok(self.current.other())
    }

    fn has_disk(&self, at: Coord) -> Result<bool> {
        self.ensure_started()?;
        self.board.has_disk(at)
    }

    fn top_color(&self, at: Coord) -> Result<Player> {
        self.ensure_started()?;
        self.board.top_color(at)
    }

    fn snapshot(&self) -> Board {
        self.board.clone()
    }

    fn add_read_only_listener(&mut self, handler: StateHandler) -> Result<()> {
        self.ensure_unstarted()?;
        if !self.listeners.add_state(handler) {
            debug!("state listener already registered");
        }
        Ok(())
    }
}

impl Model for HexReversi {
    #[instrument(skip(self), fields(player = %self.current))]
    fn move_at(&mut self, at: Coord) -> Result<Vec<Coord>> {
        self.ensure_started()?;
        self.ensure_on_board(at)?;

        let mover = self.current;
        if self.board.has_disk(at)? {
            warn!(%at, "move on occupied tile rejected");
            return Err(ReversiError::IllegalMove(at));
        }
        let flipped = capture::captures(&self.board, at, mover);
        if flipped.is_empty() {
            warn!(%at, "move without captures rejected");
            return Err(ReversiError::IllegalMove(at));
        }

        self.board.place_disk(at, mover, mover.other())?;
        for &coord in &flipped {
            self.board.flip(coord)?;
        }
        debug!(%at, flipped = flipped.len(), "move played");

        self.advance_turn();
        Ok(flipped.into_vec())
    }

    #[instrument(skip(self), fields(player = %self.current))]
    fn pass_turn(&mut self) -> Result<()> {
        self.ensure_started()?;
        self.advance_turn();
        Ok(())
    }

    #[instrument(skip(self))]
    fn start_game(&mut self) -> Result<()> {
        self.ensure_unstarted()?;
        self.started = true;
        debug!(
            tiles = self.board.len(),
            player_one_listeners = self.listeners.turn_listener_count(Player::One),
            player_two_listeners = self.listeners.turn_listener_count(Player::Two),
            state_listeners = self.listeners.state_listener_count(),
            "game started"
        );
        self.listeners.notify_turn(Player::One);
        Ok(())
    }

    fn add_listener(&mut self, handler: TurnHandler, is_first_player: bool) -> Result<()> {
        self.ensure_unstarted()?;
        let player = Player::from_first(is_first_player);
        if !self.listeners.add_turn(handler, player) {
            debug!(%player, "turn listener already registered");
        }
        Ok(())
    }
}
