//! Deterministic heuristic strategies.

use tracing::trace;

use crate::core::{Coord, Result};
use crate::rules::ReadOnlyModel;

use super::Strategy;

// =============================================================================
// First Legal
// =============================================================================

/// Plays the upper-left-most legal move.
#[derive(Clone, Debug, Default)]
pub struct FirstLegal;

impl Strategy for FirstLegal {
    fn name(&self) -> &str {
        "first-legal"
    }

    fn choose_move(&mut self, model: &dyn ReadOnlyModel) -> Result<Option<Coord>> {
        Ok(model.legal_moves()?.first().copied())
    }
}

// =============================================================================
// Max Capture
// =============================================================================

/// Plays the move that flips the most disks.
#[derive(Clone, Debug, Default)]
pub struct MaxCapture;

impl Strategy for MaxCapture {
    fn name(&self) -> &str {
        "max-capture"
    }

    fn choose_move(&mut self, model: &dyn ReadOnlyModel) -> Result<Option<Coord>> {
        let mut best: Option<(Coord, usize)> = None;

        // legal_moves is in Coord order, so strict `>` keeps the upper-left tie.
        for at in model.legal_moves()? {
            let count = model.captures_at(at)?.len();
            trace!(%at, count, "max-capture candidate");
            if best.map_or(true, |(_, c)| count > c) {
                best = Some((at, count));
            }
        }

        Ok(best.map(|(at, _)| at))
    }
}

// =============================================================================
// Corner Seeking
// =============================================================================

/// Takes a corner whenever one is legal, otherwise defers to another
/// strategy.
pub struct CornerSeeking {
    fallback: Box<dyn Strategy>,
}

impl CornerSeeking {
    /// Corner seeking with `MaxCapture` as the fallback.
    #[must_use]
    pub fn new() -> Self {
        Self::with_fallback(Box::new(MaxCapture))
    }

    /// Corner seeking with a custom fallback.
    #[must_use]
    pub fn with_fallback(fallback: Box<dyn Strategy>) -> Self {
        Self { fallback }
    }
}

impl Default for CornerSeeking {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CornerSeeking {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CornerSeeking")
            .field("fallback", &self.fallback.name())
            .finish()
    }
}

impl Strategy for CornerSeeking {
    fn name(&self) -> &str {
        "corner-seeking"
    }

    fn choose_move(&mut self, model: &dyn ReadOnlyModel) -> Result<Option<Coord>> {
        for corner in model.snapshot().corners() {
            if model.is_move_possible(corner)? {
                return Ok(Some(corner));
            }
        }
        self.fallback.choose_move(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::core::{Player, ReversiError};
    use crate::rules::{HexReversi, Model};

    fn started(board: Board) -> HexReversi {
        let mut game = HexReversi::from_board(board);
        game.start_game().unwrap();
        game
    }

    #[test]
    fn test_unstarted_game_is_an_error() {
        let game = HexReversi::new(4).unwrap();
        assert_eq!(FirstLegal.choose_move(&game), Err(ReversiError::NotStarted));
        assert_eq!(MaxCapture.choose_move(&game), Err(ReversiError::NotStarted));
    }

    #[test]
    fn test_first_legal_is_smallest_coord() {
        let game = started(Board::new(6).unwrap());
        let expected = game.legal_moves().unwrap()[0];
        assert_eq!(FirstLegal.choose_move(&game), Ok(Some(expected)));
    }

    #[test]
    fn test_no_moves_means_pass() {
        let game = started(Board::empty(3).unwrap());
        assert_eq!(FirstLegal.choose_move(&game), Ok(None));
        assert_eq!(MaxCapture.choose_move(&game), Ok(None));
        assert_eq!(CornerSeeking::new().choose_move(&game), Ok(None));
    }

    #[test]
    fn test_max_capture_prefers_longer_line() {
        let mut board = Board::empty(5).unwrap();
        // The origin captures one disk; (0, 1) captures two.
        board.place_disk(Coord::new(-1, 0), Player::Two, Player::One).unwrap();
        board.place_disk(Coord::new(-2, 0), Player::One, Player::Two).unwrap();
        board.place_disk(Coord::new(1, 1), Player::Two, Player::One).unwrap();
        board.place_disk(Coord::new(2, 1), Player::Two, Player::One).unwrap();
        board.place_disk(Coord::new(3, 1), Player::One, Player::Two).unwrap();

        let game = started(board);
        assert_eq!(game.legal_moves(), Ok(vec![Coord::ORIGIN, Coord::new(0, 1)]));
        assert_eq!(MaxCapture.choose_move(&game), Ok(Some(Coord::new(0, 1))));
    }

    #[test]
    fn test_max_capture_tie_breaks_upper_left() {
        let game = started(Board::new(6).unwrap());
        let moves = game.legal_moves().unwrap();
        let best = moves
            .iter()
            .map(|m| game.captures_at(*m).unwrap().len())
            .max()
            .unwrap();
        let expected = moves
            .into_iter()
            .find(|m| game.captures_at(*m).unwrap().len() == best)
            .unwrap();
        assert_eq!(MaxCapture.choose_move(&game), Ok(Some(expected)));
    }

    #[test]
    fn test_corner_seeking_takes_corner() {
        let mut board = Board::empty(3).unwrap();
        // Corner (2, -2) captures (1, -1) towards (0, 0).
        board.place_disk(Coord::new(1, -1), Player::Two, Player::One).unwrap();
        board.place_disk(Coord::ORIGIN, Player::One, Player::Two).unwrap();
        // A bigger non-corner capture elsewhere.
        board.place_disk(Coord::new(-1, 1), Player::Two, Player::One).unwrap();
        board.place_disk(Coord::new(0, 1), Player::Two, Player::One).unwrap();
        board.place_disk(Coord::new(1, 1), Player::One, Player::Two).unwrap();

        let game = started(board);
        assert_eq!(MaxCapture.choose_move(&game), Ok(Some(Coord::new(-2, 1))));
        assert_eq!(CornerSeeking::new().choose_move(&game), Ok(Some(Coord::new(2, -2))));
    }

    #[test]
    fn test_corner_seeking_falls_back() {
        let game = started(Board::new(6).unwrap());
        let expected = FirstLegal.choose_move(&game).unwrap();
        let mut strategy = CornerSeeking::with_fallback(Box::new(FirstLegal));
        assert_eq!(strategy.choose_move(&game), Ok(expected));
        assert_eq!(format!("{:?}", strategy), "CornerSeeking { fallback: \"first-legal\" }");
    }
}
