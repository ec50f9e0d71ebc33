//! Strategy and controller integration tests.

use std::rc::Rc;

use hex_reversi::{
    Board, ControllerConfig, Coord, CornerSeeking, FirstLegal, GameController, GameResult,
    HexReversi, MaxCapture, Model, Player, RandomMove, ReadOnlyModel, Strategy, TextView,
    TurnOutcome,
};

fn run_game(side_length: u32, one: Box<dyn Strategy>, two: Box<dyn Strategy>) -> GameController {
    let config = ControllerConfig::default().with_side_length(side_length);
    let mut controller = GameController::from_config(&config, one, two).unwrap();
    controller.run(config.max_turns).unwrap();
    controller
}

// =============================================================================
// Full Games
// =============================================================================

#[test]
fn test_every_pairing_finishes() {
    let make: [fn() -> Box<dyn Strategy>; 4] = [
        || Box::new(FirstLegal) as Box<dyn Strategy>,
        || Box::new(MaxCapture) as Box<dyn Strategy>,
        || Box::new(CornerSeeking::new()) as Box<dyn Strategy>,
        || Box::new(RandomMove::new(11)) as Box<dyn Strategy>,
    ];

    for one in make {
        for two in make {
            let controller = run_game(4, one(), two());
            let model = controller.model();
            assert_eq!(model.is_game_over(), Ok(true));

            let board = model.snapshot();
            let a = board.count(Player::One);
            let b = board.count(Player::Two);
            assert_eq!(model.winner(), Ok(Some(GameResult::from_scores(a, b))));
        }
    }
}

#[test]
fn test_deterministic_strategies_replay_identically() {
    let first = run_game(5, Box::new(CornerSeeking::new()), Box::new(MaxCapture));
    let second = run_game(5, Box::new(CornerSeeking::new()), Box::new(MaxCapture));

    assert_eq!(first.turns_played(), second.turns_played());
    assert_eq!(first.model().snapshot(), second.model().snapshot());
}

#[test]
fn test_random_strategy_is_seeded() {
    let first = run_game(5, Box::new(RandomMove::new(7)), Box::new(RandomMove::new(8)));
    let second = run_game(5, Box::new(RandomMove::new(7)), Box::new(RandomMove::new(8)));
    assert_eq!(first.model().snapshot(), second.model().snapshot());
}

// =============================================================================
// Turn Outcomes
// =============================================================================

#[test]
fn test_forced_pass_is_reported() {
    // One disk each; after One's only move Two has nothing left to play
    let mut board = Board::empty(3).unwrap();
    board.place_disk(Coord::new(0, 0), Player::Two, Player::One).unwrap();
    board.place_disk(Coord::new(1, 0), Player::One, Player::Two).unwrap();

    let mut model = HexReversi::from_board(board);
    model.start_game().unwrap();
    let mut controller = GameController::new(model, Box::new(FirstLegal), Box::new(FirstLegal));

    let first = controller.play_turn().unwrap();
    assert_eq!(
        first,
        TurnOutcome::Moved {
            player: Player::One,
            at: Coord::new(-1, 0),
            flipped: vec![Coord::ORIGIN],
        }
    );

    assert_eq!(controller.play_turn(), Ok(TurnOutcome::Passed(Player::Two)));
    assert_eq!(controller.model().current_player_color(), Ok(Player::One));
}

#[test]
fn test_view_attached_through_controller() {
    let view = Rc::new(TextView::new());
    let mut controller = GameController::from_config(
        &ControllerConfig::default().with_side_length(3),
        Box::new(FirstLegal),
        Box::new(MaxCapture),
    )
    .unwrap();
    controller.model_mut().add_read_only_listener(view.clone()).unwrap();

    controller.run(4).unwrap();
    assert_eq!(view.changes(), controller.turns_played());
    assert!(view.refresh(controller.model()));
    assert_eq!(view.text(), controller.model().snapshot().to_string());
}
