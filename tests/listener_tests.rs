//! Listener contract tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use hex_reversi::{
    Coord, HexReversi, Model, Player, ReadOnlyModel, ReversiError, StateHandler, StateListener,
    TextView, TurnHandler, TurnListener,
};

/// Records every notification into a shared log.
struct Recorder {
    tag: &'static str,
    log: Rc<RefCell<Vec<&'static str>>>,
}

impl TurnListener for Recorder {
    fn your_turn(&self) {
        self.log.borrow_mut().push(self.tag);
    }
}

impl StateListener for Recorder {
    fn changed(&self) {
        self.log.borrow_mut().push(self.tag);
    }
}

fn counter() -> (Rc<Cell<usize>>, impl Fn() + 'static) {
    let count = Rc::new(Cell::new(0));
    let inner = count.clone();
    (count, move || inner.set(inner.get() + 1))
}

// =============================================================================
// Turn Listeners
// =============================================================================

#[test]
fn test_start_notifies_player_one_only() {
    let (one, one_fn) = counter();
    let (two, two_fn) = counter();

    let mut game = HexReversi::new(4).unwrap();
    game.add_listener(Rc::new(one_fn), true).unwrap();
    game.add_listener(Rc::new(two_fn), false).unwrap();
    game.start_game().unwrap();

    assert_eq!(one.get(), 1);
    assert_eq!(two.get(), 0);

    game.move_at(Coord::new(1, 1)).unwrap();
    assert_eq!(one.get(), 1);
    assert_eq!(two.get(), 1);

    game.pass_turn().unwrap();
    assert_eq!(one.get(), 2);
    assert_eq!(two.get(), 1);
}

#[test]
fn test_double_registration_fires_once() {
    let (count, f) = counter();
    let handler: TurnHandler = Rc::new(f);

    let mut game = HexReversi::new(4).unwrap();
    game.add_listener(handler.clone(), true).unwrap();
    game.add_listener(handler.clone(), true).unwrap();
    // Same handler for the other side is still a duplicate
    game.add_listener(handler, false).unwrap();
    game.start_game().unwrap();
    assert_eq!(count.get(), 1);

    game.move_at(Coord::new(1, 1)).unwrap();
    assert_eq!(count.get(), 1);
}

#[test]
fn test_registration_after_start() {
    let mut game = HexReversi::new(4).unwrap();
    game.start_game().unwrap();

    let (_, f) = counter();
    assert_eq!(game.add_listener(Rc::new(f), true), Err(ReversiError::AlreadyStarted));
    let (_, g) = counter();
    assert_eq!(game.add_read_only_listener(Rc::new(g)), Err(ReversiError::AlreadyStarted));
}

// =============================================================================
// State Listeners
// =============================================================================

#[test]
fn test_changed_once_per_successful_mutation() {
    let (count, f) = counter();
    let handler: StateHandler = Rc::new(f);
    let (one, one_fn) = counter();
    let (two, two_fn) = counter();

    let mut game = HexReversi::new(4).unwrap();
    game.add_read_only_listener(handler.clone()).unwrap();
    game.add_read_only_listener(handler).unwrap();
    game.add_listener(Rc::new(one_fn), true).unwrap();
    game.add_listener(Rc::new(two_fn), false).unwrap();

    game.start_game().unwrap();
    assert_eq!(count.get(), 0);
    assert_eq!((one.get(), two.get()), (1, 0));

    game.move_at(Coord::new(1, 1)).unwrap();
    assert_eq!(count.get(), 1);
    assert_eq!((one.get(), two.get()), (1, 1));

    // No captures, occupied, off the board
    assert_eq!(game.move_at(Coord::ORIGIN), Err(ReversiError::IllegalMove(Coord::ORIGIN)));
    assert_eq!(game.move_at(Coord::new(1, 1)), Err(ReversiError::IllegalMove(Coord::new(1, 1))));
    assert_eq!(
        game.move_at(Coord::new(9, 9)),
        Err(ReversiError::InvalidCoordinate(Coord::new(9, 9)))
    );
    assert_eq!(count.get(), 1);
    assert_eq!((one.get(), two.get()), (1, 1));
    assert_eq!(game.current_player_color(), Ok(Player::Two));

    game.pass_turn().unwrap();
    assert_eq!(count.get(), 2);
    assert_eq!((one.get(), two.get()), (2, 1));
}

#[test]
fn test_state_fires_before_turn() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let state = Rc::new(Recorder { tag: "changed", log: log.clone() });
    let one = Rc::new(Recorder { tag: "one", log: log.clone() });
    let two = Rc::new(Recorder { tag: "two", log: log.clone() });

    let mut game = HexReversi::new(4).unwrap();
    game.add_read_only_listener(state).unwrap();
    game.add_listener(one, true).unwrap();
    game.add_listener(two, false).unwrap();

    game.start_game().unwrap();
    game.move_at(Coord::new(1, 1)).unwrap();
    game.pass_turn().unwrap();

    assert_eq!(*log.borrow(), vec!["one", "changed", "two", "changed", "one"]);
}

#[test]
fn test_queries_do_not_notify() {
    let (count, f) = counter();
    let mut game = HexReversi::new(4).unwrap();
    game.add_read_only_listener(Rc::new(f)).unwrap();
    game.start_game().unwrap();

    for _ in 0..3 {
        game.is_game_over().unwrap();
        game.legal_moves().unwrap();
        game.any_moves().unwrap();
        game.score(Player::Two).unwrap();
        game.snapshot();
    }
    assert_eq!(count.get(), 0);
    assert_eq!(game.current_player_color(), Ok(Player::One));
}

#[test]
fn test_copy_does_not_carry_listeners() {
    let (count, f) = counter();
    let mut game = HexReversi::new(4).unwrap();
    game.add_read_only_listener(Rc::new(f)).unwrap();
    game.start_game().unwrap();

    let mut copy = game.copy_model();
    copy.move_at(Coord::new(1, 1)).unwrap();
    copy.pass_turn().unwrap();
    assert_eq!(count.get(), 0);
}

// =============================================================================
// Text View
// =============================================================================

#[test]
fn test_text_view_tracks_game() {
    let view = Rc::new(TextView::new());
    let mut game = HexReversi::new(3).unwrap();
    game.add_read_only_listener(view.clone()).unwrap();
    game.start_game().unwrap();
    view.refresh(&game);

    game.move_at(Coord::new(1, 1)).unwrap();
    game.move_at(Coord::new(1, -2)).unwrap();
    assert_eq!(view.changes(), 2);
    assert!(view.refresh(&game));
    assert_eq!(view.text(), game.snapshot().to_string());
    assert!(view.text().starts_with("  _ O _\n"));
}
