//! Parameterized tests using test-case
//!
//! The same touch gesture is replayed with different distances and
//! timings to pin down where taps end and drags begin.

use kanban_dnd::config::TouchConfig;
use kanban_dnd::core::models::{CardId, DefaultAction, Notification};
use kanban_dnd::core::ports::NoFeedback;
use kanban_dnd::core::services::{TouchInput, TouchRelease};
use test_case::test_case;

use crate::common::{board_with_cards, column_center, emulator_for};

#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Tap,
    Moved(&'static str),
    Nothing,
}

/// Touch down at the centre of "todo", move right by `dx` at `move_at`,
/// release at `release_at`
fn gesture(dx: f64, move_at: u64, release_at: u64) -> Outcome {
    let mut board = board_with_cards(&["5"]);
    let mut touch = emulator_for(&board, TouchConfig::default());
    let mut sink: Vec<Notification> = Vec::new();
    let card = "5".to_string();
    let x = column_center("todo");

    let _ = touch.touch_start(&card, TouchInput::at(x, 100.0, 0));
    let _ = touch.touch_move(&mut board, &card, TouchInput::at(x + dx, 100.0, move_at));
    let _ = touch.touch_end(&mut board, &mut sink, &NoFeedback, &card, TouchRelease::at(release_at));

    match sink.as_slice() {
        [] => Outcome::Nothing,
        [Notification::Tap(tap)] => {
            assert_eq!(tap.card_id, CardId::Numeric(5));
            Outcome::Tap
        },
        [Notification::StatusChange(change)] => match change.new_status.as_str() {
            "todo" => Outcome::Moved("todo"),
            "doing" => Outcome::Moved("doing"),
            "done" => Outcome::Moved("done"),
            other => panic!("unexpected status {other}"),
        },
        other => panic!("unexpected notifications {other:?}"),
    }
}

#[test_case(10.0, 50, 100, Outcome::Tap ; "small quick move is a tap")]
#[test_case(0.0, 10, 199, Outcome::Tap ; "release just under tap window")]
#[test_case(0.0, 10, 200, Outcome::Nothing ; "release at tap window is not a tap")]
#[test_case(25.0, 200, 250, Outcome::Nothing ; "exactly threshold distance stays pending")]
#[test_case(26.0, 150, 180, Outcome::Tap ; "exactly start delay stays pending")]
#[test_case(40.0, 100, 150, Outcome::Tap ; "fast swipe before delay is a tap")]
#[test_case(40.0, 200, 300, Outcome::Moved("todo") ; "drag within own column reports own status")]
#[test_case(100.0, 200, 300, Outcome::Moved("doing") ; "drag one column right")]
#[test_case(200.0, 200, 300, Outcome::Moved("done") ; "drag two columns right")]
#[test_case(400.0, 200, 300, Outcome::Nothing ; "drag past the last column")]
fn test_gesture_outcome(dx: f64, move_at: u64, release_at: u64, expected: Outcome) {
    assert_eq!(gesture(dx, move_at, release_at), expected);
}

#[test_case(true, DefaultAction::Allow ; "actions region is left alone")]
#[test_case(false, DefaultAction::Prevent ; "card body is captured")]
fn test_touch_start_default(in_actions: bool, expected: DefaultAction) {
    let board = board_with_cards(&["1"]);
    let mut touch = emulator_for(&board, TouchConfig::default());
    let input = TouchInput::at(10.0, 10.0, 0).in_excluded_region(in_actions);
    assert_eq!(touch.touch_start(&"1".to_string(), input), expected);
}
