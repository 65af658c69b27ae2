//! Property-based tests for the touch gesture handlers
//!
//! Uses proptest to drive random move sequences through the emulator.

use kanban_dnd::config::TouchConfig;
use kanban_dnd::core::models::{CardId, Notification};
use kanban_dnd::core::ports::NoFeedback;
use kanban_dnd::core::services::{TouchInput, TouchRelease};
use proptest::prelude::*;

use crate::common::{board_with_cards, emulator_for};

/// A move as (dx, dy, ms since previous event)
fn moves() -> impl Strategy<Value = Vec<(f64, f64, u64)>> {
    prop::collection::vec((-60.0..60.0f64, -60.0..60.0f64, 0u64..80), 1..40)
}

proptest! {
    /// A gesture enters the dragging state at most once
    #[test]
    fn drag_starts_at_most_once(steps in moves()) {
        let mut board = board_with_cards(&["9"]);
        let mut touch = emulator_for(&board, TouchConfig::default());
        let card = "9".to_string();
        let (mut x, mut y, mut at) = (150.0, 300.0, 0);

        let _ = touch.touch_start(&card, TouchInput::at(x, y, at));
        for (dx, dy, dt) in steps {
            x += dx;
            y += dy;
            at += dt;
            let _ = touch.touch_move(&mut board, &card, TouchInput::at(x, y, at));
            prop_assert!(board.dragging_marks("9") <= 1);
        }
    }

    /// No more than one column is highlighted during a touch drag
    #[test]
    fn at_most_one_column_highlighted(steps in moves()) {
        let mut board = board_with_cards(&["3"]);
        let mut touch = emulator_for(&board, TouchConfig::default());
        let card = "3".to_string();
        let (mut x, mut y, mut at) = (50.0, 300.0, 0);

        let _ = touch.touch_start(&card, TouchInput::at(x, y, at));
        for (dx, dy, dt) in steps {
            x += dx;
            y += dy;
            at += dt;
            let _ = touch.touch_move(&mut board, &card, TouchInput::at(x, y, at));
            prop_assert!(board.highlighted().len() <= 1);
        }
    }

    /// Releasing always leaves the board clean
    #[test]
    fn release_resets_visuals(steps in moves(), hold in 0u64..500) {
        let mut board = board_with_cards(&["3"]);
        let mut touch = emulator_for(&board, TouchConfig::default());
        let mut sink: Vec<Notification> = Vec::new();
        let card = "3".to_string();
        let (mut x, mut y, mut at) = (50.0, 300.0, 0);

        let _ = touch.touch_start(&card, TouchInput::at(x, y, at));
        for (dx, dy, dt) in steps {
            x += dx;
            y += dy;
            at += dt;
            let _ = touch.touch_move(&mut board, &card, TouchInput::at(x, y, at));
        }
        let _ = touch.touch_end(&mut board, &mut sink, &NoFeedback, &card, TouchRelease::at(at + hold));

        prop_assert!(board.highlighted().is_empty());
        prop_assert!(!board.is_dragging("3"));
        prop_assert!(board.transform("3").is_none());
        prop_assert!(sink.len() <= 1);
    }

    /// Extra touch-starts never turn a drag into a tap
    #[test]
    fn restarts_during_drag_still_end_as_drag(
        steps in prop::collection::vec(
            (-60.0..60.0f64, -60.0..60.0f64, 0u64..80, any::<bool>()),
            1..40,
        ),
    ) {
        let mut board = board_with_cards(&["4"]);
        let mut touch = emulator_for(&board, TouchConfig::default());
        let mut sink: Vec<Notification> = Vec::new();
        let card = "4".to_string();
        let (mut x, mut y, mut at) = (150.0, 300.0, 0);
        let mut reached_drag = false;

        let _ = touch.touch_start(&card, TouchInput::at(x, y, at));
        for (dx, dy, dt, restart) in steps {
            x += dx;
            y += dy;
            at += dt;
            if restart {
                let _ = touch.touch_start(&card, TouchInput::at(x, y, at));
            } else {
                let _ = touch.touch_move(&mut board, &card, TouchInput::at(x, y, at));
            }
            let dragging = touch.tracker(&card).is_some_and(|t| t.is_dragging());
            prop_assert!(!reached_drag || dragging);
            reached_drag |= dragging;
        }
        let _ = touch.touch_end(&mut board, &mut sink, &NoFeedback, &card, TouchRelease::at(at + 1));

        if reached_drag {
            prop_assert!(!sink.iter().any(|n| matches!(n, Notification::Tap(_))));
        }
        prop_assert!(board.highlighted().is_empty());
        prop_assert!(!board.is_dragging("4"));
        prop_assert!(board.transform("4").is_none());
    }

    /// Short touches that stay within the threshold are always taps
    #[test]
    fn small_short_touch_is_tap(
        dx in -17.0..17.0f64,
        dy in -17.0..17.0f64,
        move_at in 0u64..199,
        extra in 0u64..199,
    ) {
        let release_at = (move_at + extra).min(199);
        let mut board = board_with_cards(&["11"]);
        let mut touch = emulator_for(&board, TouchConfig::default());
        let mut sink: Vec<Notification> = Vec::new();
        let card = "11".to_string();

        let _ = touch.touch_start(&card, TouchInput::at(150.0, 300.0, 0));
        let _ = touch.touch_move(&mut board, &card, TouchInput::at(150.0 + dx, 300.0 + dy, move_at));
        let _ = touch.touch_end(&mut board, &mut sink, &NoFeedback, &card, TouchRelease::at(release_at));

        prop_assert_eq!(sink, vec![Notification::tap(CardId::Numeric(11))]);
    }

    /// Integer attributes always parse as numeric ids
    #[test]
    fn integer_ids_are_numeric(n in any::<i64>()) {
        prop_assert_eq!(CardId::parse(&n.to_string()), CardId::Numeric(n));
    }
}
