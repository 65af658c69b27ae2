//! Tests for native drag-and-drop handling

use kanban_dnd::core::models::{CardId, DefaultAction, Notification};
use kanban_dnd::core::services::DragSession;

use crate::common::board_with_cards;

fn col(name: &str) -> String {
    name.to_string()
}

#[test]
fn test_drag_card_between_columns() {
    let mut board = board_with_cards(&["42"]);
    let mut sink: Vec<Notification> = Vec::new();
    let mut session = DragSession::new();
    let card = "42".to_string();

    assert_eq!(session.drag_start(&mut board, &card), DefaultAction::Allow);
    assert!(board.is_dragging("42"));

    assert_eq!(session.drag_over(&mut board, Some(&col("doing"))), DefaultAction::Prevent);
    assert_eq!(session.drag_leave(&mut board, Some(&col("doing"))), DefaultAction::Allow);
    assert_eq!(session.drag_over(&mut board, Some(&col("done"))), DefaultAction::Prevent);
    assert_eq!(board.highlighted(), vec!["done".to_string()]);

    assert_eq!(
        session.drop_card(&mut board, &mut sink, Some(&col("done"))),
        DefaultAction::Prevent
    );
    assert!(board.highlighted().is_empty());
    assert_eq!(sink, vec![Notification::status_change(CardId::Numeric(42), "done")]);

    assert_eq!(session.drag_end(&mut board, &card), DefaultAction::Allow);
    assert!(!board.is_dragging("42"));
    assert!(!session.is_active());
}

#[test]
fn test_drop_without_drag_emits_nothing() {
    let mut board = board_with_cards(&["42"]);
    let mut sink: Vec<Notification> = Vec::new();
    let mut session: DragSession<String> = DragSession::new();

    assert_eq!(
        session.drop_card(&mut board, &mut sink, Some(&col("todo"))),
        DefaultAction::Prevent
    );
    assert!(sink.is_empty());
}

#[test]
fn test_drop_after_drag_end_emits_nothing() {
    let mut board = board_with_cards(&["7"]);
    let mut sink: Vec<Notification> = Vec::new();
    let mut session = DragSession::new();
    let card = "7".to_string();

    let _ = session.drag_start(&mut board, &card);
    let _ = session.drag_end(&mut board, &card);
    let _ = session.drop_card(&mut board, &mut sink, Some(&col("done")));
    assert!(sink.is_empty());
}

#[test]
fn test_second_drop_is_ignored() {
    let mut board = board_with_cards(&["1"]);
    let mut sink: Vec<Notification> = Vec::new();
    let mut session = DragSession::new();

    let _ = session.drag_start(&mut board, &"1".to_string());
    let _ = session.drop_card(&mut board, &mut sink, Some(&col("doing")));
    let _ = session.drop_card(&mut board, &mut sink, Some(&col("done")));
    assert_eq!(sink.len(), 1);
}
