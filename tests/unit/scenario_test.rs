//! Tests for scenario loading and replay

use std::fs;

use kanban_dnd::adapters::memory::ToastPhase;
use kanban_dnd::config::InteractionConfig;
use kanban_dnd::core::models::{CardId, Notification};
use kanban_dnd::scenario::{Scenario, ScenarioError, ScenarioEvent};
use tempfile::TempDir;

const BOARD: &str = r#"
[[column]]
name = "todo"
status = "todo"
rect = { left = 0, top = 0, right = 100, bottom = 600 }

[[column]]
name = "done"
status = "done"
rect = { left = 100, top = 0, right = 200, bottom = 600 }

[[column]]
name = "archive"
rect = { left = 200, top = 0, right = 300, bottom = 600 }

[[card]]
name = "a"
id = "card-a"

[[card]]
name = "b"
id = "42"
"#;

fn scenario(events: &str) -> Scenario {
    toml::from_str(&format!("{BOARD}\n{events}")).unwrap()
}

fn replay(events: &str) -> kanban_dnd::scenario::ReplayReport {
    scenario(events).replay(&InteractionConfig::default()).unwrap()
}

#[test]
fn test_defaults_to_phone_viewport() {
    let scenario = scenario("");
    assert!((scenario.viewport_width - 375.0).abs() < f64::EPSILON);
    assert!(scenario.events.is_empty());
}

#[test]
fn test_desktop_drop_on_done() {
    let report = replay(
        r#"
[[event]]
kind = "drag_start"
card = "b"

[[event]]
kind = "drag_over"
column = "done"

[[event]]
kind = "drop"
column = "done"

[[event]]
kind = "drag_end"
card = "b"
"#,
    );
    assert_eq!(
        report.notifications,
        vec![Notification::status_change(CardId::Numeric(42), "done")]
    );
    assert_eq!(report.steps[1].default_action.as_deref(), Some("prevent"));
    assert_eq!(report.steps[3].default_action.as_deref(), Some("allow"));
    assert!(report.board.dragging.is_empty());
    assert!(report.board.toasts.is_empty());
}

#[test]
fn test_drop_on_column_without_status() {
    let report = replay(
        r#"
[[event]]
kind = "drag_start"
card = "a"

[[event]]
kind = "drop"
column = "archive"
"#,
    );
    assert!(report.notifications.is_empty());
}

#[test]
fn test_tap_reports_text_id() {
    let report = replay(
        r#"
[[event]]
kind = "touch_start"
card = "a"
x = 50
y = 50
at = 0

[[event]]
kind = "touch_end"
card = "a"
at = 120
"#,
    );
    assert_eq!(report.notifications, vec![Notification::tap(CardId::from("card-a"))]);
    assert_eq!(report.steps[0].gesture.as_deref(), Some("pending"));
}

#[test]
fn test_tap_on_actions_is_suppressed() {
    let report = replay(
        r#"
[[event]]
kind = "touch_start"
card = "a"
x = 50
y = 50
at = 0
in_actions = true

[[event]]
kind = "touch_end"
card = "a"
at = 50
in_actions = true
"#,
    );
    assert!(report.notifications.is_empty());
    assert_eq!(report.steps[0].default_action.as_deref(), Some("allow"));
}

#[test]
fn test_touch_drag_leaves_toast_until_timers_run() {
    let events = r#"
[[event]]
kind = "touch_start"
card = "b"
x = 50
y = 50
at = 0

[[event]]
kind = "touch_move"
card = "b"
x = 150
y = 50
at = 200

[[event]]
kind = "touch_end"
card = "b"
at = 300
"#;
    let report = replay(events);
    assert_eq!(report.board.toasts.len(), 1);
    assert_eq!(report.board.toasts[0].phase, ToastPhase::Visible);

    let report = replay(&format!("{events}\n[[event]]\nkind = \"advance\"\nms = 1000\n"));
    assert_eq!(report.board.toasts[0].phase, ToastPhase::Fading);

    let report = replay(&format!("{events}\n[[event]]\nkind = \"advance\"\nms = 1300\n"));
    assert!(report.board.toasts.is_empty());
}

#[test]
fn test_mid_drag_state_is_reported() {
    let report = replay(
        r#"
[[event]]
kind = "touch_start"
card = "b"
x = 50
y = 50
at = 0

[[event]]
kind = "touch_move"
card = "b"
x = 150
y = 80
at = 200
"#,
    );
    assert_eq!(report.board.highlighted, vec!["done".to_string()]);
    assert_eq!(report.board.dragging, vec!["b".to_string()]);
    assert_eq!(
        report.board.transforms,
        vec![(
            "b".to_string(),
            "translate(100px, 30px) rotate(5deg) scale(1.05)".to_string()
        )]
    );
}

#[test]
fn test_unknown_column_is_an_error() {
    let err = scenario("[[event]]\nkind = \"drop\"\ncolumn = \"nowhere\"\n")
        .replay(&InteractionConfig::default())
        .unwrap_err();
    assert!(matches!(err, ScenarioError::UnknownColumn { index: 0, ref name } if name == "nowhere"));
}

#[test]
fn test_load_json_scenario() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tap.json");
    fs::write(
        &path,
        r#"{
  "viewport_width": 400,
  "column": [],
  "card": [{ "name": "a", "id": "0" }],
  "event": [
    { "kind": "touch_start", "card": "a", "x": 1, "y": 1, "at": 0 },
    { "kind": "touch_end", "card": "a", "at": 10 }
  ]
}"#,
    )
    .unwrap();

    let scenario = Scenario::load(&path).unwrap();
    assert_eq!(scenario.events.len(), 2);
    assert!(matches!(scenario.events[1], ScenarioEvent::TouchEnd { at: 10, .. }));

    let report = scenario.replay(&InteractionConfig::default()).unwrap();
    assert_eq!(report.notifications, vec![Notification::tap(CardId::Numeric(0))]);
}

#[test]
fn test_load_reports_parse_errors() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.toml");
    fs::write(&path, "[[event]]\nkind = \"teleport\"\n").unwrap();

    let err = Scenario::load(&path).unwrap_err();
    assert!(matches!(err, ScenarioError::Parse { .. }));
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn test_load_missing_file() {
    let err = Scenario::load(std::path::Path::new("/nonexistent/scenario.toml")).unwrap_err();
    assert!(matches!(err, ScenarioError::Read { .. }));
}
