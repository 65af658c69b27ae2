//! Tests for the Output module
//!
//! Replay reports and config results serialize to the JSON consumed by
//! scripts.

use kanban_dnd::config::InteractionConfig;
use kanban_dnd::output::{ConfigShowResult, ConfigWriteResult, OutputMode};
use kanban_dnd::scenario::Scenario;

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn replay_report_serialization() {
    let scenario: Scenario = toml::from_str(
        r#"
[[column]]
name = "done"
status = "done"
rect = { left = 0, top = 0, right = 100, bottom = 100 }

[[card]]
name = "c"
id = "42"

[[event]]
kind = "drag_start"
card = "c"

[[event]]
kind = "drop"
column = "done"

[[event]]
kind = "advance"
ms = 5
"#,
    )
    .unwrap();
    let report = scenario.replay(&InteractionConfig::default()).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["notifications"][0]["event"], "cardStatusUpdate");
    assert_eq!(json["notifications"][0]["detail"]["cardId"], 42);
    assert_eq!(json["notifications"][0]["detail"]["newStatus"], "done");
    assert_eq!(json["steps"][1]["default_action"], "prevent");
    assert!(json["steps"][2].get("default_action").is_none());
    assert_eq!(json["clock_ms"], 5);
    assert_eq!(json["board"]["dragging"][0], "c");
}

#[test]
fn config_show_serialization() {
    let result = ConfigShowResult {
        source: None,
        config: InteractionConfig::default(),
    };
    let json = serde_json::to_value(&result).unwrap();
    assert!(json["source"].is_null());
    assert_eq!(json["config"]["touch"]["drag_threshold_px"], 25.0);
    assert_eq!(json["config"]["selectors"]["drop_target_class"], "drag-over");
}

#[test]
fn config_write_serialization() {
    let result = ConfigWriteResult {
        written: false,
        path: "/tmp/config.toml".to_string(),
        message: "exists".to_string(),
    };
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"written\":false"));
    assert!(json.contains("/tmp/config.toml"));
}
