//! Tests for interaction config resolution and validation

use std::fs;

use kanban_dnd::config::{ConfigError, InteractionConfig};
use kanban_dnd::paths;
use serial_test::serial;
use tempfile::TempDir;
use test_case::test_case;

/// Run `f` with `KANBAN_DND_CONFIG` set to `value`, restoring it afterwards
fn with_env_config<T>(value: Option<&std::path::Path>, f: impl FnOnce() -> T) -> T {
    let saved = std::env::var_os(paths::CONFIG_ENV);
    // SAFETY: every test touching the variable is #[serial]
    unsafe {
        match value {
            Some(path) => std::env::set_var(paths::CONFIG_ENV, path),
            None => std::env::remove_var(paths::CONFIG_ENV),
        }
    }
    let result = f();
    unsafe {
        match saved {
            Some(old) => std::env::set_var(paths::CONFIG_ENV, old),
            None => std::env::remove_var(paths::CONFIG_ENV),
        }
    }
    result
}

// =============================================================================
// VALIDATION
// =============================================================================

#[test_case("[touch]\ndrag_threshold_px = -1.0\n" ; "negative threshold")]
#[test_case("[touch]\ndrag_scale = 0.0\n" ; "zero scale")]
#[test_case("[touch]\nmove_throttle_ms = 0\n" ; "zero throttle")]
#[test_case("[touch]\nmax_tap_ms = 0\n" ; "zero tap window")]
#[test_case("[selectors]\ncolumn = \"  \"\n" ; "blank column selector")]
fn test_rejects_invalid_values(content: &str) {
    let err = InteractionConfig::from_toml_str(content, std::path::Path::new("bad.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)), "unexpected error: {err}");
}

#[test]
fn test_unknown_section_is_ignored() {
    let config = InteractionConfig::from_toml_str("[unrelated]\nkey = 1\n", std::path::Path::new("x.toml")).unwrap();
    assert_eq!(config, InteractionConfig::default());
}

#[test]
fn test_feedback_override() {
    let config = InteractionConfig::from_toml_str(
        "[feedback]\nmessage = \"Moved\"\nhold_ms = 500\n",
        std::path::Path::new("x.toml"),
    )
    .unwrap();
    assert_eq!(config.feedback.message, "Moved");
    assert_eq!(config.feedback.hold_ms, 500);
    assert_eq!(config.feedback.fade_ms, 300);
}

// =============================================================================
// RESOLUTION
// =============================================================================

#[test]
#[serial]
fn test_explicit_path_wins_over_env() {
    let temp = TempDir::new().unwrap();
    let explicit = temp.path().join("explicit.toml");
    let from_env = temp.path().join("env.toml");
    fs::write(&explicit, "[touch]\nmax_tap_ms = 300\n").unwrap();
    fs::write(&from_env, "[touch]\nmax_tap_ms = 400\n").unwrap();

    let config = with_env_config(Some(&from_env), || InteractionConfig::resolve(Some(&explicit))).unwrap();
    assert_eq!(config.touch.max_tap_ms, 300);
}

#[test]
#[serial]
fn test_env_path_is_used() {
    let temp = TempDir::new().unwrap();
    let from_env = temp.path().join("env.toml");
    fs::write(&from_env, "[touch]\ndrag_threshold_px = 40.0\n").unwrap();

    let (config, located) = with_env_config(Some(&from_env), || {
        (InteractionConfig::resolve(None), InteractionConfig::locate(None))
    });
    assert_eq!(config.unwrap().touch.drag_threshold_px, 40.0);
    assert_eq!(located, Some(from_env));
}

#[test]
#[serial]
fn test_missing_env_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.toml");

    let err = with_env_config(Some(&missing), || InteractionConfig::resolve(None)).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}
