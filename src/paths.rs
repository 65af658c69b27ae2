//! Centralized path definitions for kanban-dnd
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.config/kanban-dnd/
//! └── config.toml               # Interaction tuning (thresholds, selectors, toast)
//! ```
//!
//! `KANBAN_DND_CONFIG` points at a config file elsewhere and takes
//! precedence over the user-level location.

use std::path::PathBuf;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "KANBAN_DND_CONFIG";

/// Global config directory name (under the platform config dir)
const GLOBAL_DIR: &str = "kanban-dnd";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global config directory.
///
/// Returns `~/.config/kanban-dnd` on Linux and the platform equivalent
/// elsewhere.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join(GLOBAL_DIR)
}

/// Get the global config file path.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Config file named by `KANBAN_DND_CONFIG`, if set and non-empty
#[must_use]
pub fn env_config() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
