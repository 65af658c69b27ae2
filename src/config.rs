//! Interaction configuration
//!
//! Every distance, timing and selector the handlers rely on lives here.
//! Defaults reproduce the tuning the board shipped with; a config file only
//! needs to name the values it changes.
//!
//! Resolution order for [`InteractionConfig::resolve`]:
//!
//! 1. An explicit path (`--config`)
//! 2. `$KANBAN_DND_CONFIG`
//! 3. `~/.config/kanban-dnd/config.toml`
//! 4. Built-in defaults

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paths;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config {path}: {source}")]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema
    #[error("failed to parse config {path}: {source}")]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// A value is out of range
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Full interaction configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractionConfig {
    /// Touch gesture tuning
    #[serde(default)]
    pub touch: TouchConfig,
    /// Success toast tuning
    #[serde(default)]
    pub feedback: FeedbackConfig,
    /// DOM selectors, class names and attributes
    #[serde(default)]
    pub selectors: SelectorConfig,
}

/// Thresholds separating taps, drags and scroll jitter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TouchConfig {
    /// Distance the finger must travel before a drag may start
    pub drag_threshold_px: f64,
    /// Time that must pass after touch-start before a drag may start
    pub drag_start_delay_ms: u64,
    /// Minimum interval between processed drag frames
    pub move_throttle_ms: u64,
    /// A release sooner than this counts as a tap
    pub max_tap_ms: u64,
    /// Touch handling is disabled on viewports wider than this
    pub max_viewport_width: f64,
    /// Tilt applied to a card while dragged
    pub drag_rotation_deg: f64,
    /// Scale applied to a card while dragged
    pub drag_scale: f64,
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self {
            drag_threshold_px: 25.0,
            drag_start_delay_ms: 150,
            move_throttle_ms: 16,
            max_tap_ms: 200,
            max_viewport_width: 768.0,
            drag_rotation_deg: 5.0,
            drag_scale: 1.05,
        }
    }
}

impl TouchConfig {
    /// Whether touch handling applies to a viewport `width` pixels wide
    #[must_use]
    pub fn allows_viewport(&self, width: f64) -> bool {
        width <= self.max_viewport_width
    }
}

/// Success toast shown after a touch drop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// How long the toast stays fully visible
    pub hold_ms: u32,
    /// Length of the fade-out before removal
    pub fade_ms: u32,
    /// Toast text
    pub message: String,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            hold_ms: 1000,
            fade_ms: 300,
            message: "🎉 Verschoben!".to_string(),
        }
    }
}

/// How the board is found in the DOM
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Selector matching drop-target columns
    pub column: String,
    /// Selector for the card region that never starts a gesture
    pub excluded_region: String,
    /// Class set on the card being dragged
    pub dragging_class: String,
    /// Class set on the column under the dragged card
    pub drop_target_class: String,
    /// Attribute carrying a card's id
    pub card_id_attribute: String,
    /// Attribute carrying a column's status
    pub status_attribute: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            column: ".column".to_string(),
            excluded_region: ".card-actions".to_string(),
            dragging_class: "dragging".to_string(),
            drop_target_class: "drag-over".to_string(),
            card_id_attribute: "data-card-id".to_string(),
            status_attribute: "data-status".to_string(),
        }
    }
}

impl InteractionConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// The file [`InteractionConfig::resolve`] would read, if any
    ///
    /// An explicit path wins over `$KANBAN_DND_CONFIG`, which wins over the
    /// user-level file. The user-level file only counts when it exists.
    #[must_use]
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Some(path) = paths::env_config() {
            return Some(path);
        }
        let path = paths::global_config();
        path.exists().then_some(path)
    }

    /// Resolve the effective config
    ///
    /// An explicit or environment-provided path must exist. The user-level
    /// file is optional.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match Self::locate(explicit) {
            Some(path) => {
                log::debug!("Loading config from {}", path.display());
                Self::load(&path)
            },
            None => {
                log::debug!("No config file found, using defaults");
                Ok(Self::default())
            },
        }
    }

    /// Write this config to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject values the handlers cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let touch = &self.touch;
        if !touch.drag_threshold_px.is_finite() || touch.drag_threshold_px < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "touch.drag_threshold_px must be a non-negative number, got {}",
                touch.drag_threshold_px
            )));
        }
        if !touch.drag_scale.is_finite() || touch.drag_scale <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "touch.drag_scale must be positive, got {}",
                touch.drag_scale
            )));
        }
        if !touch.drag_rotation_deg.is_finite() {
            return Err(ConfigError::Invalid("touch.drag_rotation_deg must be finite".to_string()));
        }
        if touch.move_throttle_ms == 0 {
            return Err(ConfigError::Invalid("touch.move_throttle_ms must be at least 1".to_string()));
        }
        if touch.max_tap_ms == 0 {
            return Err(ConfigError::Invalid("touch.max_tap_ms must be at least 1".to_string()));
        }
        if touch.max_viewport_width.is_nan() {
            return Err(ConfigError::Invalid("touch.max_viewport_width must be a number".to_string()));
        }
        if self.selectors.column.trim().is_empty() {
            return Err(ConfigError::Invalid("selectors.column must not be empty".to_string()));
        }
        Ok(())
    }
}
