//! Output formatting for human and JSON modes
//!
//! Command results render either as colored terminal text or as pretty
//! printed JSON for scripts.

use colored::Colorize;
use serde::Serialize;

use crate::config::InteractionConfig;
use crate::core::models::Notification;
use crate::scenario::{ReplayReport, StepReport};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a config operation that writes a file
#[derive(Debug, Serialize)]
pub struct ConfigWriteResult {
    /// Whether the file was written
    pub written: bool,
    /// Target path
    pub path: String,
    /// Human-readable outcome
    pub message: String,
}

/// Effective configuration and where it came from
#[derive(Debug, Serialize)]
pub struct ConfigShowResult {
    /// File the configuration was loaded from, if any
    pub source: Option<String>,
    /// The resolved settings
    pub config: InteractionConfig,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn describe_notification(notification: &Notification) -> String {
    match notification {
        Notification::StatusChange(change) => format!(
            "{} card {} -> {}",
            notification.event_name().green().bold(),
            change.card_id,
            change.new_status.cyan()
        ),
        Notification::Tap(tap) => {
            format!("{} card {}", notification.event_name().yellow().bold(), tap.card_id)
        },
    }
}

impl StepReport {
    fn human_line(&self) -> String {
        let mut line = format!("{:>3}  {}", self.index, self.event);
        if let Some(action) = &self.default_action {
            let action = if action == "prevent" {
                action.magenta().to_string()
            } else {
                action.dimmed().to_string()
            };
            line.push_str(&format!("  [{action}]"));
        }
        if let Some(gesture) = &self.gesture {
            line.push_str(&format!("  {}", gesture.dimmed()));
        }
        line
    }
}

impl ReplayReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if !self.touch_enabled {
            println!("{}", "Touch handling disabled for this viewport width.".dimmed());
        }

        println!("Replaying {} event(s)...\n", self.steps.len());
        for step in &self.steps {
            println!("{}", step.human_line());
            for notification in &step.notifications {
                println!("       {}", describe_notification(notification));
            }
        }

        println!();
        if self.notifications.is_empty() {
            println!("No notifications emitted.");
        } else {
            println!("{} notification(s) emitted.", self.notifications.len());
        }

        let board = &self.board;
        if !board.highlighted.is_empty() {
            println!("Highlighted columns: {}", board.highlighted.join(", "));
        }
        if !board.dragging.is_empty() {
            println!("Cards still dragging: {}", board.dragging.join(", "));
        }
        for (card, css) in &board.transforms {
            println!("Transform on {card}: {css}");
        }
        for toast in &board.toasts {
            println!("Toast \"{}\" ({:?})", toast.message, toast.phase);
        }
        println!("Clock: {}ms", self.clock_ms);
    }
}

impl ConfigShowResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        match &self.source {
            Some(source) => println!("# loaded from {source}"),
            None => println!("# built-in defaults"),
        }
        match toml::to_string_pretty(&self.config) {
            Ok(text) => print!("{text}"),
            Err(e) => eprintln!("Failed to render config: {e}"),
        }
    }
}

impl ConfigWriteResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.written {
                    println!("{} {}", "Wrote".green(), self.path);
                } else {
                    println!("{}", self.message);
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}
