//! Scripted interaction replay
//!
//! A scenario describes a board (viewport, columns, cards) and a sequence
//! of input events. Replaying it drives the real handlers against the
//! in-memory adapters and records what they did: the default action for
//! each event, the notifications emitted, and the final visual state.
//!
//! ```toml
//! viewport_width = 375
//!
//! [[column]]
//! name = "done"
//! status = "done"
//! rect = { left = 200, top = 0, right = 300, bottom = 800 }
//!
//! [[card]]
//! name = "a"
//! id = "42"
//!
//! [[event]]
//! kind = "touch_start"
//! card = "a"
//! x = 50
//! y = 50
//! at = 0
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adapters::memory::{ManualScheduler, MemoryBoard, MemoryFeedbackHost, ToastPhase};
use crate::config::InteractionConfig;
use crate::core::models::{Notification, Rect};
use crate::core::services::{DragSession, SuccessToast, TouchEmulator, TouchInput, TouchRelease};

/// Errors raised while loading or replaying a scenario
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The scenario file could not be read
    #[error("failed to read scenario {path}: {source}")]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The scenario file is malformed
    #[error("failed to parse scenario {path}: {message}")]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// An event names a card the scenario does not declare
    #[error("event {index} refers to unknown card '{name}'")]
    UnknownCard {
        /// Position of the event in the script
        index: usize,
        /// The unknown name
        name: String,
    },

    /// An event names a column the scenario does not declare
    #[error("event {index} refers to unknown column '{name}'")]
    UnknownColumn {
        /// Position of the event in the script
        index: usize,
        /// The unknown name
        name: String,
    },
}

/// A column of the scripted board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Element name, referenced by events
    pub name: String,
    /// Status attribute; a column without one never receives cards
    #[serde(default)]
    pub status: Option<String>,
    /// Bounding box
    pub rect: Rect,
}

/// A card of the scripted board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSpec {
    /// Element name, referenced by events
    pub name: String,
    /// Raw card-id attribute
    #[serde(default)]
    pub id: Option<String>,
}

/// One scripted input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScenarioEvent {
    /// Native drag begins on a card
    DragStart {
        /// Card name
        card: String,
    },
    /// Native drag ends on a card
    DragEnd {
        /// Card name
        card: String,
    },
    /// Native drag hovers a column (or nothing)
    DragOver {
        /// Column name
        #[serde(default)]
        column: Option<String>,
    },
    /// Native drag leaves a column
    DragLeave {
        /// Column name
        #[serde(default)]
        column: Option<String>,
    },
    /// Native drop on a column (or outside any)
    Drop {
        /// Column name
        #[serde(default)]
        column: Option<String>,
    },
    /// Finger down on a card
    TouchStart {
        /// Card name
        card: String,
        /// Client x
        x: f64,
        /// Client y
        y: f64,
        /// Time in milliseconds
        at: u64,
        /// Whether the touch landed on the card's action controls
        #[serde(default)]
        in_actions: bool,
    },
    /// Finger moves
    TouchMove {
        /// Card name
        card: String,
        /// Client x
        x: f64,
        /// Client y
        y: f64,
        /// Time in milliseconds
        at: u64,
    },
    /// Finger lifted
    TouchEnd {
        /// Card name
        card: String,
        /// Time in milliseconds
        at: u64,
        /// Whether the release target is the card's action controls
        #[serde(default)]
        in_actions: bool,
    },
    /// The platform aborted the touch
    TouchCancel {
        /// Card name
        card: String,
    },
    /// Let the feedback timers run
    Advance {
        /// Milliseconds to advance the clock
        ms: u64,
    },
}

impl ScenarioEvent {
    /// Short label for reports
    #[must_use]
    pub fn describe(&self) -> String {
        fn column_label(column: Option<&String>) -> &str {
            column.map_or("(none)", String::as_str)
        }
        match self {
            Self::DragStart { card } => format!("drag_start {card}"),
            Self::DragEnd { card } => format!("drag_end {card}"),
            Self::DragOver { column } => format!("drag_over {}", column_label(column.as_ref())),
            Self::DragLeave { column } => format!("drag_leave {}", column_label(column.as_ref())),
            Self::Drop { column } => format!("drop {}", column_label(column.as_ref())),
            Self::TouchStart { card, x, y, at, .. } => format!("touch_start {card} ({x}, {y}) @{at}ms"),
            Self::TouchMove { card, x, y, at } => format!("touch_move {card} ({x}, {y}) @{at}ms"),
            Self::TouchEnd { card, at, .. } => format!("touch_end {card} @{at}ms"),
            Self::TouchCancel { card } => format!("touch_cancel {card}"),
            Self::Advance { ms } => format!("advance {ms}ms"),
        }
    }
}

const fn default_viewport_width() -> f64 {
    375.0
}

/// A board plus the input script to run against it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Viewport width in CSS pixels
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f64,
    /// Columns in document order
    #[serde(default, rename = "column")]
    pub columns: Vec<ColumnSpec>,
    /// Cards
    #[serde(default, rename = "card")]
    pub cards: Vec<CardSpec>,
    /// Input events in order
    #[serde(default, rename = "event")]
    pub events: Vec<ScenarioEvent>,
}

impl Scenario {
    /// Load a scenario; `.json` files are JSON, anything else TOML
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let content = fs::read_to_string(path).map_err(|source| ScenarioError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let parsed = if is_json {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        } else {
            toml::from_str(&content).map_err(|e| e.to_string())
        };
        parsed.map_err(|message| ScenarioError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Build the in-memory board this scenario describes
    #[must_use]
    pub fn board(&self) -> MemoryBoard {
        let mut board = MemoryBoard::new(self.viewport_width);
        for column in &self.columns {
            board.add_column(&column.name, column.status.as_deref(), column.rect);
        }
        for card in &self.cards {
            board.add_card(&card.name, card.id.as_deref());
        }
        board
    }

    /// Replay every event and report the outcome
    pub fn replay(&self, config: &InteractionConfig) -> Result<ReplayReport, ScenarioError> {
        let mut replay = Replay::new(self, config);
        let mut steps = Vec::with_capacity(self.events.len());
        for (index, event) in self.events.iter().enumerate() {
            steps.push(replay.step(index, event)?);
        }
        Ok(replay.finish(steps))
    }
}

/// What happened for one scripted event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    /// Position in the script
    pub index: usize,
    /// Event label
    pub event: String,
    /// Whether the default was suppressed (absent for `advance`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_action: Option<String>,
    /// Gesture state of the touched card after the event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gesture: Option<String>,
    /// Notifications emitted by this event
    pub notifications: Vec<Notification>,
}

/// A toast still on screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToastReport {
    /// Toast text
    pub message: String,
    /// Visibility
    pub phase: ToastPhase,
}

/// Visual state of the board after the script
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardReport {
    /// Columns carrying the drop-target marker
    pub highlighted: Vec<String>,
    /// Cards carrying the "being dragged" marker
    pub dragging: Vec<String>,
    /// Cards with a transform applied, with the CSS value
    pub transforms: Vec<(String, String)>,
    /// Toasts still mounted
    pub toasts: Vec<ToastReport>,
}

/// Full outcome of a replay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    /// Whether touch handling was enabled for this viewport
    pub touch_enabled: bool,
    /// Per-event results
    pub steps: Vec<StepReport>,
    /// Every notification, in order
    pub notifications: Vec<Notification>,
    /// Final board state
    pub board: BoardReport,
    /// Virtual clock at the end, in milliseconds
    pub clock_ms: u64,
}

struct Replay {
    board: MemoryBoard,
    session: DragSession<String>,
    touch: TouchEmulator<String>,
    scheduler: ManualScheduler,
    toast: SuccessToast<MemoryFeedbackHost, ManualScheduler>,
    touch_enabled: bool,
}

impl Replay {
    fn new(scenario: &Scenario, config: &InteractionConfig) -> Self {
        let board = scenario.board();
        let mut touch = TouchEmulator::new(config.touch.clone());
        let mut touch_enabled = true;
        for card in &scenario.cards {
            touch_enabled &= touch.attach(&board, card.name.clone());
        }
        let scheduler = ManualScheduler::new();
        let toast = SuccessToast::new(
            Rc::new(MemoryFeedbackHost::new()),
            scheduler.clone(),
            config.feedback.clone(),
        );
        Self {
            board,
            session: DragSession::new(),
            touch,
            scheduler,
            toast,
            touch_enabled,
        }
    }

    fn step(&mut self, index: usize, event: &ScenarioEvent) -> Result<StepReport, ScenarioError> {
        let mut emitted: Vec<Notification> = Vec::new();
        let mut touched = None;

        let action = match event {
            ScenarioEvent::DragStart { card } => {
                let card = self.card(index, card)?;
                Some(self.session.drag_start(&mut self.board, &card))
            },
            ScenarioEvent::DragEnd { card } => {
                let card = self.card(index, card)?;
                Some(self.session.drag_end(&mut self.board, &card))
            },
            ScenarioEvent::DragOver { column } => {
                let column = self.column(index, column.as_ref())?;
                Some(self.session.drag_over(&mut self.board, column.as_ref()))
            },
            ScenarioEvent::DragLeave { column } => {
                let column = self.column(index, column.as_ref())?;
                Some(self.session.drag_leave(&mut self.board, column.as_ref()))
            },
            ScenarioEvent::Drop { column } => {
                let column = self.column(index, column.as_ref())?;
                Some(self.session.drop_card(&mut self.board, &mut emitted, column.as_ref()))
            },
            ScenarioEvent::TouchStart {
                card,
                x,
                y,
                at,
                in_actions,
            } => {
                let card = self.card(index, card)?;
                let input = TouchInput::at(*x, *y, *at).in_excluded_region(*in_actions);
                let action = self.touch.touch_start(&card, input);
                touched = Some(card);
                Some(action)
            },
            ScenarioEvent::TouchMove { card, x, y, at } => {
                let card = self.card(index, card)?;
                let action = self.touch.touch_move(&mut self.board, &card, TouchInput::at(*x, *y, *at));
                touched = Some(card);
                Some(action)
            },
            ScenarioEvent::TouchEnd {
                card,
                at,
                in_actions,
            } => {
                let card = self.card(index, card)?;
                let release = TouchRelease {
                    at_ms: *at,
                    in_excluded_region: *in_actions,
                };
                let action = self
                    .touch
                    .touch_end(&mut self.board, &mut emitted, &self.toast, &card, release);
                touched = Some(card);
                Some(action)
            },
            ScenarioEvent::TouchCancel { card } => {
                let card = self.card(index, card)?;
                let action = self.touch.touch_cancel(&mut self.board, &card);
                touched = Some(card);
                Some(action)
            },
            ScenarioEvent::Advance { ms } => {
                self.scheduler.advance(*ms);
                None
            },
        };

        let gesture = touched
            .and_then(|card| self.touch.tracker(&card).map(|t| t.state().name().to_string()));

        Ok(StepReport {
            index,
            event: event.describe(),
            default_action: action.as_ref().map(ToString::to_string),
            gesture,
            notifications: emitted,
        })
    }

    fn finish(self, steps: Vec<StepReport>) -> ReplayReport {
        let notifications = steps.iter().flat_map(|s| s.notifications.iter().cloned()).collect();
        let cards = self.board.card_entries();
        let board = BoardReport {
            highlighted: self.board.highlighted(),
            dragging: cards.iter().filter(|c| c.dragging).map(|c| c.name.clone()).collect(),
            transforms: cards
                .iter()
                .filter_map(|c| c.transform.clone().map(|css| (c.name.clone(), css)))
                .collect(),
            toasts: self
                .toast
                .host()
                .live()
                .into_iter()
                .map(|(message, phase)| ToastReport { message, phase })
                .collect(),
        };
        ReplayReport {
            touch_enabled: self.touch_enabled,
            steps,
            notifications,
            board,
            clock_ms: self.scheduler.now(),
        }
    }

    fn card(&self, index: usize, name: &str) -> Result<String, ScenarioError> {
        if self.board.has_card(name) {
            Ok(name.to_string())
        } else {
            Err(ScenarioError::UnknownCard {
                index,
                name: name.to_string(),
            })
        }
    }

    fn column(&self, index: usize, name: Option<&String>) -> Result<Option<String>, ScenarioError> {
        match name {
            None => Ok(None),
            Some(name) if self.board.has_column(name) => Ok(Some(name.clone())),
            Some(name) => Err(ScenarioError::UnknownColumn {
                index,
                name: name.clone(),
            }),
        }
    }
}
