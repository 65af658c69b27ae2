//! Touch gesture emulation
//!
//! Touch screens have no native drag-and-drop, so a drag is reconstructed
//! from raw touch-start/move/end/cancel events. A gesture becomes a drag
//! only after the finger has travelled far enough *and* enough time has
//! passed; a short release without a drag is a tap.
//!
//! ```text
//!            touch-start              move past thresholds
//!   Idle ─────────────────▶ Pending ──────────────────────▶ Dragging
//!    ▲                         │                               │
//!    │   end (tap if short)    │      end (drop) / cancel      │
//!    └─────────────────────────┴───────────────────────────────┘
//! ```
//!
//! [`GestureTracker`] holds the state for one card. [`TouchEmulator`] keys
//! trackers by card for callers that route every card through one place.

use std::collections::HashMap;
use std::hash::Hash;

use crate::config::TouchConfig;
use crate::core::models::{CardId, CardTransform, DefaultAction, Notification, Point};
use crate::core::ports::{BoardSurface, NotificationSink, SuccessIndicator};

use super::hit_test;

/// Where and when a touch was observed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchSample {
    /// Client coordinates of the first touch point
    pub position: Point,
    /// Event time in milliseconds
    pub at_ms: u64,
}

/// A touch-start or touch-move event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchInput {
    /// Position and time of the first touch point
    pub sample: TouchSample,
    /// Whether the event target lies inside the card's excluded region
    pub in_excluded_region: bool,
}

impl TouchInput {
    /// A touch on the card body
    #[must_use]
    pub const fn at(x: f64, y: f64, at_ms: u64) -> Self {
        Self {
            sample: TouchSample {
                position: Point::new(x, y),
                at_ms,
            },
            in_excluded_region: false,
        }
    }

    /// Mark this touch as landing in the excluded region
    #[must_use]
    pub const fn in_excluded_region(mut self, excluded: bool) -> Self {
        self.in_excluded_region = excluded;
        self
    }
}

/// A touch-end event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchRelease {
    /// Event time in milliseconds
    pub at_ms: u64,
    /// Whether the event target lies inside the card's excluded region
    pub in_excluded_region: bool,
}

impl TouchRelease {
    /// A release on the card body
    #[must_use]
    pub const fn at(at_ms: u64) -> Self {
        Self {
            at_ms,
            in_excluded_region: false,
        }
    }
}

/// Where a card's gesture currently stands
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No finger down, or the last gesture has concluded
    #[default]
    Idle,
    /// Finger down, not yet far or long enough to be a drag
    Pending {
        /// Where the gesture began
        start: TouchSample,
    },
    /// The card follows the finger
    Dragging {
        /// Where the gesture began
        start: TouchSample,
        /// Time of the last processed frame
        last_frame_at: Option<u64>,
    },
}

impl GestureState {
    /// Short name for logs and reports
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending { .. } => "pending",
            Self::Dragging { .. } => "dragging",
        }
    }
}

/// Gesture state machine for a single card
#[derive(Debug, Clone)]
pub struct GestureTracker<C> {
    card: C,
    config: TouchConfig,
    state: GestureState,
}

impl<C: Clone + PartialEq> GestureTracker<C> {
    /// Create a tracker for `card`
    #[must_use]
    pub const fn new(card: C, config: TouchConfig) -> Self {
        Self {
            card,
            config,
            state: GestureState::Idle,
        }
    }

    /// The tracked card
    #[must_use]
    pub const fn card(&self) -> &C {
        &self.card
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> GestureState {
        self.state
    }

    /// Whether the card is being dragged
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }

    /// `touchstart` on the card
    ///
    /// Touches in the excluded region are ignored entirely so the card's
    /// own controls keep working. A touch that lands mid-drag re-anchors
    /// the drag at the new point; the gesture stays a drag until it ends.
    pub fn touch_start(&mut self, input: TouchInput) -> DefaultAction {
        if input.in_excluded_region {
            return DefaultAction::Allow;
        }
        if let GestureState::Dragging { start, .. } = &mut self.state {
            log::debug!("Touch started mid-drag, re-anchoring");
            *start = input.sample;
            return DefaultAction::Prevent;
        }
        self.state = GestureState::Pending {
            start: input.sample,
        };
        log::trace!("Gesture pending at ({}, {})", input.sample.position.x, input.sample.position.y);
        DefaultAction::Prevent
    }

    /// `touchmove` on the card
    pub fn touch_move<B>(&mut self, board: &mut B, input: TouchInput) -> DefaultAction
    where
        B: BoardSurface<Card = C>,
    {
        match self.state {
            GestureState::Idle => DefaultAction::Allow,
            GestureState::Pending { start } => {
                let distance = start.position.distance_to(input.sample.position);
                let elapsed = input.sample.at_ms.saturating_sub(start.at_ms);
                if distance > self.config.drag_threshold_px
                    && elapsed > self.config.drag_start_delay_ms
                {
                    self.state = GestureState::Dragging {
                        start,
                        last_frame_at: None,
                    };
                    board.set_dragging(&self.card, true);
                    log::debug!("Touch drag started after {elapsed}ms, {distance:.1}px");
                    self.drag_frame(board, input.sample)
                } else {
                    DefaultAction::Allow
                }
            },
            GestureState::Dragging { .. } => self.drag_frame(board, input.sample),
        }
    }

    /// `touchend` on the card
    ///
    /// A drag over a marked column emits a status change and shows the
    /// success indicator. A short gesture that never became a drag emits a
    /// tap. Every path leaves the tracker idle.
    pub fn touch_end<B, N, F>(
        &mut self,
        board: &mut B,
        sink: &mut N,
        feedback: &F,
        release: TouchRelease,
    ) -> DefaultAction
    where
        B: BoardSurface<Card = C>,
        N: NotificationSink + ?Sized,
        F: SuccessIndicator + ?Sized,
    {
        match std::mem::take(&mut self.state) {
            GestureState::Dragging { .. } => {
                if let Some(column) = board.drop_target() {
                    if let Some(new_status) = board.column_status(&column) {
                        let card_id = CardId::from_attribute(board.card_id(&self.card).as_deref());
                        log::debug!("Touch drop: card {card_id} -> {new_status}");
                        sink.notify(Notification::status_change(card_id, new_status));
                        feedback.show();
                    } else {
                        log::warn!("Drop target has no status attribute, card not moved");
                    }
                } else {
                    log::debug!("Touch drag released outside any column");
                }
                self.reset_visuals(board);
            },
            GestureState::Pending { start } => {
                let duration = release.at_ms.saturating_sub(start.at_ms);
                if duration < self.config.max_tap_ms && !release.in_excluded_region {
                    let card_id = CardId::from_attribute(board.card_id(&self.card).as_deref());
                    log::debug!("Tap on card {card_id} ({duration}ms)");
                    sink.notify(Notification::tap(card_id));
                }
            },
            GestureState::Idle => {},
        }
        DefaultAction::Allow
    }

    /// `touchcancel` on the card
    ///
    /// Undoes any drag visuals without notifying anyone.
    pub fn touch_cancel<B>(&mut self, board: &mut B) -> DefaultAction
    where
        B: BoardSurface<Card = C>,
    {
        if matches!(std::mem::take(&mut self.state), GestureState::Dragging { .. }) {
            log::debug!("Touch drag cancelled");
            self.reset_visuals(board);
        }
        DefaultAction::Allow
    }

    fn drag_frame<B>(&mut self, board: &mut B, sample: TouchSample) -> DefaultAction
    where
        B: BoardSurface<Card = C>,
    {
        let GestureState::Dragging {
            start,
            last_frame_at,
        } = &mut self.state
        else {
            return DefaultAction::Allow;
        };

        if let Some(last) = *last_frame_at
            && sample.at_ms.saturating_sub(last) < self.config.move_throttle_ms
        {
            log::trace!("Drag frame throttled");
            return DefaultAction::Prevent;
        }
        *last_frame_at = Some(sample.at_ms);
        let (dx, dy) = sample.position.offset_from(start.position);

        let transform = CardTransform {
            dx,
            dy,
            rotate_deg: self.config.drag_rotation_deg,
            scale: self.config.drag_scale,
        };
        board.set_transform(&self.card, Some(&transform));

        let target = hit_test::column_at(board, sample.position);
        hit_test::highlight_exclusive(board, target.as_ref());
        DefaultAction::Prevent
    }

    fn reset_visuals<B>(&self, board: &mut B)
    where
        B: BoardSurface<Card = C>,
    {
        board.set_dragging(&self.card, false);
        board.set_transform(&self.card, None);
        board.clear_drop_targets();
    }
}

/// Routes touch events to one [`GestureTracker`] per card
///
/// Cards must be attached before their events are handled; events for
/// unattached cards are ignored.
#[derive(Debug, Clone)]
pub struct TouchEmulator<C: Eq + Hash> {
    config: TouchConfig,
    trackers: HashMap<C, GestureTracker<C>>,
}

impl<C: Clone + Eq + Hash> TouchEmulator<C> {
    /// Create an emulator with no cards attached
    #[must_use]
    pub fn new(config: TouchConfig) -> Self {
        Self {
            config,
            trackers: HashMap::new(),
        }
    }

    /// Start tracking touches on `card`
    ///
    /// Returns `false`, tracking nothing, when the viewport is wider than
    /// the configured limit. The check happens once, here.
    pub fn attach<B>(&mut self, board: &B, card: C) -> bool
    where
        B: BoardSurface<Card = C>,
    {
        let width = board.viewport_width();
        if !self.config.allows_viewport(width) {
            log::debug!(
                "Viewport {width}px wider than {}px, touch handling disabled",
                self.config.max_viewport_width
            );
            return false;
        }
        self.trackers
            .entry(card.clone())
            .or_insert_with(|| GestureTracker::new(card, self.config.clone()));
        true
    }

    /// Stop tracking `card`
    pub fn detach(&mut self, card: &C) -> Option<GestureTracker<C>> {
        self.trackers.remove(card)
    }

    /// Whether `card` is tracked
    #[must_use]
    pub fn is_attached(&self, card: &C) -> bool {
        self.trackers.contains_key(card)
    }

    /// Tracker for `card`
    #[must_use]
    pub fn tracker(&self, card: &C) -> Option<&GestureTracker<C>> {
        self.trackers.get(card)
    }

    /// `touchstart` on `card`
    pub fn touch_start(&mut self, card: &C, input: TouchInput) -> DefaultAction {
        self.trackers
            .get_mut(card)
            .map_or(DefaultAction::Allow, |tracker| tracker.touch_start(input))
    }

    /// `touchmove` on `card`
    pub fn touch_move<B>(&mut self, board: &mut B, card: &C, input: TouchInput) -> DefaultAction
    where
        B: BoardSurface<Card = C>,
    {
        self.trackers
            .get_mut(card)
            .map_or(DefaultAction::Allow, |tracker| tracker.touch_move(board, input))
    }

    /// `touchend` on `card`
    pub fn touch_end<B, N, F>(
        &mut self,
        board: &mut B,
        sink: &mut N,
        feedback: &F,
        card: &C,
        release: TouchRelease,
    ) -> DefaultAction
    where
        B: BoardSurface<Card = C>,
        N: NotificationSink + ?Sized,
        F: SuccessIndicator + ?Sized,
    {
        self.trackers.get_mut(card).map_or(DefaultAction::Allow, |tracker| {
            tracker.touch_end(board, sink, feedback, release)
        })
    }

    /// `touchcancel` on `card`
    pub fn touch_cancel<B>(&mut self, board: &mut B, card: &C) -> DefaultAction
    where
        B: BoardSurface<Card = C>,
    {
        self.trackers
            .get_mut(card)
            .map_or(DefaultAction::Allow, |tracker| tracker.touch_cancel(board))
    }
}
