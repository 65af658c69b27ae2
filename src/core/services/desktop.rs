//! Desktop drag-and-drop
//!
//! Translates native drag events into visual markers and a single
//! status-change notification. The card being dragged is held by the
//! [`DragSession`] value, which the owner of the board keeps for as long as
//! it listens for drag events.

use crate::core::models::{CardId, DefaultAction, Notification};
use crate::core::ports::{BoardSurface, NotificationSink};

/// State of one native drag-and-drop interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession<C> {
    dragged: Option<C>,
}

impl<C> Default for DragSession<C> {
    fn default() -> Self {
        Self { dragged: None }
    }
}

impl<C: Clone + PartialEq> DragSession<C> {
    /// Create a session with nothing being dragged
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The card currently being dragged
    #[must_use]
    pub const fn dragged(&self) -> Option<&C> {
        self.dragged.as_ref()
    }

    /// Whether a drag is in progress
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.dragged.is_some()
    }

    /// `dragstart` on a card
    pub fn drag_start<B>(&mut self, board: &mut B, card: &C) -> DefaultAction
    where
        B: BoardSurface<Card = C>,
    {
        if self.dragged.as_ref().is_some_and(|previous| previous != card) {
            log::debug!("Drag started while another card was still recorded, replacing it");
        }
        board.set_dragging(card, true);
        self.dragged = Some(card.clone());
        log::debug!("Desktop drag started");
        DefaultAction::Allow
    }

    /// `dragend` on a card
    ///
    /// Clears both the marker and the recorded card, so a later drop that
    /// belongs to no drag can never emit a notification.
    pub fn drag_end<B>(&mut self, board: &mut B, card: &C) -> DefaultAction
    where
        B: BoardSurface<Card = C>,
    {
        board.set_dragging(card, false);
        self.dragged = None;
        log::debug!("Desktop drag ended");
        DefaultAction::Allow
    }

    /// `dragover` on a column, fired continuously while hovering
    ///
    /// `column` is the column enclosing the event target, if any. The
    /// default must be suppressed or the platform refuses the drop.
    pub fn drag_over<B>(&self, board: &mut B, column: Option<&B::Column>) -> DefaultAction
    where
        B: BoardSurface<Card = C>,
    {
        if let Some(column) = column {
            board.set_drop_target(column, true);
        }
        DefaultAction::Prevent
    }

    /// `dragleave` on a column
    pub fn drag_leave<B>(&self, board: &mut B, column: Option<&B::Column>) -> DefaultAction
    where
        B: BoardSurface<Card = C>,
    {
        if let Some(column) = column {
            board.set_drop_target(column, false);
        }
        DefaultAction::Allow
    }

    /// `drop` on a column
    ///
    /// Emits a status change when both a column and a dragged card exist.
    pub fn drop_card<B, N>(&mut self, board: &mut B, sink: &mut N, column: Option<&B::Column>) -> DefaultAction
    where
        B: BoardSurface<Card = C>,
        N: NotificationSink + ?Sized,
    {
        let Some(column) = column else {
            return DefaultAction::Prevent;
        };
        let Some(card) = self.dragged.take() else {
            log::debug!("Drop without an active drag, ignoring");
            return DefaultAction::Prevent;
        };

        board.set_drop_target(column, false);

        let Some(new_status) = board.column_status(column) else {
            log::warn!("Drop target has no status attribute, card not moved");
            return DefaultAction::Prevent;
        };
        let card_id = CardId::from_attribute(board.card_id(&card).as_deref());
        log::debug!("Desktop drop: card {card_id} -> {new_status}");
        sink.notify(Notification::status_change(card_id, new_status));

        DefaultAction::Prevent
    }
}
