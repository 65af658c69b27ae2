//! Outbound notifications
//!
//! These are the only effects of the interaction layer that the rest of the
//! application cares about. The serialized shape matches the `detail` payload
//! of the `cardStatusUpdate` and `cardTap` DOM events.

use serde::{Deserialize, Serialize};

use super::CardId;

/// DOM event name for a status change
pub const STATUS_CHANGE_EVENT: &str = "cardStatusUpdate";

/// DOM event name for a tap
pub const TAP_EVENT: &str = "cardTap";

/// A card was dropped on a column representing `new_status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    /// The moved card
    pub card_id: CardId,
    /// Status value of the receiving column
    pub new_status: String,
}

/// A card was tapped and its details should be shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardTap {
    /// The tapped card
    pub card_id: CardId,
}

/// Any notification produced by the interaction handlers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "detail")]
pub enum Notification {
    /// A card moved to another column
    #[serde(rename = "cardStatusUpdate")]
    StatusChange(StatusChange),
    /// A card was tapped
    #[serde(rename = "cardTap")]
    Tap(CardTap),
}

impl Notification {
    /// Build a status-change notification
    #[must_use]
    pub fn status_change(card_id: CardId, new_status: impl Into<String>) -> Self {
        Self::StatusChange(StatusChange {
            card_id,
            new_status: new_status.into(),
        })
    }

    /// Build a tap notification
    #[must_use]
    pub const fn tap(card_id: CardId) -> Self {
        Self::Tap(CardTap { card_id })
    }

    /// DOM event name this notification is dispatched under
    #[must_use]
    pub const fn event_name(&self) -> &'static str {
        match self {
            Self::StatusChange(_) => STATUS_CHANGE_EVENT,
            Self::Tap(_) => TAP_EVENT,
        }
    }

    /// Card this notification is about
    #[must_use]
    pub const fn card_id(&self) -> &CardId {
        match self {
            Self::StatusChange(change) => &change.card_id,
            Self::Tap(tap) => &tap.card_id,
        }
    }
}
