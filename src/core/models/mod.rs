//! Domain models for kanban-dnd
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`CardId`] - A card's identifier, integer when possible
//! - [`Notification`] - Status changes and taps sent to the application
//! - [`Point`], [`Rect`], [`CardTransform`] - Screen geometry
//! - [`DefaultAction`] - Whether to suppress an event's default behaviour

mod action;
mod card_id;
mod geometry;
mod notification;

pub use action::DefaultAction;
pub use card_id::CardId;
pub use geometry::{CardTransform, Point, Rect};
pub use notification::{CardTap, Notification, STATUS_CHANGE_EVENT, StatusChange, TAP_EVENT};
