//! Core interaction logic for kanban-dnd
//!
//! This module contains the gesture and drag-and-drop handlers with no
//! platform dependencies. Everything they touch is reached through the
//! port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (CardId, Notification, Point, Rect, CardTransform)
//! - `services/` - Event handlers (desktop drag, touch emulation, toast)
//! - `ports/` - Trait definitions for the board, sinks and timers

pub mod models;
pub mod ports;
pub mod services;
