//! kanban-dnd - Drag-and-drop and touch gestures for kanban boards
//!
//! Cards move between status columns by native drag-and-drop on desktop and
//! by an emulated drag on touch screens, where a short touch is a tap
//! instead. The library reports exactly two things to the rest of the
//! application: a card changed status, and a card was tapped.
//!
//! The handlers in [`crate::core`] are platform independent. The `web` feature
//! binds them to a browser document; [`adapters::memory`] and [`scenario`]
//! run them natively.

// Deny all clippy warnings in this crate
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
pub mod scenario;

pub use config::InteractionConfig;
pub use crate::core::models::{CardId, Notification};
