//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the interaction logic and
//! the platform it runs on (a browser DOM, an in-memory board, a replay).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The handlers in `core::services` depend only on these traits, never on
//! concrete implementations. This enables:
//!
//! - **Testability**: In-memory boards and virtual clocks for unit tests
//! - **Flexibility**: The same gesture logic drives the DOM and the CLI replay
//! - **Clarity**: Clear boundaries between layers

mod board;
mod feedback;
mod sink;

pub use board::BoardSurface;
pub use feedback::{FeedbackHost, NoFeedback, Scheduler, SuccessIndicator};
pub use sink::{Listener, NotificationSink};
