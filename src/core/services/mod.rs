//! Interaction services
//!
//! Pure event-handling logic that operates on the ports. Each handler
//! takes the board and sink it needs as arguments and returns whether the
//! platform should suppress the event's default behaviour.
//!
//! - [`desktop`] - Native drag-and-drop (drag-start/over/leave/drop/end)
//! - [`touch`] - Drag-and-drop and taps emulated from raw touch events
//! - [`feedback`] - Self-dismissing success toast
//! - [`hit_test`] - Which column contains a point

pub mod desktop;
pub mod feedback;
pub mod touch;

pub use desktop::DragSession;
pub use feedback::SuccessToast;
pub use hit_test::{column_at, highlight_exclusive};
pub use touch::{GestureState, GestureTracker, TouchEmulator, TouchInput, TouchRelease, TouchSample};
