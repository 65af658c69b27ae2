//! In-memory adapters
//!
//! Elements are identified by name. Nothing here touches a real DOM or a
//! real clock, which makes every interaction deterministic.

mod board;
mod feedback;
mod scheduler;

pub use board::{MemoryBoard, MemoryCard, MemoryColumn};
pub use feedback::{MemoryFeedbackHost, ToastPhase};
pub use scheduler::ManualScheduler;
