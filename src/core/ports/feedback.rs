//! Success feedback ports
//!
//! The toast shown after a touch drop is created, faded and removed through
//! a [`FeedbackHost`]; the delays between those steps come from a
//! [`Scheduler`]. Neither step can be cancelled.

/// Something that can confirm a successful move to the user
pub trait SuccessIndicator {
    /// Show the confirmation. Returns immediately.
    fn show(&self);
}

/// Indicator that shows nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFeedback;

impl SuccessIndicator for NoFeedback {
    fn show(&self) {}
}

/// Place where transient toast elements live
pub trait FeedbackHost {
    /// Handle to a mounted toast
    type Handle: 'static;

    /// Insert a toast showing `message`
    fn mount(&self, message: &str) -> Self::Handle;

    /// Start fading a toast out over `fade_ms`
    fn fade(&self, handle: &Self::Handle, fade_ms: u32);

    /// Remove a toast
    fn unmount(&self, handle: Self::Handle);
}

/// Fire-and-forget delayed execution
pub trait Scheduler {
    /// Run `task` once, `delay_ms` from now
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}
