//! Transient success feedback
//!
//! After a touch drop the user gets a short-lived toast. It is mounted
//! immediately, starts fading after `hold_ms`, and is removed `fade_ms`
//! later. The two delays are chained and always run to completion.

use std::rc::Rc;

use crate::config::FeedbackConfig;
use crate::core::ports::{FeedbackHost, Scheduler, SuccessIndicator};

/// Success indicator backed by a toast element
#[derive(Debug)]
pub struct SuccessToast<H, S> {
    host: Rc<H>,
    scheduler: S,
    config: FeedbackConfig,
}

impl<H, S> SuccessToast<H, S>
where
    H: FeedbackHost + 'static,
    S: Scheduler + Clone + 'static,
{
    /// Create a toast indicator
    #[must_use]
    pub const fn new(host: Rc<H>, scheduler: S, config: FeedbackConfig) -> Self {
        Self {
            host,
            scheduler,
            config,
        }
    }

    /// The host toasts are mounted on
    #[must_use]
    pub const fn host(&self) -> &Rc<H> {
        &self.host
    }
}

impl<H, S> SuccessIndicator for SuccessToast<H, S>
where
    H: FeedbackHost + 'static,
    S: Scheduler + Clone + 'static,
{
    fn show(&self) {
        let handle = self.host.mount(&self.config.message);
        let host = Rc::clone(&self.host);
        let scheduler = self.scheduler.clone();
        let fade_ms = self.config.fade_ms;

        self.scheduler.schedule(
            self.config.hold_ms,
            Box::new(move || {
                host.fade(&handle, fade_ms);
                scheduler.schedule(fade_ms, Box::new(move || host.unmount(handle)));
            }),
        );
    }
}
