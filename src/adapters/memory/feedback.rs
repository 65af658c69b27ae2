//! Recording toast host

use std::cell::{Cell, RefCell};

use serde::Serialize;

use crate::core::ports::FeedbackHost;

/// Visibility of a mounted toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastPhase {
    /// Fully visible
    Visible,
    /// Opacity transition running
    Fading,
}

#[derive(Debug)]
struct MountedToast {
    id: u64,
    message: String,
    phase: ToastPhase,
}

/// Toast host that keeps mounted toasts in a list
#[derive(Debug, Default)]
pub struct MemoryFeedbackHost {
    toasts: RefCell<Vec<MountedToast>>,
    next_id: Cell<u64>,
    removed: Cell<usize>,
}

impl MemoryFeedbackHost {
    /// Create an empty host
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toasts still mounted, oldest first
    #[must_use]
    pub fn live(&self) -> Vec<(String, ToastPhase)> {
        self.toasts
            .borrow()
            .iter()
            .map(|toast| (toast.message.clone(), toast.phase))
            .collect()
    }

    /// Number of toasts shown so far
    #[must_use]
    pub fn shown(&self) -> u64 {
        self.next_id.get()
    }

    /// Number of toasts removed so far
    #[must_use]
    pub fn removed(&self) -> usize {
        self.removed.get()
    }
}

impl FeedbackHost for MemoryFeedbackHost {
    type Handle = u64;

    fn mount(&self, message: &str) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.toasts.borrow_mut().push(MountedToast {
            id,
            message: message.to_string(),
            phase: ToastPhase::Visible,
        });
        id
    }

    fn fade(&self, handle: &u64, _fade_ms: u32) {
        if let Some(toast) = self.toasts.borrow_mut().iter_mut().find(|t| t.id == *handle) {
            toast.phase = ToastPhase::Fading;
        }
    }

    fn unmount(&self, handle: u64) {
        let mut toasts = self.toasts.borrow_mut();
        let before = toasts.len();
        toasts.retain(|t| t.id != handle);
        if toasts.len() < before {
            self.removed.set(self.removed.get() + 1);
        }
    }
}
