//! Notification sink port
//!
//! Receives the status-change and tap notifications produced by the
//! handlers. Emitters never know who is listening.

use std::sync::mpsc::Sender;

use crate::core::models::Notification;

/// Receiver of interaction notifications
pub trait NotificationSink {
    /// Deliver one notification
    fn notify(&mut self, notification: Notification);
}

impl NotificationSink for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

impl NotificationSink for Sender<Notification> {
    fn notify(&mut self, notification: Notification) {
        if self.send(notification).is_err() {
            log::debug!("Notification receiver dropped, discarding");
        }
    }
}

impl<N: NotificationSink + ?Sized> NotificationSink for &mut N {
    fn notify(&mut self, notification: Notification) {
        (**self).notify(notification);
    }
}

/// Adapts a closure into a [`NotificationSink`]
///
/// ```
/// use kanban_dnd::core::models::{CardId, Notification};
/// use kanban_dnd::core::ports::{Listener, NotificationSink};
///
/// let mut seen = Vec::new();
/// let mut sink = Listener(|n: Notification| seen.push(n));
/// sink.notify(Notification::tap(CardId::Numeric(1)));
/// drop(sink);
/// assert_eq!(seen.len(), 1);
/// ```
pub struct Listener<F>(pub F);

impl<F: FnMut(Notification)> NotificationSink for Listener<F> {
    fn notify(&mut self, notification: Notification) {
        (self.0)(notification);
    }
}

impl<F> std::fmt::Debug for Listener<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener").finish_non_exhaustive()
    }
}
