//! Notifications as DOM events

use web_sys::{CustomEvent, CustomEventInit, Document};

use crate::core::models::Notification;
use crate::core::ports::NotificationSink;

/// Dispatches each notification as a `CustomEvent` on the document
///
/// The event `detail` is `{cardId, newStatus}` for a status change and
/// `{cardId}` for a tap.
#[derive(Debug, Clone)]
pub struct DocumentSink {
    document: Document,
}

impl DocumentSink {
    /// Dispatch on `document`
    #[must_use]
    pub const fn new(document: Document) -> Self {
        Self { document }
    }
}

impl NotificationSink for DocumentSink {
    fn notify(&mut self, notification: Notification) {
        let detail = match &notification {
            Notification::StatusChange(change) => serde_wasm_bindgen::to_value(change),
            Notification::Tap(tap) => serde_wasm_bindgen::to_value(tap),
        };
        let detail = match detail {
            Ok(detail) => detail,
            Err(err) => {
                log::warn!("Failed to encode {} detail: {err}", notification.event_name());
                return;
            },
        };

        let init = CustomEventInit::new();
        init.set_detail(&detail);
        match CustomEvent::new_with_event_init_dict(notification.event_name(), &init) {
            Ok(event) => {
                if let Err(err) = self.document.dispatch_event(&event) {
                    log::warn!("Dispatching {} failed: {err:?}", notification.event_name());
                }
            },
            Err(err) => log::warn!("Creating {} failed: {err:?}", notification.event_name()),
        }
    }
}
