//! Toast element and browser timers

use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::core::ports::{FeedbackHost, Scheduler};

const TOAST_STYLE: &str = "position: fixed; top: 50%; left: 50%; \
    transform: translate(-50%, -50%); background: #10b981; color: white; \
    padding: 15px 25px; border-radius: 25px; font-weight: 600; z-index: 2000; \
    box-shadow: 0 4px 12px rgba(16, 185, 129, 0.3);";

/// Mounts toasts as fixed-position elements on the document body
#[derive(Debug, Clone)]
pub struct DomFeedbackHost {
    document: Document,
}

impl DomFeedbackHost {
    /// Mount toasts on `document`
    #[must_use]
    pub const fn new(document: Document) -> Self {
        Self { document }
    }

    fn create(&self, message: &str) -> Result<Element, wasm_bindgen::JsValue> {
        let toast = self.document.create_element("div")?;
        toast.set_attribute("style", TOAST_STYLE)?;
        toast.set_text_content(Some(message));
        if let Some(body) = self.document.body() {
            body.append_child(&toast)?;
        }
        Ok(toast)
    }
}

impl FeedbackHost for DomFeedbackHost {
    type Handle = Option<Element>;

    fn mount(&self, message: &str) -> Option<Element> {
        self.create(message)
            .map_err(|err| log::warn!("Failed to show success toast: {err:?}"))
            .ok()
    }

    fn fade(&self, handle: &Option<Element>, fade_ms: u32) {
        let Some(style) = handle
            .as_ref()
            .and_then(|el| el.dyn_ref::<HtmlElement>())
            .map(HtmlElement::style)
        else {
            return;
        };
        let transition = format!("opacity {}s", f64::from(fade_ms) / 1000.0);
        if style.set_property("transition", &transition).is_err()
            || style.set_property("opacity", "0").is_err()
        {
            log::warn!("Failed to fade success toast");
        }
    }

    fn unmount(&self, handle: Option<Element>) {
        if let Some(toast) = handle {
            toast.remove();
        }
    }
}

/// Scheduler backed by `setTimeout`
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}
