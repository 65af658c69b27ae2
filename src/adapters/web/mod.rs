//! Browser DOM bindings
//!
//! Wires the interaction handlers to real elements:
//!
//! - [`DomBoard`] reads columns and cards straight from the document
//! - [`DocumentSink`] re-broadcasts notifications as `CustomEvent`s on the
//!   document (`cardStatusUpdate`, `cardTap`)
//! - [`DomFeedbackHost`] and [`TimeoutScheduler`] show the success toast
//! - [`WebKanban`] registers the listeners and owns the drag session
//!
//! Errors surface only during setup. Inside event callbacks failures are
//! logged and the event is otherwise left alone.

mod board;
mod controller;
mod feedback;
mod sink;

use thiserror::Error;
use wasm_bindgen::JsValue;

pub use board::DomBoard;
pub use controller::WebKanban;
pub use feedback::{DomFeedbackHost, TimeoutScheduler};
pub use sink::DocumentSink;

/// Failures while binding to the DOM
#[derive(Debug, Error)]
pub enum WebError {
    /// Not running in a browsing context
    #[error("no global window")]
    NoWindow,

    /// The window has no document
    #[error("window has no document")]
    NoDocument,

    /// A DOM call threw
    #[error("DOM error: {0}")]
    Js(String),
}

impl From<JsValue> for WebError {
    fn from(err: JsValue) -> Self {
        Self::Js(format!("{err:?}"))
    }
}
