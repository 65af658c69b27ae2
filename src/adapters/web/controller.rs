//! Listener registration
//!
//! [`WebKanban`] is what the board-rendering code talks to: it calls
//! [`WebKanban::setup_drag_and_drop`] once after rendering the columns and
//! [`WebKanban::attach_card`] for every card element it creates.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, TouchEvent};

use super::{DocumentSink, DomBoard, DomFeedbackHost, TimeoutScheduler, WebError};
use crate::config::InteractionConfig;
use crate::core::models::{DefaultAction, Notification, Point};
use crate::core::ports::{BoardSurface, NotificationSink};
use crate::core::services::{DragSession, GestureTracker, SuccessToast, TouchInput, TouchRelease, TouchSample};

type Toast = SuccessToast<DomFeedbackHost, TimeoutScheduler>;

/// Drag-and-drop and touch handling bound to the live document
pub struct WebKanban {
    config: InteractionConfig,
    board: DomBoard,
    sink: DocumentSink,
    session: Rc<RefCell<DragSession<HtmlElement>>>,
    toast: Rc<Toast>,
    listeners: Vec<EventListener>,
}

impl WebKanban {
    /// Bind to the global document
    pub fn new(config: InteractionConfig) -> Result<Self, WebError> {
        let board = DomBoard::from_window(config.selectors.clone())?;
        let document = board.document().clone();
        let toast = SuccessToast::new(
            Rc::new(DomFeedbackHost::new(document.clone())),
            TimeoutScheduler,
            config.feedback.clone(),
        );
        Ok(Self {
            config,
            board,
            sink: DocumentSink::new(document),
            session: Rc::new(RefCell::new(DragSession::new())),
            toast: Rc::new(toast),
            listeners: Vec::new(),
        })
    }

    /// Register `dragover`, `drop` and `dragleave` on every column
    ///
    /// Returns the number of columns found.
    pub fn setup_drag_and_drop(&mut self) -> Result<usize, WebError> {
        let columns = self.board.try_columns()?;
        for column in &columns {
            self.listen_column(column);
        }
        log::debug!("Drag-and-drop registered on {} columns", columns.len());
        Ok(columns.len())
    }

    /// Register drag and touch handling on a freshly rendered card
    ///
    /// Returns whether touch handling was attached; it is skipped on wide
    /// viewports.
    pub fn attach_card(&mut self, card: &HtmlElement) -> bool {
        self.listen_card_drag(card);
        self.add_touch_events(card)
    }

    /// Register only the touch handlers on a card
    pub fn add_touch_events(&mut self, card: &HtmlElement) -> bool {
        let width = self.board.viewport_width();
        if !self.config.touch.allows_viewport(width) {
            log::debug!("Viewport {width}px is desktop-sized, skipping touch handlers");
            return false;
        }

        let tracker = Rc::new(RefCell::new(GestureTracker::new(card.clone(), self.config.touch.clone())));
        let listener = {
            let tracker = Rc::clone(&tracker);
            let board = self.board.clone();
            EventListener::new_with_options(card, "touchstart", EventListenerOptions::enable_prevent_default(), move |event: &Event| {
                let Some(input) = touch_input(&board, event) else {
                    return;
                };
                apply(event, tracker.borrow_mut().touch_start(input));
            })
        };
        self.listeners.push(listener);

        let listener = {
            let tracker = Rc::clone(&tracker);
            let mut board = self.board.clone();
            EventListener::new_with_options(card, "touchmove", EventListenerOptions::enable_prevent_default(), move |event: &Event| {
                let Some(input) = touch_input(&board, event) else {
                    return;
                };
                let action = tracker.borrow_mut().touch_move(&mut board, input);
                apply(event, action);
            })
        };
        self.listeners.push(listener);

        let listener = {
            let tracker = Rc::clone(&tracker);
            let mut board = self.board.clone();
            let mut sink = self.sink.clone();
            let toast = Rc::clone(&self.toast);
            EventListener::new(card, "touchend", move |event: &Event| {
                let release = TouchRelease {
                    at_ms: now_ms(),
                    in_excluded_region: board.in_excluded_region(event_element(event).as_ref()),
                };
                let mut pending: Vec<Notification> = Vec::new();
                let action = tracker
                    .borrow_mut()
                    .touch_end(&mut board, &mut pending, toast.as_ref(), release);
                apply(event, action);
                for notification in pending {
                    sink.notify(notification);
                }
            })
        };
        self.listeners.push(listener);

        let listener = {
            let mut board = self.board.clone();
            EventListener::new(card, "touchcancel", move |event: &Event| {
                let action = tracker.borrow_mut().touch_cancel(&mut board);
                apply(event, action);
            })
        };
        self.listeners.push(listener);

        true
    }

    /// Drop every registered listener
    pub fn detach_all(&mut self) {
        self.listeners.clear();
    }

    /// Number of live listeners
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn listen_card_drag(&mut self, card: &HtmlElement) {
        let listener = {
            let session = Rc::clone(&self.session);
            let mut board = self.board.clone();
            let dragged = card.clone();
            EventListener::new(card, "dragstart", move |event: &Event| {
                let action = session.borrow_mut().drag_start(&mut board, &dragged);
                apply(event, action);
            })
        };
        self.listeners.push(listener);

        let listener = {
            let session = Rc::clone(&self.session);
            let mut board = self.board.clone();
            let dragged = card.clone();
            EventListener::new(card, "dragend", move |event: &Event| {
                let action = session.borrow_mut().drag_end(&mut board, &dragged);
                apply(event, action);
            })
        };
        self.listeners.push(listener);
    }

    fn listen_column(&mut self, column: &Element) {
        let listener = {
            let session = Rc::clone(&self.session);
            let mut board = self.board.clone();
            EventListener::new_with_options(column, "dragover", EventListenerOptions::enable_prevent_default(), move |event: &Event| {
                let target = board.column_of(event_element(event).as_ref());
                let action = session.borrow().drag_over(&mut board, target.as_ref());
                apply(event, action);
            })
        };
        self.listeners.push(listener);

        let listener = {
            let session = Rc::clone(&self.session);
            let mut board = self.board.clone();
            let mut sink = self.sink.clone();
            EventListener::new_with_options(column, "drop", EventListenerOptions::enable_prevent_default(), move |event: &Event| {
                let target = board.column_of(event_element(event).as_ref());
                let mut pending: Vec<Notification> = Vec::new();
                let action = session
                    .borrow_mut()
                    .drop_card(&mut board, &mut pending, target.as_ref());
                apply(event, action);
                for notification in pending {
                    sink.notify(notification);
                }
            })
        };
        self.listeners.push(listener);

        let listener = {
            let session = Rc::clone(&self.session);
            let mut board = self.board.clone();
            EventListener::new(column, "dragleave", move |event: &Event| {
                let target = board.column_of(event_element(event).as_ref());
                let action = session.borrow().drag_leave(&mut board, target.as_ref());
                apply(event, action);
            })
        };
        self.listeners.push(listener);
    }
}

impl std::fmt::Debug for WebKanban {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebKanban")
            .field("config", &self.config)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

fn apply(event: &Event, action: DefaultAction) {
    if action.is_prevented() {
        event.prevent_default();
    }
}

fn event_element(event: &Event) -> Option<Element> {
    event.target().and_then(|target| target.dyn_into::<Element>().ok())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn now_ms() -> u64 {
    js_sys::Date::now().max(0.0) as u64
}

fn touch_input(board: &DomBoard, event: &Event) -> Option<TouchInput> {
    let touch = event.dyn_ref::<TouchEvent>()?.touches().item(0)?;
    Some(TouchInput {
        sample: TouchSample {
            position: Point::new(f64::from(touch.client_x()), f64::from(touch.client_y())),
            at_ms: now_ms(),
        },
        in_excluded_region: board.in_excluded_region(event_element(event).as_ref()),
    })
}
