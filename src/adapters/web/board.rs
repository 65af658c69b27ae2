//! Board surface over the live document

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use super::WebError;
use crate::config::SelectorConfig;
use crate::core::models::{CardTransform, Rect};
use crate::core::ports::BoardSurface;

/// The board as rendered in the document
///
/// Holds only handles, so clones are cheap and every listener can own one.
#[derive(Debug, Clone)]
pub struct DomBoard {
    window: Window,
    document: Document,
    selectors: SelectorConfig,
}

impl DomBoard {
    /// Bind to the global window and document
    pub fn from_window(selectors: SelectorConfig) -> Result<Self, WebError> {
        let window = web_sys::window().ok_or(WebError::NoWindow)?;
        let document = window.document().ok_or(WebError::NoDocument)?;
        Ok(Self {
            window,
            document,
            selectors,
        })
    }

    /// The bound document
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Selectors and class names in use
    #[must_use]
    pub const fn selectors(&self) -> &SelectorConfig {
        &self.selectors
    }

    /// All columns, failing if the selector is invalid
    pub fn try_columns(&self) -> Result<Vec<Element>, WebError> {
        let list = self.document.query_selector_all(&self.selectors.column)?;
        Ok((0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    /// The column enclosing an event target
    #[must_use]
    pub fn column_of(&self, target: Option<&Element>) -> Option<Element> {
        target.and_then(|el| el.closest(&self.selectors.column).ok().flatten())
    }

    /// Whether an event target lies inside a card's excluded region
    #[must_use]
    pub fn in_excluded_region(&self, target: Option<&Element>) -> bool {
        target
            .and_then(|el| el.closest(&self.selectors.excluded_region).ok().flatten())
            .is_some()
    }

    fn toggle_class(element: &Element, class: &str, marked: bool) {
        let classes = element.class_list();
        let result = if marked {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };
        if let Err(err) = result {
            log::warn!("Failed to toggle class {class}: {err:?}");
        }
    }
}

impl BoardSurface for DomBoard {
    type Card = HtmlElement;
    type Column = Element;

    fn columns(&self) -> Vec<Element> {
        self.try_columns().unwrap_or_else(|err| {
            log::warn!("Column lookup failed: {err}");
            Vec::new()
        })
    }

    fn column_bounds(&self, column: &Element) -> Rect {
        let rect = column.get_bounding_client_rect();
        Rect::new(rect.left(), rect.top(), rect.right(), rect.bottom())
    }

    fn column_status(&self, column: &Element) -> Option<String> {
        column.get_attribute(&self.selectors.status_attribute)
    }

    fn set_drop_target(&mut self, column: &Element, marked: bool) {
        Self::toggle_class(column, &self.selectors.drop_target_class, marked);
    }

    fn is_drop_target(&self, column: &Element) -> bool {
        column.class_list().contains(&self.selectors.drop_target_class)
    }

    fn card_id(&self, card: &HtmlElement) -> Option<String> {
        card.get_attribute(&self.selectors.card_id_attribute)
    }

    fn set_dragging(&mut self, card: &HtmlElement, marked: bool) {
        Self::toggle_class(card, &self.selectors.dragging_class, marked);
    }

    fn set_transform(&mut self, card: &HtmlElement, transform: Option<&CardTransform>) {
        let value = transform.map(CardTransform::to_css).unwrap_or_default();
        if let Err(err) = card.style().set_property("transform", &value) {
            log::warn!("Failed to set card transform: {err:?}");
        }
    }

    fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or_default()
    }
}
