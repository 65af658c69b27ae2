//! Board surface port
//!
//! Defines what the handlers need from the rendered board: finding columns,
//! reading attributes, and toggling the visual markers.

use crate::core::models::{CardTransform, Rect};

/// The rendered board as seen by the interaction handlers
///
/// `Card` and `Column` are element handles. In the browser they are DOM
/// elements; in tests they are plain names.
pub trait BoardSurface {
    /// Handle to a card element
    type Card: Clone + PartialEq;

    /// Handle to a drop-target column
    type Column: Clone + PartialEq;

    /// All columns, in document order
    fn columns(&self) -> Vec<Self::Column>;

    /// Current bounding box of a column
    fn column_bounds(&self, column: &Self::Column) -> Rect;

    /// The status value a column represents, if it declares one
    fn column_status(&self, column: &Self::Column) -> Option<String>;

    /// Set or clear the drop-target marker on a column
    fn set_drop_target(&mut self, column: &Self::Column, marked: bool);

    /// Whether a column currently carries the drop-target marker
    fn is_drop_target(&self, column: &Self::Column) -> bool;

    /// Raw card-id attribute of a card
    fn card_id(&self, card: &Self::Card) -> Option<String>;

    /// Set or clear the "being dragged" marker on a card
    fn set_dragging(&mut self, card: &Self::Card, marked: bool);

    /// Apply a transform to a card, or clear it with `None`
    fn set_transform(&mut self, card: &Self::Card, transform: Option<&CardTransform>);

    /// Width of the layout viewport in CSS pixels
    fn viewport_width(&self) -> f64;

    /// The column carrying the drop-target marker
    ///
    /// If several do, the last in document order is returned.
    fn drop_target(&self) -> Option<Self::Column> {
        self.columns().into_iter().rev().find(|column| self.is_drop_target(column))
    }

    /// Clear the drop-target marker from every column
    fn clear_drop_targets(&mut self) {
        for column in self.columns() {
            self.set_drop_target(&column, false);
        }
    }
}
