//! In-memory board surface

use serde::Serialize;

use crate::core::models::{CardTransform, Rect};
use crate::core::ports::BoardSurface;

/// A column of the in-memory board
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemoryColumn {
    /// Element name
    pub name: String,
    /// Value of the status attribute
    pub status: Option<String>,
    /// Bounding box
    pub bounds: Rect,
    /// Whether the drop-target marker is set
    pub drop_target: bool,
}

/// A card of the in-memory board
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemoryCard {
    /// Element name
    pub name: String,
    /// Value of the card-id attribute
    pub id: Option<String>,
    /// Whether the "being dragged" marker is set
    pub dragging: bool,
    /// Applied CSS transform
    pub transform: Option<String>,
    /// How often the "being dragged" marker was set
    #[serde(skip)]
    pub dragging_marks: u32,
    #[serde(skip)]
    transform_value: Option<CardTransform>,
}

/// Board surface backed by plain vectors
#[derive(Debug, Clone, Default)]
pub struct MemoryBoard {
    viewport_width: f64,
    columns: Vec<MemoryColumn>,
    cards: Vec<MemoryCard>,
}

impl MemoryBoard {
    /// Create an empty board with the given viewport width
    #[must_use]
    pub const fn new(viewport_width: f64) -> Self {
        Self {
            viewport_width,
            columns: Vec::new(),
            cards: Vec::new(),
        }
    }

    /// Append a column
    pub fn add_column(&mut self, name: &str, status: Option<&str>, bounds: Rect) {
        self.columns.push(MemoryColumn {
            name: name.to_string(),
            status: status.map(str::to_string),
            bounds,
            drop_target: false,
        });
    }

    /// Append a card
    pub fn add_card(&mut self, name: &str, id: Option<&str>) {
        self.cards.push(MemoryCard {
            name: name.to_string(),
            id: id.map(str::to_string),
            dragging: false,
            transform: None,
            dragging_marks: 0,
            transform_value: None,
        });
    }

    /// Change the viewport width (e.g. after a resize)
    pub const fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
    }

    /// Move a column
    pub fn set_column_bounds(&mut self, name: &str, bounds: Rect) {
        if let Some(column) = self.column_mut(name) {
            column.bounds = bounds;
        }
    }

    /// Whether a column with this name exists
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Whether a card with this name exists
    #[must_use]
    pub fn has_card(&self, name: &str) -> bool {
        self.cards.iter().any(|c| c.name == name)
    }

    /// Names of columns carrying the drop-target marker, in order
    #[must_use]
    pub fn highlighted(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| c.drop_target)
            .map(|c| c.name.clone())
            .collect()
    }

    /// Whether a card carries the "being dragged" marker
    #[must_use]
    pub fn is_dragging(&self, card: &str) -> bool {
        self.card(card).is_some_and(|c| c.dragging)
    }

    /// Transform currently applied to a card
    #[must_use]
    pub fn transform(&self, card: &str) -> Option<CardTransform> {
        self.card(card).and_then(|c| c.transform_value)
    }

    /// How many times a card was marked as dragged
    #[must_use]
    pub fn dragging_marks(&self, card: &str) -> u32 {
        self.card(card).map_or(0, |c| c.dragging_marks)
    }

    /// All columns
    #[must_use]
    pub fn column_entries(&self) -> &[MemoryColumn] {
        &self.columns
    }

    /// All cards
    #[must_use]
    pub fn card_entries(&self) -> &[MemoryCard] {
        &self.cards
    }

    fn card(&self, name: &str) -> Option<&MemoryCard> {
        self.cards.iter().find(|c| c.name == name)
    }

    fn card_mut(&mut self, name: &str) -> Option<&mut MemoryCard> {
        self.cards.iter_mut().find(|c| c.name == name)
    }

    fn column(&self, name: &str) -> Option<&MemoryColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    fn column_mut(&mut self, name: &str) -> Option<&mut MemoryColumn> {
        self.columns.iter_mut().find(|c| c.name == name)
    }
}

impl BoardSurface for MemoryBoard {
    type Card = String;
    type Column = String;

    fn columns(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    fn column_bounds(&self, column: &String) -> Rect {
        self.column(column).map(|c| c.bounds).unwrap_or_default()
    }

    fn column_status(&self, column: &String) -> Option<String> {
        self.column(column).and_then(|c| c.status.clone())
    }

    fn set_drop_target(&mut self, column: &String, marked: bool) {
        if let Some(column) = self.column_mut(column) {
            column.drop_target = marked;
        }
    }

    fn is_drop_target(&self, column: &String) -> bool {
        self.column(column).is_some_and(|c| c.drop_target)
    }

    fn card_id(&self, card: &String) -> Option<String> {
        self.card(card).and_then(|c| c.id.clone())
    }

    fn set_dragging(&mut self, card: &String, marked: bool) {
        if let Some(card) = self.card_mut(card) {
            card.dragging = marked;
            if marked {
                card.dragging_marks += 1;
            }
        }
    }

    fn set_transform(&mut self, card: &String, transform: Option<&CardTransform>) {
        if let Some(card) = self.card_mut(card) {
            card.transform_value = transform.copied();
            card.transform = transform.map(CardTransform::to_css);
        }
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }
}
