//! Screen-space geometry in CSS pixels

use serde::{Deserialize, Serialize};

/// A point in client coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position
    pub x: f64,
    /// Vertical position
    pub y: f64,
}

impl Point {
    /// Create a point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to `other`
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Offset from `origin` to this point
    #[must_use]
    pub fn offset_from(self, origin: Self) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }
}

/// An axis-aligned bounding box, as returned by `getBoundingClientRect`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub left: f64,
    /// Top edge
    pub top: f64,
    /// Right edge
    pub right: f64,
    /// Bottom edge
    pub bottom: f64,
}

impl Rect {
    /// Create a rect from its four edges
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Whether `point` lies inside or on the edge of this rect
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }
}

/// Visual transform applied to a card that follows the finger
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    /// Horizontal offset from the touch start
    pub dx: f64,
    /// Vertical offset from the touch start
    pub dy: f64,
    /// Tilt in degrees
    pub rotate_deg: f64,
    /// Scale factor
    pub scale: f64,
}

impl CardTransform {
    /// Render as a CSS `transform` value
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "translate({}px, {}px) rotate({}deg) scale({})",
            self.dx, self.dy, self.rotate_deg, self.scale
        )
    }
}

impl std::fmt::Display for CardTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_css())
    }
}
