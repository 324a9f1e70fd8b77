//! Cell rectangle geometry.

use glam::DVec2;

/// An axis-aligned rectangle in grid pixels.
///
/// Uses `f64` so that accumulated cell offsets match across redraws.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left)
    pub x: f64,
    /// Y position (top)
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Rect {
    /// Create a new rect.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Get the center point.
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// A zero-sized rect at this rect's center.
    pub fn collapsed(&self) -> Self {
        let center = self.center();
        Self::new(center.x, center.y, 0.0, 0.0)
    }

    /// Get the right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Get the bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}
