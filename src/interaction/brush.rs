use serde::{Deserialize, Serialize};

use crate::core::PlotArea;

/// Axis-aligned brush rectangle in plot-area pixels.
///
/// Normalized on construction: `x0 <= x1` and `y0 <= y1` whenever the corners
/// are finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushRect {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

impl BrushRect {
    /// Builds a rectangle from two opposite corners in any order.
    #[must_use]
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        let (x0, x1) = ordered(x0, x1);
        let (y0, y1) = ordered(y0, y1);
        Self { x0, y0, x1, y1 }
    }

    /// `[[x0, y0], [x1, y1]]` form delivered by brush gestures.
    #[must_use]
    pub fn from_corners(corners: [[f64; 2]; 2]) -> Self {
        let [[x0, y0], [x1, y1]] = corners;
        Self::new(x0, y0, x1, y1)
    }

    #[must_use]
    pub fn corners(self) -> [[f64; 2]; 2] {
        [[self.x0, self.y0], [self.x1, self.y1]]
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x0.is_finite() && self.y0.is_finite() && self.x1.is_finite() && self.y1.is_finite()
    }

    /// Inclusive on every edge; a zero-width or zero-height brush still
    /// matches points lying exactly on it.
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        self.x0 <= x && x <= self.x1 && self.y0 <= y && y <= self.y1
    }

    #[must_use]
    pub fn clamp_to(self, area: PlotArea) -> Self {
        let clamp_x = |value: f64| value.clamp(0.0, area.width);
        let clamp_y = |value: f64| value.clamp(0.0, area.height);
        Self {
            x0: clamp_x(self.x0),
            y0: clamp_y(self.y0),
            x1: clamp_x(self.x1),
            y1: clamp_y(self.y1),
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.x1 - self.x0
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.y1 - self.y0
    }
}

// A NaN corner is kept so `is_finite` still sees it.
fn ordered(a: f64, b: f64) -> (f64, f64) {
    if b < a { (b, a) } else { (a, b) }
}
