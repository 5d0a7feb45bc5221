use serde::{Deserialize, Serialize};

/// Full canvas size in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(600, 450)
    }
}

/// Inner drawing region of a plot, in pixels relative to its own origin.
///
/// The plot area sits inside the viewport, offset by `offset_x`/`offset_y`.
/// Brush rectangles and projected point positions live in plot-area space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub offset_x: f64,
    pub offset_y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Insets `viewport` by `margin / 2` on every side.
    #[must_use]
    pub fn inset(viewport: Viewport, margin: f64) -> Self {
        Self {
            offset_x: margin / 2.0,
            offset_y: margin / 2.0,
            width: f64::from(viewport.width) - margin,
            height: f64::from(viewport.height) - margin,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    #[must_use]
    pub fn to_viewport(self, x: f64, y: f64) -> (f64, f64) {
        (x + self.offset_x, y + self.offset_y)
    }

    #[must_use]
    pub fn from_viewport(self, x: f64, y: f64) -> (f64, f64) {
        (x - self.offset_x, y - self.offset_y)
    }
}
