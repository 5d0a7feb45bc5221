use serde::{Deserialize, Serialize};

use crate::core::{FieldSelectors, PlotArea, Viewport};
use crate::error::{ScatterError, ScatterResult};
use crate::interaction::OpacityConfig;
use crate::sinks::ListItemTemplate;

/// Placement of the category legend, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendLayout {
    pub origin_x: f64,
    pub origin_y: f64,
    pub row_height: f64,
    pub swatch_size: f64,
    pub label_offset_x: f64,
    pub font_size_px: f64,
}

impl Default for LegendLayout {
    fn default() -> Self {
        Self {
            origin_x: 20.0,
            origin_y: 80.0,
            row_height: 30.0,
            swatch_size: 20.0,
            label_offset_x: 30.0,
            font_size_px: 14.0,
        }
    }
}

impl LegendLayout {
    /// Top edge of legend row `row`.
    #[must_use]
    pub fn row_top(self, row: usize) -> f64 {
        self.origin_y + row as f64 * self.row_height
    }
}

/// Public plot bootstrap configuration.
///
/// Serializable so hosts can keep plot setup next to their data sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPlotConfig {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default = "default_margin")]
    pub margin: f64,
    #[serde(default)]
    pub title: String,
    pub fields: FieldSelectors,
    #[serde(default = "default_radius_range")]
    pub radius_range: (f64, f64),
    #[serde(default)]
    pub opacity: OpacityConfig,
    #[serde(default)]
    pub legend: LegendLayout,
    #[serde(default)]
    pub list_template: ListItemTemplate,
}

impl ScatterPlotConfig {
    /// Creates a config with the default 600x450 canvas and 100px margin.
    #[must_use]
    pub fn new(fields: FieldSelectors) -> Self {
        Self {
            viewport: Viewport::default(),
            margin: default_margin(),
            title: String::new(),
            fields,
            radius_range: default_radius_range(),
            opacity: OpacityConfig::default(),
            legend: LegendLayout::default(),
            list_template: ListItemTemplate::default(),
        }
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Total margin; the plot area is inset by half of it on each side.
    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_radius_range(mut self, min: f64, max: f64) -> Self {
        self.radius_range = (min, max);
        self
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: OpacityConfig) -> Self {
        self.opacity = opacity;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: LegendLayout) -> Self {
        self.legend = legend;
        self
    }

    #[must_use]
    pub fn with_list_template(mut self, template: ListItemTemplate) -> Self {
        self.list_template = template;
        self
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        PlotArea::inset(self.viewport, self.margin)
    }

    pub fn validate(&self) -> ScatterResult<()> {
        if !self.viewport.is_valid() {
            return Err(ScatterError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(ScatterError::InvalidConfig(
                "margin must be finite and >= 0".to_owned(),
            ));
        }
        if !self.plot_area().is_valid() {
            return Err(ScatterError::InvalidConfig(format!(
                "margin {} leaves no plot area inside {}x{}",
                self.margin, self.viewport.width, self.viewport.height
            )));
        }

        let (r_min, r_max) = self.radius_range;
        if !r_min.is_finite() || !r_max.is_finite() || r_min < 0.0 || r_min > r_max {
            return Err(ScatterError::InvalidConfig(
                "radius range must be finite with 0 <= min <= max".to_owned(),
            ));
        }

        for (name, value) in [
            ("default", self.opacity.default),
            ("hover_match", self.opacity.hover_match),
            ("hover_dim", self.opacity.hover_dim),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ScatterError::InvalidConfig(format!(
                    "opacity `{name}` must be in [0, 1]"
                )));
            }
        }

        let legend = self.legend;
        for (name, value) in [
            ("row_height", legend.row_height),
            ("swatch_size", legend.swatch_size),
            ("font_size_px", legend.font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ScatterError::InvalidConfig(format!(
                    "legend `{name}` must be finite and > 0"
                )));
            }
        }

        Ok(())
    }

    pub fn from_json_str(input: &str) -> ScatterResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ScatterError::Serialization(format!("failed to parse plot config: {e}")))
    }

    pub fn to_json_pretty(&self) -> ScatterResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ScatterError::Serialization(format!("failed to serialize plot config: {e}"))
        })
    }
}

fn default_margin() -> f64 {
    100.0
}

fn default_radius_range() -> (f64, f64) {
    (4.0, 12.0)
}
