use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{CategoryKey, CoordinateMapper, Dataset, PlotArea, PointGeometry, Record};

use super::BrushRect;

/// Opacity directives applied by the point styling sink.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpacityConfig {
    /// Opacity of every point while no legend item is hovered.
    pub default: f64,
    /// Opacity of points in the hovered category.
    pub hover_match: f64,
    /// Opacity of points outside the hovered category.
    pub hover_dim: f64,
}

impl Default for OpacityConfig {
    fn default() -> Self {
        Self {
            default: 0.7,
            hover_match: 1.0,
            hover_dim: 0.1,
        }
    }
}

/// Mutable selection state of one plot.
///
/// Per-record membership is not stored: it is derived from `brush` and the
/// coordinate mapper on every query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    pub brush: Option<BrushRect>,
    pub hovered_category: Option<CategoryKey>,
}

impl SelectionState {
    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.brush.is_some()
    }

    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.hovered_category.is_some()
    }
}

/// What a handler did; the plot facade uses it to notify sinks and plugins.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    BrushChanged { brush: Option<BrushRect> },
    Cleared,
    LegendHovered { category: CategoryKey },
    LegendHoverEnded,
}

/// Owns the dataset, its coordinate mapping and the selection state, and
/// applies brush, clear and legend-hover gestures to them.
#[derive(Debug, Clone)]
pub struct SelectionEngine {
    dataset: Dataset,
    mapper: CoordinateMapper,
    area: PlotArea,
    geometry: Vec<Option<PointGeometry>>,
    opacity: OpacityConfig,
    state: SelectionState,
}

impl SelectionEngine {
    #[must_use]
    pub fn new(
        dataset: Dataset,
        mapper: CoordinateMapper,
        area: PlotArea,
        opacity: OpacityConfig,
    ) -> Self {
        let geometry = mapper.project_all(&dataset);
        Self {
            dataset,
            mapper,
            area,
            geometry,
            opacity,
            state: SelectionState::default(),
        }
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.area
    }

    #[must_use]
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    #[must_use]
    pub fn opacity_config(&self) -> OpacityConfig {
        self.opacity
    }

    /// Projected geometry of the record at `index`, `None` when not plotted.
    #[must_use]
    pub fn geometry(&self, index: usize) -> Option<PointGeometry> {
        self.geometry.get(index).copied().flatten()
    }

    /// Applies a brush tick or brush end. `None` clears membership.
    ///
    /// The rectangle is kept as given, even when it extends past the plot
    /// area; only the drawn overlay is clamped. Non-finite rectangles are
    /// treated as `None`.
    pub fn on_brush(&mut self, brush: Option<BrushRect>) -> SelectionEvent {
        let brush = brush.filter(|rect| rect.is_finite());
        self.state.brush = brush;
        trace!(
            brush = ?brush.map(BrushRect::corners),
            selected = self.selected_count(),
            "brush applied"
        );
        SelectionEvent::BrushChanged { brush }
    }

    /// Clear gesture: drops the brush and with it every selected flag.
    pub fn on_clear(&mut self) -> SelectionEvent {
        let had_selection = self.state.has_selection();
        self.state.brush = None;
        debug!(had_selection, "selection cleared");
        SelectionEvent::Cleared
    }

    /// Overrides opacity only; membership is untouched.
    pub fn on_legend_hover(&mut self, category: CategoryKey) -> SelectionEvent {
        debug!(%category, "legend hover");
        self.state.hovered_category = Some(category.clone());
        SelectionEvent::LegendHovered { category }
    }

    pub fn on_legend_hover_end(&mut self) -> SelectionEvent {
        self.state.hovered_category = None;
        SelectionEvent::LegendHoverEnded
    }

    /// Membership predicate: the record's projected center lies inside the
    /// current brush. Unplottable records are never selected.
    #[must_use]
    pub fn is_selected(&self, record: &Record) -> bool {
        let Some(brush) = self.state.brush else {
            return false;
        };
        self.geometry(record.index)
            .is_some_and(|point| brush.contains(point.cx, point.cy))
    }

    /// Selected records in dataset order.
    #[must_use]
    pub fn selected_records(&self) -> Vec<&Record> {
        if self.state.brush.is_none() {
            return Vec::new();
        }
        self.dataset
            .records()
            .iter()
            .filter(|record| self.is_selected(record))
            .collect()
    }

    #[must_use]
    pub fn selected_indices(&self) -> Vec<usize> {
        self.selected_records()
            .into_iter()
            .map(|record| record.index)
            .collect()
    }

    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected_records().len()
    }

    /// Opacity directive for a record under the current legend hover.
    #[must_use]
    pub fn opacity(&self, record: &Record) -> f64 {
        match &self.state.hovered_category {
            None => self.opacity.default,
            Some(hovered) => {
                if self.mapper.category(record).as_ref() == Some(hovered) {
                    self.opacity.hover_match
                } else {
                    self.opacity.hover_dim
                }
            }
        }
    }

    /// Topmost plotted record under `(x, y)` in plot-area pixels.
    ///
    /// Later records are drawn over earlier ones, so the search runs backwards.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<&Record> {
        self.geometry
            .iter()
            .enumerate()
            .rev()
            .find(|(_, geometry)| geometry.is_some_and(|g| g.contains(x, y)))
            .and_then(|(index, _)| self.dataset.get(index))
    }
}
