use tracing::{debug, trace};

use crate::core::{CategoryKey, Record};
use crate::interaction::{BrushRect, SelectionEvent};
use crate::render::Renderer;

use super::ScatterPlot;

impl<R: Renderer> ScatterPlot<R> {
    /// Brush tick or brush end. Both sinks re-project even when the rectangle
    /// did not move.
    pub fn on_brush(&mut self, brush: Option<BrushRect>) {
        let event = self.engine.on_brush(brush);
        self.project_selection();
        self.emit_selection_event(event);
    }

    /// Same as [`Self::on_brush`] with the `[[x0, y0], [x1, y1]]` gesture payload.
    pub fn on_brush_corners(&mut self, corners: Option<[[f64; 2]; 2]>) {
        self.on_brush(corners.map(BrushRect::from_corners));
    }

    /// Clear gesture. Drops the brush, unflags every point and empties the
    /// list. Always re-projects, even with nothing selected.
    pub fn on_clear(&mut self) {
        let event = self.engine.on_clear();
        self.project_selection();
        self.emit_selection_event(event);
    }

    /// Background click at `(x, y)` in plot-area pixels.
    ///
    /// Clicks landing on a point are not clear gestures. Returns whether the
    /// selection was cleared.
    pub fn on_background_click(&mut self, x: f64, y: f64) -> bool {
        if let Some(record) = self.engine.hit_test(x, y) {
            trace!(index = record.index, "click hit a point, not clearing");
            return false;
        }
        self.on_clear();
        true
    }

    /// Legend item entered. Only opacity changes; membership and the list
    /// are untouched. Unknown categories dim every point.
    pub fn on_legend_hover(&mut self, category: CategoryKey) {
        let event = self.engine.on_legend_hover(category);
        self.point_sink.project(&self.engine);
        self.emit_selection_event(event);
    }

    pub fn on_legend_hover_end(&mut self) {
        let event = self.engine.on_legend_hover_end();
        self.point_sink.project(&self.engine);
        self.emit_selection_event(event);
    }

    /// Topmost record under `(x, y)` in plot-area pixels.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<&Record> {
        self.engine.hit_test(x, y)
    }

    /// Legend category under `(x, y)` in viewport pixels.
    ///
    /// A row covers its swatch plus an estimate of its label width.
    #[must_use]
    pub fn legend_hit_test(&self, x: f64, y: f64) -> Option<CategoryKey> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let legend = self.config.legend;
        if y < legend.origin_y || x < legend.origin_x {
            return None;
        }
        let row = ((y - legend.origin_y) / legend.row_height).floor() as usize;
        if y > legend.row_top(row) + legend.swatch_size {
            return None;
        }

        let category = self.engine.mapper().categories().iter().nth(row)?;
        let label_width = category.to_string().chars().count() as f64 * legend.font_size_px * 0.6;
        let right = legend.origin_x + legend.label_offset_x + label_width;
        (x <= right).then(|| category.clone())
    }

    fn project_selection(&mut self) {
        self.point_sink.project(&self.engine);
        let lines = self.list_sink.project(&self.engine);
        debug!(
            selected = self.point_sink.selected_count(),
            lines,
            "selection projected"
        );
    }

    fn emit_selection_event(&mut self, event: SelectionEvent) {
        self.emit_plugin_event(event.into());
    }
}
