use crate::interaction::SelectionEngine;

/// Visual state of one point as last pushed by the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointStyle {
    pub index: usize,
    pub selected: bool,
    pub opacity: f64,
}

/// Projects selection membership and the legend-hover overlay onto points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointStyleSink {
    styles: Vec<PointStyle>,
}

impl PointStyleSink {
    /// Restyles every record; the previous styles are discarded.
    pub fn project(&mut self, engine: &SelectionEngine) {
        self.styles.clear();
        self.styles
            .extend(engine.dataset().records().iter().map(|record| PointStyle {
                index: record.index,
                selected: engine.is_selected(record),
                opacity: engine.opacity(record),
            }));
    }

    #[must_use]
    pub fn styles(&self) -> &[PointStyle] {
        &self.styles
    }

    #[must_use]
    pub fn style(&self, index: usize) -> Option<PointStyle> {
        self.styles.get(index).copied()
    }

    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.styles.iter().filter(|style| style.selected).count()
    }
}
