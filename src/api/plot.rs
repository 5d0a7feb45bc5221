use tracing::debug;

use crate::core::{CoordinateMapper, Dataset, Record};
use crate::error::ScatterResult;
use crate::extensions::ScatterPlugin;
use crate::interaction::{SelectionEngine, SelectionState};
use crate::render::Renderer;
use crate::sinks::{ListSink, PointStyle, PointStyleSink, SelectionListTarget};

use super::ScatterPlotConfig;

/// One interactive scatterplot: coordinate mapping, selection engine and both
/// projection sinks behind a single facade.
///
/// The selection list container is injected, so several plots can share one
/// by receiving clones of the same [`crate::sinks::SharedSelectionList`].
pub struct ScatterPlot<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ScatterPlotConfig,
    pub(super) engine: SelectionEngine,
    pub(super) point_sink: PointStyleSink,
    pub(super) list_sink: ListSink,
    pub(super) plugins: Vec<Box<dyn ScatterPlugin>>,
}

impl<R: Renderer> ScatterPlot<R> {
    /// Builds scales from the whole dataset and styles every point.
    ///
    /// The shared list is left alone until the first brush or clear gesture,
    /// so adding a plot never wipes what another plot rendered.
    pub fn new(
        renderer: R,
        dataset: Dataset,
        config: ScatterPlotConfig,
        list: impl SelectionListTarget + 'static,
    ) -> ScatterResult<Self> {
        config.validate()?;

        let area = config.plot_area();
        let mapper =
            CoordinateMapper::new(&dataset, config.fields.clone(), area, config.radius_range)?;
        let engine = SelectionEngine::new(dataset, mapper, area, config.opacity);
        let mut point_sink = PointStyleSink::default();
        point_sink.project(&engine);
        let list_sink = ListSink::new(config.list_template.clone(), Box::new(list));

        debug!(
            title = %config.title,
            records = engine.dataset().len(),
            categories = engine.mapper().categories().len(),
            "scatter plot created"
        );

        Ok(Self {
            renderer,
            config,
            engine,
            point_sink,
            list_sink,
            plugins: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ScatterPlotConfig {
        &self.config
    }

    #[must_use]
    pub fn engine(&self) -> &SelectionEngine {
        &self.engine
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        self.engine.dataset()
    }

    #[must_use]
    pub fn mapper(&self) -> &CoordinateMapper {
        self.engine.mapper()
    }

    #[must_use]
    pub fn selection_state(&self) -> &SelectionState {
        self.engine.state()
    }

    /// Selected records in dataset order.
    #[must_use]
    pub fn selected_records(&self) -> Vec<&Record> {
        self.engine.selected_records()
    }

    /// Styles as last pushed to the point styling sink.
    #[must_use]
    pub fn point_styles(&self) -> &[PointStyle] {
        self.point_sink.styles()
    }

    pub fn render(&mut self) -> ScatterResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)?;
        self.emit_rendered();
        Ok(())
    }

    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ScatterResult<()>
    where
        R: crate::render::CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.emit_rendered();
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
