use tracing::warn;

use crate::error::{ScatterError, ScatterResult};
use crate::extensions::{PluginContext, PluginEvent, ScatterPlugin};
use crate::interaction::SelectionEvent;
use crate::render::Renderer;

use super::ScatterPlot;

impl From<SelectionEvent> for PluginEvent {
    fn from(event: SelectionEvent) -> Self {
        match event {
            SelectionEvent::BrushChanged { brush } => Self::BrushChanged { brush },
            SelectionEvent::Cleared => Self::Cleared,
            SelectionEvent::LegendHovered { category } => Self::LegendHovered { category },
            SelectionEvent::LegendHoverEnded => Self::LegendHoverEnded,
        }
    }
}

impl<R: Renderer> ScatterPlot<R> {
    /// Registers an observer; ids must be unique per plot.
    pub fn register_plugin(&mut self, plugin: Box<dyn ScatterPlugin>) -> ScatterResult<()> {
        if self.plugins.iter().any(|p| p.id() == plugin.id()) {
            warn!(id = plugin.id(), "duplicate plugin id rejected");
            return Err(ScatterError::InvalidData(format!(
                "plugin id `{}` is already registered",
                plugin.id()
            )));
        }
        self.plugins.push(plugin);
        Ok(())
    }

    /// Returns whether a plugin with `id` was removed.
    pub fn unregister_plugin(&mut self, id: &str) -> bool {
        let before = self.plugins.len();
        self.plugins.retain(|plugin| plugin.id() != id);
        self.plugins.len() != before
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    pub(super) fn plugin_context(&self) -> PluginContext {
        let state = self.engine.state();
        PluginContext {
            records_len: self.engine.dataset().len(),
            selected_len: self.point_sink.selected_count(),
            brush: state.brush,
            hovered_category: state.hovered_category.clone(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(&event, &context);
        }
    }

    pub(super) fn emit_rendered(&mut self) {
        self.emit_plugin_event(PluginEvent::Rendered);
    }
}
