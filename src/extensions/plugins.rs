use serde::{Deserialize, Serialize};

use crate::core::CategoryKey;
use crate::interaction::BrushRect;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub records_len: usize,
    pub selected_len: usize,
    pub brush: Option<BrushRect>,
    pub hovered_category: Option<CategoryKey>,
}

/// Event stream exposed to plugins, one per handled gesture or render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    BrushChanged { brush: Option<BrushRect> },
    Cleared,
    LegendHovered { category: CategoryKey },
    LegendHoverEnded,
    Rendered,
}

/// Observer hook for host-side logic (linked views, analytics, logging).
///
/// Plugins run after both projection sinks, so they always see settled state.
/// They cannot mutate the plot.
pub trait ScatterPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &PluginEvent, context: &PluginContext);
}
