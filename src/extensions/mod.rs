//! Optional hooks that sit beside the core selection path.

pub mod plugins;

pub use plugins::{PluginContext, PluginEvent, ScatterPlugin};
