//! scatter-brush: brushable, legend-linked scatterplot engine.
//!
//! Records are mapped to pixel geometry once, a selection engine applies
//! brush, clear and legend-hover gestures, and two projection sinks (point
//! styling and a shared text list) are pushed after every gesture. Drawing is
//! delegated to a [`render::Renderer`] backend through a plain `RenderFrame`.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod sinks;
pub mod telemetry;

pub use api::{ScatterPlot, ScatterPlotConfig};
pub use error::{ScatterError, ScatterResult};
