//! Selection state machine.
//!
//! Two orthogonal states layered on one plot: an optional brush rectangle
//! (drives "selected" membership) and an optional hovered legend category
//! (drives opacity only). Both start empty; neither is ever terminal.

mod brush;
mod selection;

pub use brush::BrushRect;
pub use selection::{OpacityConfig, SelectionEngine, SelectionEvent, SelectionState};
