//! Projection sinks: renderers of derived selection state that own none of it.
//!
//! Both sinks are push-driven. The plot facade calls them after every
//! handler, including no-op ones, and each rebuilds its output from scratch.

mod list;
mod point_style;

pub use list::{ListItemTemplate, ListSink, SelectionListTarget, SharedSelectionList};
pub use point_style::{PointStyle, PointStyleSink};
