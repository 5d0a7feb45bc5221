mod config;
mod frame_builder;
mod gesture_controller;
mod plot;
mod plugin_dispatch;
mod snapshot;

pub use config::{LegendLayout, ScatterPlotConfig};
pub use plot::ScatterPlot;
pub use snapshot::{
    SELECTION_SNAPSHOT_JSON_SCHEMA_V1, SelectionSnapshot, SelectionSnapshotJsonContractV1,
};
