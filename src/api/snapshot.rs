use serde::{Deserialize, Serialize};

use crate::core::CategoryKey;
use crate::error::{ScatterError, ScatterResult};
use crate::interaction::BrushRect;
use crate::render::Renderer;

use super::ScatterPlot;

pub const SELECTION_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable view of a plot's selection, for diagnostics and linked views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionSnapshot {
    pub records_len: usize,
    pub brush: Option<BrushRect>,
    pub hovered_category: Option<CategoryKey>,
    pub selected_indices: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: SelectionSnapshot,
}

impl SelectionSnapshot {
    pub fn to_json_pretty(&self) -> ScatterResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ScatterError::Serialization(format!("failed to serialize selection snapshot: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ScatterResult<String> {
        let payload = SelectionSnapshotJsonContractV1 {
            schema_version: SELECTION_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ScatterError::Serialization(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts both the bare snapshot and the versioned contract.
    pub fn from_json_compat_str(input: &str) -> ScatterResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<SelectionSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: SelectionSnapshotJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                ScatterError::Serialization(format!("failed to parse snapshot json payload: {e}"))
            })?;
        if payload.schema_version != SELECTION_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ScatterError::Serialization(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> ScatterPlot<R> {
    #[must_use]
    pub fn snapshot(&self) -> SelectionSnapshot {
        let state = self.engine.state();
        SelectionSnapshot {
            records_len: self.engine.dataset().len(),
            brush: state.brush,
            hovered_category: state.hovered_category.clone(),
            selected_indices: self.engine.selected_indices(),
        }
    }
}
