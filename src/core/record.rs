use std::fmt;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{ScatterError, ScatterResult};

/// One raw field value as delivered by the data-loading collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Numeric coercion used by the coordinate mapper.
    ///
    /// Text is trimmed and parsed; blank text, `null` and non-finite results
    /// are not representable.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            Self::Null => return None,
            Self::Bool(flag) => f64::from(u8::from(*flag)),
            Self::Number(value) => *value,
            Self::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok()?
            }
        };
        value.is_finite().then_some(value)
    }

    #[must_use]
    pub fn category_key(&self) -> Option<CategoryKey> {
        match self {
            Self::Null => None,
            Self::Bool(flag) => Some(CategoryKey::Text(flag.to_string())),
            Self::Number(value) => Some(CategoryKey::Number(OrderedFloat(*value))),
            Self::Text(text) => Some(CategoryKey::Text(text.clone())),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("-"),
            Self::Bool(flag) => write!(f, "{flag}"),
            Self::Number(value) => write_number(f, *value),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Hashable identity of a categorical value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryKey {
    Number(OrderedFloat<f64>),
    Text(String),
}

impl CategoryKey {
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write_number(f, value.into_inner()),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for CategoryKey {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        write!(f, "{}", value as i64)
    } else {
        write!(f, "{value}")
    }
}

/// One data point. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub index: usize,
    pub fields: IndexMap<String, FieldValue>,
}

impl Record {
    #[must_use]
    pub fn new(index: usize, fields: IndexMap<String, FieldValue>) -> Self {
        Self { index, fields }
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    #[must_use]
    pub fn number(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(FieldValue::as_number)
    }

    #[must_use]
    pub fn category(&self, field: &str) -> Option<CategoryKey> {
        self.get(field).and_then(FieldValue::category_key)
    }
}

/// Ordered, fixed-length sequence of records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Builds a dataset from flat rows; `index` is the row position.
    #[must_use]
    pub fn from_rows(rows: Vec<IndexMap<String, FieldValue>>) -> Self {
        let records = rows
            .into_iter()
            .enumerate()
            .map(|(index, fields)| Record::new(index, fields))
            .collect();
        Self { records }
    }

    /// Parses a JSON array of flat objects.
    pub fn from_json_str(input: &str) -> ScatterResult<Self> {
        let rows: Vec<IndexMap<String, FieldValue>> = serde_json::from_str(input)
            .map_err(|e| ScatterError::Serialization(format!("failed to parse dataset: {e}")))?;
        Ok(Self::from_rows(rows))
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `[min, max]` of a numeric field, skipping unrepresentable values.
    #[must_use]
    pub fn extent(&self, field: &str) -> Option<(f64, f64)> {
        self.records
            .iter()
            .filter_map(|record| record.number(field))
            .fold(None, |acc, value| match acc {
                None => Some((value, value)),
                Some((min, max)) => Some((min.min(value), max.max(value))),
            })
    }
}
