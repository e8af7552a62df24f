//! Column-oriented JSON batches
//!
//! EDGAR returns `filings.recent` as one object whose fields are parallel
//! arrays. `ColumnarBatch` turns that shape back into row objects without
//! knowing the column names up front.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

/// An object of parallel arrays, one per column
///
/// Fields that aren't arrays are dropped on construction.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "BTreeMap<String, Value>")]
pub struct ColumnarBatch {
    columns: BTreeMap<String, Vec<Value>>,
}

impl From<BTreeMap<String, Value>> for ColumnarBatch {
    fn from(fields: BTreeMap<String, Value>) -> Self {
        let columns = fields
            .into_iter()
            .filter_map(|(name, value)| match value {
                Value::Array(cells) => Some((name, cells)),
                _ => None,
            })
            .collect();
        Self { columns }
    }
}

impl ColumnarBatch {
    /// Length of the longest column
    pub fn len(&self) -> usize {
        self.columns.values().map(Vec::len).max().unwrap_or(0)
    }

    /// Whether every column is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Column names, sorted
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// One column's cells
    pub fn column(&self, name: &str) -> Option<&[Value]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// The first `min(limit, len())` rows
    ///
    /// A column shorter than the row index contributes nothing to that row.
    pub fn rows(&self, limit: usize) -> Vec<Map<String, Value>> {
        (0..self.len().min(limit))
            .map(|i| {
                self.columns
                    .iter()
                    .filter_map(|(name, cells)| cells.get(i).map(|cell| (name.clone(), cell.clone())))
                    .collect()
            })
            .collect()
    }

    /// Rows deserialized into `T`; rows that don't fit are skipped
    pub fn rows_as<T: DeserializeOwned>(&self, limit: usize) -> Vec<T> {
        self.rows(limit)
            .into_iter()
            .enumerate()
            .filter_map(|(i, row)| match serde_json::from_value(Value::Object(row)) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    debug!(row = i, error = %e, "skipping malformed row");
                    None
                }
            })
            .collect()
    }
}
