use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Declared type of a column, inferred from a sample of its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Integer,
    Float,
    String,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => f.write_str("integer"),
            Self::Float => f.write_str("float"),
            Self::String => f.write_str("string"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub name: String,
    pub inferred_type: ColumnType,
    /// Non-empty cells as a percentage of all data rows (0 - 100).
    pub completeness: f64,
}

/// Whole-table summary produced by the profiler.
///
/// `column_types` and `completeness` are keyed by column name; use
/// [`DatasetProfile::columns`] to walk them in header order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetProfile {
    pub total_rows: usize,
    pub total_columns: usize,
    pub column_names: Vec<String>,
    pub column_types: HashMap<String, ColumnType>,
    pub completeness: HashMap<String, f64>,
}

impl DatasetProfile {
    /// Per-column profiles in header order.
    pub fn columns(&self) -> Vec<ColumnProfile> {
        self.column_names
            .iter()
            .map(|name| ColumnProfile {
                name: name.clone(),
                inferred_type: self
                    .column_types
                    .get(name)
                    .copied()
                    .unwrap_or(ColumnType::String),
                completeness: self.completeness.get(name).copied().unwrap_or(0.0),
            })
            .collect()
    }
}
