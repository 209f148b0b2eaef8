//! Numeric coercion of raw string columns.

use serde::{Deserialize, Serialize};

/// Result of coercing a column: the parsed numbers and the untouched input.
///
/// `numeric` only holds cells that parsed, so it can be shorter than
/// `original`. A column counts as numeric as soon as one cell parses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoercedColumn {
    pub numeric: Vec<f64>,
    pub original: Vec<String>,
}

impl CoercedColumn {
    /// True when at least one cell converted.
    pub fn is_numeric(&self) -> bool {
        !self.numeric.is_empty()
    }
}

/// Parse a single cell as a number: float first, then integer.
///
/// Empty and non-numeric cells return `None`.
pub fn parse_numeric(cell: &str) -> Option<f64> {
    if let Ok(value) = cell.parse::<f64>() {
        return Some(value);
    }
    cell.parse::<i64>().ok().map(|value| value as f64)
}

/// Split a column into its convertible numbers while keeping the original cells.
///
/// Never fails; unparseable cells are dropped from `numeric` without a
/// placeholder.
pub fn coerce(column: Vec<String>) -> CoercedColumn {
    let numeric = column.iter().filter_map(|cell| parse_numeric(cell)).collect();
    CoercedColumn {
        numeric,
        original: column,
    }
}
