//! Column type inference from a bounded sample.

use crate::types::ColumnType;

/// Infer a column type from sampled cells.
///
/// Empty cells are ignored. `Integer` wins if every remaining cell parses as
/// `i64`, then `Float` if every one parses as `f64`; a single non-numeric
/// token makes the column `String`. A sample with no non-empty cell is
/// `String` as well.
pub(crate) fn infer_column_type<S: AsRef<str>>(sample: &[S]) -> ColumnType {
    let values: Vec<&str> = sample
        .iter()
        .map(AsRef::as_ref)
        .filter(|cell| !cell.is_empty())
        .collect();

    if values.is_empty() {
        return ColumnType::String;
    }

    if values.iter().all(|cell| cell.parse::<i64>().is_ok()) {
        ColumnType::Integer
    } else if values.iter().all(|cell| cell.parse::<f64>().is_ok()) {
        ColumnType::Float
    } else {
        ColumnType::String
    }
}
