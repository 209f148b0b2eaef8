//! In-memory table of raw string cells.
//!
//! The header defines the column count. Data rows may be shorter than the
//! header; a missing cell reads as absent (`None`) through [`Table::cell`] and
//! as an empty string through [`Table::column`].

use crate::error::{ExploreError, Result};
use serde::{Deserialize, Serialize};

/// A header row plus ordered data rows, all cells kept as strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table from a header and data rows.
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { header, rows }
    }

    /// Build a table from parsed CSV records, the first record being the header.
    ///
    /// No records at all gives an empty table (no columns, no rows).
    ///
    /// ```rust
    /// use shallow_explore::Table;
    ///
    /// let table = Table::from_records([["a", "b"], ["1", "x"]]);
    /// assert_eq!(table.header(), ["a", "b"]);
    /// assert_eq!(table.row_count(), 1);
    /// ```
    pub fn from_records<R, S>(records: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut records = records
            .into_iter()
            .map(|record| record.into_iter().map(Into::into).collect::<Vec<String>>());

        let header = records.next().unwrap_or_default();
        let rows = records.collect();
        Self { header, rows }
    }

    /// Column names, in file order.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Data rows (header excluded).
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, as defined by the header.
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column in the header.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }

    /// Position of a column, failing with `ColumnNotFound` when absent.
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| ExploreError::ColumnNotFound(name.to_string()))
    }

    /// A single cell; `None` when the row is shorter than `col`.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
    }

    /// Project one column across all data rows. Absent cells become `""`.
    pub fn column(&self, col: usize) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.get(col).cloned().unwrap_or_default())
            .collect()
    }

    /// Iterate `(name, values)` for every column in header order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, Vec<String>)> + '_ {
        self.header
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.as_str(), self.column(idx)))
    }

    /// A table with the same header and only the given rows.
    pub(crate) fn with_rows(&self, rows: Vec<Vec<String>>) -> Self {
        Self {
            header: self.header.clone(),
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::from_records(vec![
            vec!["a", "b", "c"],
            vec!["1", "x", "p"],
            vec!["2"],
            vec!["3", "", "q"],
        ])
    }

    #[test]
    fn test_from_records_splits_header() {
        let table = sample();
        assert_eq!(table.header(), ["a", "b", "c"]);
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 3);
    }

    #[test]
    fn test_from_records_empty() {
        let table = Table::from_records(Vec::<Vec<String>>::new());
        assert_eq!(table.column_count(), 0);
        assert!(table.is_empty());
    }

    #[test]
    fn test_ragged_cell_is_absent() {
        let table = sample();
        assert_eq!(table.cell(1, 0), Some("2"));
        assert_eq!(table.cell(1, 1), None);
        assert_eq!(table.cell(2, 1), Some(""));
        assert_eq!(table.cell(9, 0), None);
    }

    #[test]
    fn test_column_projection_pads_ragged_rows() {
        let table = sample();
        assert_eq!(table.column(1), vec!["x", "", ""]);
        assert_eq!(table.column(2), vec!["p", "", "q"]);
    }

    #[test]
    fn test_require_column_missing() {
        let table = sample();
        assert_eq!(table.require_column("b").unwrap(), 1);
        let err = table.require_column("zzz").unwrap_err();
        assert!(matches!(err, ExploreError::ColumnNotFound(name) if name == "zzz"));
    }

    #[test]
    fn test_columns_iterates_in_header_order() {
        let table = sample();
        let names: Vec<&str> = table.columns().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
