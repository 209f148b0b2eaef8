//! Data profiling module for table analysis.
//!
//! This module provides:
//! - Type inference for columns (integer, float, string) from a leading sample
//! - Completeness over the full column

mod type_inference;

use crate::table::Table;
use crate::types::{ColumnType, DatasetProfile};
use std::collections::HashMap;
use tracing::debug;

pub(crate) use type_inference::infer_column_type;

/// Number of leading data rows used for type inference.
pub const DEFAULT_INFERENCE_SAMPLE: usize = 10;

/// Data profiler for analyzing table structure.
pub struct DataProfiler;

impl DataProfiler {
    /// Profile a table with the default inference sample (first 10 rows).
    pub fn profile_table(table: &Table) -> DatasetProfile {
        Self::profile_table_with(table, DEFAULT_INFERENCE_SAMPLE)
    }

    /// Profile a table, inferring types from the first `sample_size` data rows.
    ///
    /// Completeness always covers every data row. A table with no data rows
    /// reports 0% completeness for every column.
    pub fn profile_table_with(table: &Table, sample_size: usize) -> DatasetProfile {
        let total_rows = table.row_count();
        let mut column_types = HashMap::new();
        let mut completeness = HashMap::new();

        for (idx, name) in table.header().iter().enumerate() {
            let inferred = Self::infer_type(table, idx, sample_size);
            let complete = Self::completeness(table, idx);
            debug!(
                "Profiled column '{}': {} ({:.1}% complete)",
                name, inferred, complete
            );
            column_types.insert(name.clone(), inferred);
            completeness.insert(name.clone(), complete);
        }

        DatasetProfile {
            total_rows,
            total_columns: table.column_count(),
            column_names: table.header().to_vec(),
            column_types,
            completeness,
        }
    }

    fn infer_type(table: &Table, col: usize, sample_size: usize) -> ColumnType {
        let sample: Vec<&str> = (0..table.row_count().min(sample_size))
            .filter_map(|row| table.cell(row, col))
            .collect();
        infer_column_type(sample.as_slice())
    }

    fn completeness(table: &Table, col: usize) -> f64 {
        let total = table.row_count();
        if total == 0 {
            return 0.0;
        }

        let filled = (0..total)
            .filter(|&row| table.cell(row, col).is_some_and(|cell| !cell.is_empty()))
            .count();
        (filled as f64 / total as f64) * 100.0
    }
}
