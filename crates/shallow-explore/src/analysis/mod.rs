//! The tabular analysis engine.
//!
//! Every function here is a pure transformation of an in-memory [`Table`] or
//! column: no I/O, no shared state, same input gives the same output (apart
//! from the documented tie order in frequency ranking).
//!
//! - [`coercion`]: string cells to numbers
//! - [`statistics`]: min/max/mean/median
//! - [`frequency`]: value counts and histogram text
//! - [`correlation`]: Pearson coefficient between two columns
//! - [`anomaly`]: Z-score outliers per column
//! - [`column`]: the default per-column pass combining the above
//!
//! [`Table`]: crate::Table

pub mod anomaly;
pub mod coercion;
pub mod column;
pub mod correlation;
pub mod frequency;
pub mod statistics;

pub use anomaly::{AnomalyReport, DEFAULT_Z_THRESHOLD, detect};
pub use coercion::{CoercedColumn, coerce, parse_numeric};
pub use column::{ColumnAnalysis, analyze_column, analyze_columns};
pub use correlation::{
    CorrelationDirection, CorrelationInterpretation, CorrelationResult, CorrelationStrength,
    correlate, pearson,
};
pub use frequency::{
    FrequencyEntry, FrequencyTable, render_histogram, render_histogram_with, sort_by_frequency,
};
pub use statistics::SummaryStats;
