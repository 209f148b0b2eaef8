//! Shallow Explore Library
//!
//! Quick exploratory data analysis of CSV files, built with Rust and Polars.
//!
//! # Overview
//!
//! A CSV is loaded as an in-memory table of strings, and every analysis works
//! on those raw cells:
//!
//! - **Type Coercion**: numeric-looking cells become numbers, the rest stay text
//! - **Summary Statistics**: min, max, mean and median of numeric columns
//! - **Frequency Analysis**: value counts and a text histogram for categorical columns
//! - **Profiling**: inferred type and completeness per column
//! - **Row Filtering**: keep rows matching a condition on one column
//! - **Correlation**: Pearson coefficient between two columns
//! - **Anomaly Detection**: Z-score outliers per numeric column
//!
//! # Quick Start
//!
//! ```rust
//! use shallow_explore::{RowFilter, Table, analyze_columns, correlate};
//!
//! let table = Table::from_records(vec![
//!     vec!["city", "temp", "rain"],
//!     vec!["Oslo", "4", "10"],
//!     vec!["Rome", "18", "3"],
//!     vec!["Oslo", "6", "8"],
//! ]);
//!
//! let oslo = RowFilter::apply(&table, "city", "equals", "Oslo");
//! assert_eq!(oslo.row_count(), 2);
//!
//! let columns = analyze_columns(&table, 10)?;
//! assert!(columns[1].is_numeric());
//!
//! let r = correlate(&table, "temp", "rain")?;
//! assert!(r < 0.0);
//! # Ok::<(), shallow_explore::ExploreError>(())
//! ```
//!
//! # Configuration
//!
//! Use [`ExploreConfig`] to tune the analyses and rendering:
//!
//! ```rust
//! use shallow_explore::{ExploreConfig, Theme};
//!
//! let config = ExploreConfig::builder()
//!     .anomaly_threshold(2.0)
//!     .histogram_top_n(5)
//!     .theme(Theme::Dark)
//!     .build()?;
//! # Ok::<(), shallow_explore::ConfigValidationError>(())
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod io;
pub mod profiler;
pub mod render;
pub mod reporting;
pub mod table;
pub mod types;

// Re-exports for convenient access
pub use analysis::{
    AnomalyReport, CoercedColumn, ColumnAnalysis, CorrelationDirection,
    CorrelationInterpretation, CorrelationResult, CorrelationStrength, DEFAULT_Z_THRESHOLD,
    FrequencyEntry, FrequencyTable, SummaryStats, analyze_column, analyze_columns, coerce,
    correlate, detect, parse_numeric, pearson, render_histogram, render_histogram_with,
    sort_by_frequency,
};
pub use config::{ConfigValidationError, ExploreConfig, ExploreConfigBuilder, Theme};
pub use error::{ExploreError, Result as ExploreResult, ResultExt};
pub use filter::{FilterCondition, RowFilter};
pub use profiler::DataProfiler;
pub use reporting::{ExploreReport, FilterSpec, ReportGenerator, ReportParams};
pub use table::Table;
pub use types::{ColumnProfile, ColumnType, DatasetProfile};
