//! Report generation module.
//!
//! [`ExploreReport`] gathers one run's results in a serializable form for:
//! - JSON output to stdout (`--json` CLI flag)
//! - JSON file output (`--emit-report` CLI flag)
//! - Programmatic access in library mode
//!
//! # Example
//!
//! ```rust,no_run
//! use shallow_explore::io::load_table;
//! use shallow_explore::reporting::{ReportGenerator, ReportParams};
//! use shallow_explore::ExploreConfig;
//! use std::path::PathBuf;
//!
//! let table = load_table("data/train.csv")?;
//! let config = ExploreConfig::default();
//! let report = ReportGenerator::build_report(ReportParams {
//!     input_file: "data/train.csv",
//!     table: &table,
//!     config: &config,
//!     filter: None,
//!     correlation: None,
//!     anomalies: None,
//!     warnings: Vec::new(),
//! })?;
//!
//! println!("{}", serde_json::to_string_pretty(&report)?);
//!
//! let generator = ReportGenerator::new(PathBuf::from("outputs"));
//! generator.write_report_to_file(&report, "train")?;
//! # Ok::<(), shallow_explore::ExploreError>(())
//! ```

mod generator;

pub use generator::{ExploreReport, FilterSpec, ReportGenerator, ReportParams};
