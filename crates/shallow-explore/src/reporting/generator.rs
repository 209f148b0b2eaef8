use crate::analysis::{AnomalyReport, ColumnAnalysis, CorrelationResult, analyze_columns};
use crate::config::ExploreConfig;
use crate::error::Result;
use crate::filter::FilterCondition;
use crate::profiler::DataProfiler;
use crate::table::Table;
use crate::types::DatasetProfile;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

// ============================================================================
// Report Types
// ============================================================================

/// Everything one exploration run produced, ready for JSON output.
///
/// Use this for both stdout (`--json`) and file writing (`--emit-report`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExploreReport {
    // Metadata
    /// Timestamp when the report was generated
    pub generated_at: String,
    /// Path to the input file
    pub input_file: String,
    /// Row filter applied before analysis, if any
    pub filter: Option<FilterSpec>,

    /// Column types and completeness
    pub profile: DatasetProfile,
    /// Count of columns per inferred type
    pub type_counts: HashMap<String, usize>,

    /// Statistics or frequencies per column, in header order
    pub columns: Vec<ColumnAnalysis>,

    /// Requested correlation, if any
    pub correlation: Option<CorrelationResult>,
    /// Anomaly detection result, if requested
    pub anomalies: Option<AnomalyReport>,
    /// Z-score threshold used for `anomalies`
    pub anomaly_threshold: Option<f64>,

    /// Analyses that were requested but could not run
    pub warnings: Vec<String>,
}

/// A row filter as given on the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub column: String,
    pub condition: FilterCondition,
    pub value: String,
}

/// Inputs for [`ReportGenerator::build_report`].
pub struct ReportParams<'a> {
    pub input_file: &'a str,
    /// The table as analysed (after filtering)
    pub table: &'a Table,
    pub config: &'a ExploreConfig,
    pub filter: Option<FilterSpec>,
    pub correlation: Option<CorrelationResult>,
    pub anomalies: Option<AnomalyReport>,
    pub warnings: Vec<String>,
}

pub struct ReportGenerator {
    output_dir: PathBuf,
}

impl ReportGenerator {
    /// Create a new ReportGenerator writing into `output_dir`.
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Build a report from analysis results.
    ///
    /// Profiles and per-column analyses are computed here from the table;
    /// correlation and anomalies are passed in because they depend on user
    /// options.
    ///
    /// # Errors
    ///
    /// [`ExploreError::InvalidConfig`] if `config` does not validate.
    ///
    /// [`ExploreError::InvalidConfig`]: crate::ExploreError::InvalidConfig
    pub fn build_report(params: ReportParams<'_>) -> Result<ExploreReport> {
        let ReportParams {
            input_file,
            table,
            config,
            filter,
            correlation,
            anomalies,
            warnings,
        } = params;

        config.validate()?;

        let profile = DataProfiler::profile_table_with(table, config.inference_sample_size);
        let columns = analyze_columns(table, config.histogram_top_n)?;

        let mut type_counts: HashMap<String, usize> = HashMap::new();
        for column_type in profile.column_types.values() {
            *type_counts.entry(column_type.to_string()).or_insert(0) += 1;
        }

        let anomaly_threshold = anomalies.as_ref().map(|_| config.anomaly_threshold);
        debug!(
            "Built report for {} ({} columns, {} warnings)",
            input_file,
            columns.len(),
            warnings.len()
        );

        Ok(ExploreReport {
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            input_file: input_file.to_string(),
            filter,
            profile,
            type_counts,
            columns,
            correlation,
            anomalies,
            anomaly_threshold,
            warnings,
        })
    }

    /// Write a report to a JSON file.
    ///
    /// If `report_base_name` is "train", the file will be "train_report.json".
    pub fn write_report_to_file(
        &self,
        report: &ExploreReport,
        report_base_name: &str,
    ) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;

        let report_path = self
            .output_dir
            .join(format!("{}_report.json", report_base_name));
        let mut file = File::create(&report_path)?;
        file.write_all(serde_json::to_string_pretty(report)?.as_bytes())?;

        info!("Report saved: {}", report_path.display());

        Ok(report_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{CorrelationResult, detect};

    fn table() -> Table {
        Table::from_records(vec![
            vec!["x", "y", "label"],
            vec!["1", "2", "a"],
            vec!["2", "4", "b"],
            vec!["3", "6", "a"],
        ])
    }

    #[test]
    fn test_build_report() {
        let table = table();
        let config = ExploreConfig::default();
        let correlation = CorrelationResult::compute(&table, "x", "y").ok();
        let anomalies = Some(detect(&table, config.anomaly_threshold));

        let report = ReportGenerator::build_report(ReportParams {
            input_file: "data.csv",
            table: &table,
            config: &config,
            filter: None,
            correlation,
            anomalies,
            warnings: Vec::new(),
        })
        .unwrap();

        assert_eq!(report.input_file, "data.csv");
        assert_eq!(report.profile.total_rows, 3);
        assert_eq!(report.columns.len(), 3);
        assert_eq!(report.type_counts["integer"], 2);
        assert_eq!(report.type_counts["string"], 1);
        assert!(report.correlation.is_some());
        assert_eq!(report.anomaly_threshold, Some(3.0));
    }

    #[test]
    fn test_report_json_shape() {
        let table = table();
        let config = ExploreConfig::default();
        let report = ReportGenerator::build_report(ReportParams {
            input_file: "data.csv",
            table: &table,
            config: &config,
            filter: Some(FilterSpec {
                column: "label".to_string(),
                condition: FilterCondition::Equals,
                value: "a".to_string(),
            }),
            correlation: None,
            anomalies: None,
            warnings: vec!["Column 'z' not found in dataset".to_string()],
        })
        .unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["filter"]["condition"], "equals");
        assert_eq!(json["columns"][2]["kind"], "categorical");
        assert_eq!(json["profile"]["column_types"]["x"], "integer");
        assert!(json["anomalies"].is_null());
        assert_eq!(json["warnings"][0], "Column 'z' not found in dataset");
    }

    #[test]
    fn test_build_report_rejects_invalid_config() {
        let table = table();
        let config = ExploreConfig {
            histogram_top_n: 0,
            ..ExploreConfig::default()
        };
        let err = ReportGenerator::build_report(ReportParams {
            input_file: "data.csv",
            table: &table,
            config: &config,
            filter: None,
            correlation: None,
            anomalies: None,
            warnings: Vec::new(),
        })
        .unwrap_err();

        assert_eq!(err.error_code(), "INVALID_CONFIG");
    }

    #[test]
    fn test_write_report_to_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let generator = ReportGenerator::new(dir.path().join("outputs"));
        let table = table();
        let config = ExploreConfig::default();
        let report = ReportGenerator::build_report(ReportParams {
            input_file: "data.csv",
            table: &table,
            config: &config,
            filter: None,
            correlation: None,
            anomalies: None,
            warnings: Vec::new(),
        })
        .unwrap();

        let path = generator.write_report_to_file(&report, "data").unwrap();
        assert!(path.ends_with("data_report.json"));

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["input_file"], "data.csv");
    }
}
