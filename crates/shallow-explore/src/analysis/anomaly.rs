//! Z-score anomaly detection.
//!
//! Each column is scored on its own numeric cells. Standard deviation is the
//! population one (divides by `n`).

use super::coercion::parse_numeric;
use crate::table::Table;
use std::collections::BTreeMap;
use tracing::debug;

/// Default Z-score cut-off (three-sigma rule).
pub const DEFAULT_Z_THRESHOLD: f64 = 3.0;

/// Columns with fewer numeric observations are not scored.
pub const MIN_ANOMALY_OBSERVATIONS: usize = 5;

/// Column name to the ascending 1-based data-row indices flagged in it.
///
/// Columns without anomalies have no key at all.
pub type AnomalyReport = BTreeMap<String, Vec<usize>>;

/// Flag rows whose value lies more than `threshold` standard deviations from
/// the column mean.
///
/// Columns with fewer than [`MIN_ANOMALY_OBSERVATIONS`] numeric cells, or with
/// zero variance, are skipped silently.
pub fn detect(table: &Table, threshold: f64) -> AnomalyReport {
    let mut report = AnomalyReport::new();

    for (col, name) in table.header().iter().enumerate() {
        let observations: Vec<(usize, f64)> = (0..table.row_count())
            .filter_map(|row| {
                table
                    .cell(row, col)
                    .and_then(parse_numeric)
                    .map(|value| (row + 1, value))
            })
            .collect();

        let flagged = score_column(&observations, threshold);
        if flagged.is_empty() {
            continue;
        }

        debug!("Column '{}': {} anomalies", name, flagged.len());
        report.insert(name.clone(), flagged);
    }

    report
}

fn score_column(observations: &[(usize, f64)], threshold: f64) -> Vec<usize> {
    if observations.len() < MIN_ANOMALY_OBSERVATIONS {
        return Vec::new();
    }

    let n = observations.len() as f64;
    let mean = observations.iter().map(|(_, v)| v).sum::<f64>() / n;
    let variance = observations
        .iter()
        .map(|(_, v)| (v - mean).powi(2))
        .sum::<f64>()
        / n;
    let std_dev = variance.sqrt();

    if std_dev == 0.0 {
        return Vec::new();
    }

    observations
        .iter()
        .filter(|(_, v)| ((v - mean) / std_dev).abs() > threshold)
        .map(|(row, _)| *row)
        .collect()
}
