//! Summary statistics for numeric columns.

use crate::error::{ExploreError, Result};
use serde::{Deserialize, Serialize};

/// Min, max, mean and median of a numeric column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub min: f64,
    pub max: f64,
    /// Arithmetic mean rounded to the nearest integer.
    pub mean: f64,
    pub median: f64,
    pub count: usize,
}

impl SummaryStats {
    /// Compute summary statistics over a non-empty slice.
    ///
    /// The input is not reordered; the median is taken from a sorted copy.
    ///
    /// # Errors
    ///
    /// [`ExploreError::InvalidInput`] if `values` is empty.
    pub fn compute(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(ExploreError::InvalidInput(
                "summary statistics need at least one numeric value".to_string(),
            ));
        }

        let (min, max) = min_max(values);
        Ok(Self {
            min,
            max,
            mean: rounded_mean(values),
            median: median(values),
            count: values.len(),
        })
    }

    /// Caption block shown under a numeric plot.
    pub fn caption(&self) -> String {
        format!(
            "(The plot is a general trend of all points) \n\n   Min: {:.2}\n   Max: {:.2}\n  Mean: {:.2}\nMedian: {:.2}\n",
            self.min, self.max, self.mean, self.median
        )
    }
}

/// Single pass over the values.
fn min_max(values: &[f64]) -> (f64, f64) {
    let mut min = values[0];
    let mut max = values[0];
    for &value in values {
        if max < value {
            max = value;
        }
        if min > value {
            min = value;
        }
    }
    (min, max)
}

fn rounded_mean(values: &[f64]) -> f64 {
    let total: f64 = values.iter().sum();
    (total / values.len() as f64).round()
}

fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 != 0 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}
