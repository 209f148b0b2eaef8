//! Pearson correlation between two columns.

use super::coercion::parse_numeric;
use crate::error::{ExploreError, Result};
use crate::table::Table;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Minimum number of paired observations for a coefficient.
pub const MIN_CORRELATION_PAIRS: usize = 2;

/// Pearson coefficient between two named columns.
///
/// Only rows where both cells parse as numbers are used; the two sides are
/// dropped together so the pairs stay aligned. A column without variance
/// yields `0.0`.
///
/// # Errors
///
/// - [`ExploreError::ColumnNotFound`] if either column is absent.
/// - [`ExploreError::InsufficientData`] with fewer than two usable pairs.
pub fn correlate(table: &Table, column_a: &str, column_b: &str) -> Result<f64> {
    CorrelationResult::compute(table, column_a, column_b).map(|result| result.coefficient)
}

/// Coefficient plus the context needed to report it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    pub column_a: String,
    pub column_b: String,
    pub coefficient: f64,
    pub pairs: usize,
    pub interpretation: String,
}

impl CorrelationResult {
    /// Same as [`correlate`], keeping the pair count and an interpretation.
    pub fn compute(table: &Table, column_a: &str, column_b: &str) -> Result<Self> {
        let (xs, ys) = paired_values(table, column_a, column_b)?;
        if xs.len() < MIN_CORRELATION_PAIRS {
            return Err(ExploreError::InsufficientData {
                required: MIN_CORRELATION_PAIRS,
                found: xs.len(),
            });
        }

        let coefficient = pearson(&xs, &ys);
        debug!(
            "Correlation {} ~ {}: r = {:.4} over {} pairs",
            column_a,
            column_b,
            coefficient,
            xs.len()
        );

        Ok(Self {
            column_a: column_a.to_string(),
            column_b: column_b.to_string(),
            coefficient,
            pairs: xs.len(),
            interpretation: CorrelationInterpretation::from_coefficient(coefficient).to_string(),
        })
    }
}

fn paired_values(table: &Table, column_a: &str, column_b: &str) -> Result<(Vec<f64>, Vec<f64>)> {
    let idx_a = table.require_column(column_a)?;
    let idx_b = table.require_column(column_b)?;

    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for row in 0..table.row_count() {
        let a = table.cell(row, idx_a).and_then(parse_numeric);
        let b = table.cell(row, idx_b).and_then(parse_numeric);
        if let (Some(a), Some(b)) = (a, b) {
            xs.push(a);
            ys.push(b);
        }
    }
    Ok((xs, ys))
}

/// Pearson coefficient of two equal-length, non-empty slices.
///
/// Returns `0.0` when either side has zero variance.
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut variance_x = 0.0;
    let mut variance_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        variance_x += dx * dx;
        variance_y += dy * dy;
    }

    if variance_x == 0.0 || variance_y == 0.0 {
        return 0.0;
    }
    covariance / (variance_x * variance_y).sqrt()
}

/// Strength band of `|r|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorrelationStrength {
    VeryStrong,
    Strong,
    Moderate,
    Weak,
    Negligible,
}

impl fmt::Display for CorrelationStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::VeryStrong => "very strong",
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Weak => "weak",
            Self::Negligible => "little to no relationship",
        };
        f.write_str(label)
    }
}

/// Sign of the coefficient; zero counts as positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorrelationDirection {
    Positive,
    Negative,
}

impl fmt::Display for CorrelationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => f.write_str("positive/direct"),
            Self::Negative => f.write_str("negative/inverse"),
        }
    }
}

/// Human-readable reading of a coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrelationInterpretation {
    pub strength: CorrelationStrength,
    pub direction: CorrelationDirection,
}

impl CorrelationInterpretation {
    pub fn from_coefficient(r: f64) -> Self {
        let magnitude = r.abs();
        let strength = if magnitude >= 0.9 {
            CorrelationStrength::VeryStrong
        } else if magnitude >= 0.7 {
            CorrelationStrength::Strong
        } else if magnitude >= 0.5 {
            CorrelationStrength::Moderate
        } else if magnitude >= 0.3 {
            CorrelationStrength::Weak
        } else {
            CorrelationStrength::Negligible
        };
        let direction = if r >= 0.0 {
            CorrelationDirection::Positive
        } else {
            CorrelationDirection::Negative
        };
        Self {
            strength,
            direction,
        }
    }
}

impl fmt::Display for CorrelationInterpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.strength, self.direction)
    }
}
