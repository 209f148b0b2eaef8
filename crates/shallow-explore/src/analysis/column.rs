//! Per-column analysis: the default "statistics or histogram" pass.

use super::coercion::coerce;
use super::frequency::{FrequencyEntry, FrequencyTable};
use super::statistics::SummaryStats;
use crate::error::Result;
use crate::table::Table;
use serde::{Deserialize, Serialize};

/// Outcome of analysing one column.
///
/// A column is numeric as soon as one of its cells parses; otherwise it is
/// summarised by value frequencies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ColumnAnalysis {
    Numeric {
        name: String,
        stats: SummaryStats,
        /// Parsed values in row order, kept for plotting.
        #[serde(skip)]
        values: Vec<f64>,
    },
    Categorical {
        name: String,
        /// Number of distinct values, empty string included.
        distinct: usize,
        /// All entries, most frequent first.
        #[serde(skip)]
        ranked: Vec<FrequencyEntry>,
        /// Leading entries of `ranked`.
        top: Vec<FrequencyEntry>,
    },
}

impl ColumnAnalysis {
    pub fn name(&self) -> &str {
        match self {
            Self::Numeric { name, .. } | Self::Categorical { name, .. } => name,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric { .. })
    }
}

/// Classify and summarise one column of raw cells.
pub fn analyze_column(name: &str, values: Vec<String>, top_n: usize) -> Result<ColumnAnalysis> {
    let coerced = coerce(values);
    if coerced.is_numeric() {
        let stats = SummaryStats::compute(&coerced.numeric)?;
        return Ok(ColumnAnalysis::Numeric {
            name: name.to_string(),
            stats,
            values: coerced.numeric,
        });
    }

    let frequencies = FrequencyTable::count(coerced.original.as_slice());
    let ranked = frequencies.rank();
    Ok(ColumnAnalysis::Categorical {
        name: name.to_string(),
        distinct: frequencies.distinct(),
        top: ranked.iter().take(top_n).cloned().collect(),
        ranked,
    })
}

/// Analyse every column in header order.
pub fn analyze_columns(table: &Table, top_n: usize) -> Result<Vec<ColumnAnalysis>> {
    table
        .columns()
        .map(|(name, values)| analyze_column(name, values, top_n))
        .collect()
}
