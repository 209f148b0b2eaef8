//! Row selection by a predicate on one column.

use crate::analysis::parse_numeric;
use crate::error::ExploreError;
use crate::table::Table;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Comparison applied between a cell and the target value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterCondition {
    /// Exact string match
    Equals,
    /// Substring match
    Contains,
    StartsWith,
    EndsWith,
    /// Numeric comparison; rows that do not parse are excluded
    GreaterThan,
    /// Numeric comparison; rows that do not parse are excluded
    LessThan,
}

impl FilterCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::Contains => "contains",
            Self::StartsWith => "starts_with",
            Self::EndsWith => "ends_with",
            Self::GreaterThan => "greater_than",
            Self::LessThan => "less_than",
        }
    }

    /// Whether a single cell satisfies the condition against `target`.
    pub fn matches(&self, cell: &str, target: &str) -> bool {
        match self {
            Self::Equals => cell == target,
            Self::Contains => cell.contains(target),
            Self::StartsWith => cell.starts_with(target),
            Self::EndsWith => cell.ends_with(target),
            Self::GreaterThan => numeric_pair(cell, target).is_some_and(|(c, t)| c > t),
            Self::LessThan => numeric_pair(cell, target).is_some_and(|(c, t)| c < t),
        }
    }
}

fn numeric_pair(cell: &str, target: &str) -> Option<(f64, f64)> {
    Some((parse_numeric(cell)?, parse_numeric(target)?))
}

impl fmt::Display for FilterCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterCondition {
    type Err = ExploreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equals" => Ok(Self::Equals),
            "contains" => Ok(Self::Contains),
            "starts_with" => Ok(Self::StartsWith),
            "ends_with" => Ok(Self::EndsWith),
            "greater_than" => Ok(Self::GreaterThan),
            "less_than" => Ok(Self::LessThan),
            other => Err(ExploreError::InvalidInput(format!(
                "unknown filter condition '{other}'"
            ))),
        }
    }
}

/// Selects rows of a table by a condition on one column.
pub struct RowFilter;

impl RowFilter {
    /// Filter using a condition given by name.
    ///
    /// An unrecognized condition matches nothing, so the result is the header
    /// alone.
    pub fn apply(table: &Table, column: &str, condition: &str, value: &str) -> Table {
        match condition.parse::<FilterCondition>() {
            Ok(condition) => Self::apply_condition(table, column, condition, value),
            Err(e) => {
                warn!("{}; no rows selected", e);
                table.with_rows(Vec::new())
            }
        }
    }

    /// Keep the rows whose `column` cell satisfies `condition`.
    ///
    /// The header is always kept. An absent column gives an empty result, and
    /// rows too short to have the cell never match.
    pub fn apply_condition(
        table: &Table,
        column: &str,
        condition: FilterCondition,
        value: &str,
    ) -> Table {
        let Some(idx) = table.column_index(column) else {
            warn!("Filter column '{}' not found; no rows selected", column);
            return table.with_rows(Vec::new());
        };

        let rows: Vec<Vec<String>> = table
            .rows()
            .iter()
            .filter(|row| {
                row.get(idx)
                    .is_some_and(|cell| condition.matches(cell, value))
            })
            .cloned()
            .collect();

        debug!(
            "Filter {} {} '{}' kept {} of {} rows",
            column,
            condition,
            value,
            rows.len(),
            table.row_count()
        );
        table.with_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        Table::from_records(vec![
            vec!["city", "pop"],
            vec!["Boston", "650"],
            vec!["Austin", "960"],
            vec!["Bost"],
            vec!["Denver", "n/a"],
            vec!["Boston", "1e3"],
        ])
    }

    fn cities(t: &Table) -> Vec<String> {
        t.column(0)
    }

    // ==================== string conditions ====================

    #[test]
    fn test_equals() {
        let t = table();
        let result = RowFilter::apply(&t, "city", "equals", "Boston");
        assert_eq!(result.header(), t.header());
        assert_eq!(cities(&result), vec!["Boston", "Boston"]);
        assert!(result.row_count() <= t.row_count());
    }

    #[test]
    fn test_contains() {
        let result = RowFilter::apply(&table(), "city", "contains", "st");
        assert_eq!(cities(&result), vec!["Boston", "Austin", "Bost", "Boston"]);
    }

    #[test]
    fn test_starts_and_ends_with() {
        let result = RowFilter::apply(&table(), "city", "starts_with", "Bo");
        assert_eq!(result.row_count(), 3);

        let result = RowFilter::apply(&table(), "city", "ends_with", "ver");
        assert_eq!(cities(&result), vec!["Denver"]);
    }

    // ==================== numeric conditions ====================

    #[test]
    fn test_greater_than_skips_unparseable_and_short_rows() {
        let result = RowFilter::apply(&table(), "pop", "greater_than", "700");
        assert_eq!(cities(&result), vec!["Austin", "Boston"]);
    }

    #[test]
    fn test_less_than() {
        let result = RowFilter::apply(&table(), "pop", "less_than", "700");
        assert_eq!(cities(&result), vec!["Boston"]);
    }

    #[test]
    fn test_non_numeric_target_matches_nothing() {
        let result = RowFilter::apply(&table(), "pop", "greater_than", "lots");
        assert!(result.is_empty());
    }

    // ==================== degenerate inputs ====================

    #[test]
    fn test_unknown_condition_excludes_all_rows() {
        let t = table();
        let result = RowFilter::apply(&t, "city", "like", "Boston");
        assert!(result.is_empty());
        assert_eq!(result.header(), t.header());
    }

    #[test]
    fn test_missing_column_returns_header_only() {
        let t = table();
        let result = RowFilter::apply(&t, "country", "equals", "US");
        assert!(result.is_empty());
        assert_eq!(result.header(), t.header());
    }

    #[test]
    fn test_condition_round_trip_names() {
        for name in [
            "equals",
            "contains",
            "starts_with",
            "ends_with",
            "greater_than",
            "less_than",
        ] {
            let condition: FilterCondition = name.parse().unwrap();
            assert_eq!(condition.to_string(), name);
        }
        assert!("EQUALS".parse::<FilterCondition>().is_err());
    }
}
