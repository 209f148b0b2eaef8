//! CSV loading into a [`Table`].
//!
//! Every column is read as text (no schema inference) so the analysis engine
//! sees the raw cells. Null cells, including those padded in for short lines,
//! come back as empty strings. Blank lines are not records, and bytes that are
//! not valid UTF-8 are replaced rather than rejected.

use crate::error::{ExploreError, Result, ResultExt};
use crate::table::Table;
use polars::io::csv::read::{CsvEncoding, CsvReadOptions};
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info};

/// Load a CSV file, retrying with looser parsing when the strict read fails.
///
/// # Errors
///
/// - [`ExploreError::EmptyDataset`] if the file has no header line (nothing
///   but whitespace).
/// - [`ExploreError::Io`] / [`ExploreError::Polars`] when every strategy fails.
pub fn load_table(path: impl AsRef<Path>) -> Result<Table> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let content = strip_blank_lines(&String::from_utf8_lossy(&bytes));
    if content.is_empty() {
        return Err(ExploreError::EmptyDataset);
    }

    let df = load_csv_with_fallbacks(&content)
        .context(format!("Parsing {}", path.display()))?;
    info!("Dataset loaded: {} rows x {} columns", df.height(), df.width());
    table_from_dataframe(&df).context(format!("Reading {}", path.display()))
}

/// Convert a `DataFrame` into a string table, nulls as `""`.
pub fn table_from_dataframe(df: &DataFrame) -> Result<Table> {
    let header: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();

    let mut rows: Vec<Vec<String>> = vec![Vec::with_capacity(header.len()); df.height()];
    for column in df.get_columns() {
        let series = column
            .as_materialized_series()
            .cast(&DataType::String)
            .context(format!("Casting column '{}' to text", column.name()))?;
        let values = series.str()?;
        for (row, value) in values.into_iter().enumerate() {
            rows[row].push(value.unwrap_or_default().to_string());
        }
    }

    Ok(Table::new(header, rows))
}

fn text_options(quote_char: Option<u8>) -> CsvReadOptions {
    CsvReadOptions::default()
        .with_infer_schema_length(Some(0))
        .with_has_header(true)
        .with_parse_options(
            CsvParseOptions::default()
                .with_quote_char(quote_char)
                .with_encoding(CsvEncoding::LossyUtf8)
                .with_truncate_ragged_lines(true),
        )
}

fn read_csv(content: String, quote_char: Option<u8>) -> PolarsResult<DataFrame> {
    text_options(quote_char)
        .into_reader_with_file_handle(Cursor::new(content))
        .finish()
}

fn load_csv_with_fallbacks(content: &str) -> PolarsResult<DataFrame> {
    // Strategy 1: standard loading with quote handling
    match read_csv(content.to_string(), Some(b'"')) {
        Ok(df) => return Ok(df),
        Err(e) => debug!("Standard loading failed: {}", e),
    }

    // Strategy 2: without quote handling
    match read_csv(content.to_string(), None) {
        Ok(df) => return Ok(df),
        Err(e) => debug!("Loading without quotes failed: {}", e),
    }

    // Strategy 3: pre-clean content
    read_csv(clean_csv_content(content), Some(b'"'))
}

/// Drop lines that hold nothing but whitespace.
fn strip_blank_lines(content: &str) -> String {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collapse doubled quotes.
fn clean_csv_content(content: &str) -> String {
    content.replace("\"\"\"", "\"").replace("\"\"", "\"")
}
