//! JSON export of table rows.

use crate::error::Result;
use crate::table::Table;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::info;

/// One JSON object per data row, keyed by header name.
///
/// Cells missing from short rows are written as `""`.
pub fn rows_to_json(table: &Table) -> Value {
    let rows = (0..table.row_count())
        .map(|row| {
            let object: Map<String, Value> = table
                .header()
                .iter()
                .enumerate()
                .map(|(col, name)| {
                    let cell = table.cell(row, col).unwrap_or_default();
                    (name.clone(), Value::String(cell.to_string()))
                })
                .collect();
            Value::Object(object)
        })
        .collect();
    Value::Array(rows)
}

/// Write [`rows_to_json`] to `path`, pretty-printed.
pub fn write_rows_json(table: &Table, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &rows_to_json(table))?;
    info!("Exported {} rows to {}", table.row_count(), path.display());
    Ok(())
}
