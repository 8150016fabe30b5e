//! Cleaned-table output.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use csv::{QuoteStyle, WriterBuilder};
use tracing::info;

use caserec_model::Table;

/// Write a cleaned table with the given delimiter.
///
/// Every field is quoted so downstream loaders never re-split cells that
/// contain the delimiter.
pub fn write_table(table: &Table, path: &Path, delimiter: char) -> Result<()> {
    if !delimiter.is_ascii() {
        return Err(anyhow!("delimiter must be ASCII: {delimiter:?}"));
    }
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter as u8)
        .quote_style(QuoteStyle::Always)
        .from_path(path)
        .with_context(|| format!("create output file: {}", path.display()))?;

    writer
        .write_record(&table.headers)
        .with_context(|| format!("write header: {}", path.display()))?;
    for row in &table.rows {
        writer
            .write_record(row)
            .with_context(|| format!("write row: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush output file: {}", path.display()))?;

    info!(path = %path.display(), rows = table.rows.len(), "cleaned table written");
    Ok(())
}
