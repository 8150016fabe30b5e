//! Delimited-file reading.
//!
//! Rows are returned exactly as tokenized: short or long rows are NOT
//! padded or truncated here, the row engine re-checks every row's width
//! against the header and reports mismatches as structural errors.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use csv::ReaderBuilder;
use tracing::debug;

use caserec_model::Table;

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim_matches('\u{feff}').to_string()
}

/// Read a delimited export into memory.
///
/// The first non-blank record is the header; fully blank records are
/// skipped. Quoting follows the usual `"` convention.
pub fn read_table(path: &Path, delimiter: char) -> Result<Table> {
    if !delimiter.is_ascii() {
        return Err(anyhow!("delimiter must be ASCII: {delimiter:?}"));
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter as u8)
        .from_path(path)
        .with_context(|| format!("read table: {}", path.display()))?;

    let mut headers: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        match &headers {
            None => headers = Some(record.iter().map(normalize_header).collect()),
            Some(_) => rows.push(record.iter().map(normalize_cell).collect()),
        }
    }

    let headers = headers.unwrap_or_default();
    debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "table read"
    );
    Ok(Table { headers, rows })
}
