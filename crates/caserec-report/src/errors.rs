//! Error-record reports.

use std::path::Path;

use anyhow::{Context, Result};
use csv::Writer;
use tracing::info;

use caserec_model::ErrorRecord;

/// Write the anomalies found while cleaning a file.
///
/// The report is a comma-delimited CSV with one row per error record,
/// in the order the records were produced.
pub fn write_error_report(errors: &[ErrorRecord], path: &Path) -> Result<()> {
    let mut writer = Writer::from_path(path)
        .with_context(|| format!("create error report: {}", path.display()))?;
    for record in errors {
        writer
            .serialize(record)
            .with_context(|| format!("write error record: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush error report: {}", path.display()))?;

    info!(path = %path.display(), errors = errors.len(), "error report written");
    Ok(())
}
