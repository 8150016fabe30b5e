//! Per-file cleaning pipeline.
//!
//! One input file flows through four stages: read, header reconciliation,
//! row validation, output. Stages after read are pure; only the read and
//! write edges touch the filesystem.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use caserec_ingest::{read_table, reorganize_table};
use caserec_model::{SchemaConfig, Table, VocabularyRegistry};
use caserec_report::{write_error_report, write_table};
use caserec_validate::RowEngine;

/// Outcome of cleaning one input file.
#[derive(Debug)]
pub struct FileReport {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub error_report: Option<PathBuf>,
    pub rows_in: usize,
    pub rows_out: usize,
    pub rejected_rows: usize,
    pub field_errors: usize,
}

/// Shared settings for a cleaning run.
pub struct CleanContext<'a> {
    pub schema: &'a SchemaConfig,
    pub registry: &'a VocabularyRegistry,
    pub output_dir: &'a Path,
    pub dry_run: bool,
}

/// Load a schema configuration from JSON.
pub fn load_schema(path: &Path) -> Result<SchemaConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read schema: {}", path.display()))?;
    let schema: SchemaConfig =
        serde_json::from_str(&raw).with_context(|| format!("parse schema: {}", path.display()))?;
    Ok(schema)
}

/// Clean one file: read, reconcile headers, validate rows, write outputs.
///
/// The error report is only written when anomalies were found. Returns the
/// report together with the cleaned table so callers can concatenate runs.
pub fn clean_file(path: &Path, context: &CleanContext<'_>) -> Result<(FileReport, Table)> {
    let span = info_span!("clean_file", file = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let table = read_table(path, context.schema.delimiter)?;
    let rows_in = table.rows.len();

    let reconcile = !context.schema.reference_headers.is_empty()
        || !context.schema.header_replacements.is_empty();
    let table = if reconcile {
        reorganize_table(
            &table,
            &context.schema.reference_headers,
            &context.schema.header_replacements,
        )
    } else {
        table
    };

    let engine = RowEngine::new(
        &context.schema.types,
        context.registry,
        context.schema.options,
    );
    let outcome = engine.process(&table);

    let stem = path
        .file_stem()
        .and_then(|name| name.to_str())
        .unwrap_or("output");
    let output_path = context.output_dir.join(format!("{stem}_clean.csv"));
    let error_path = context.output_dir.join(format!("{stem}_errors.csv"));

    let mut output = None;
    let mut error_report = None;
    if !context.dry_run {
        std::fs::create_dir_all(context.output_dir)
            .with_context(|| format!("create output dir: {}", context.output_dir.display()))?;
        write_table(&outcome.table, &output_path, context.schema.delimiter)?;
        output = Some(output_path);
        if !outcome.errors.is_empty() {
            write_error_report(&outcome.errors, &error_path)?;
            error_report = Some(error_path);
        }
    }

    let report = FileReport {
        input: path.to_path_buf(),
        output,
        error_report,
        rows_in,
        rows_out: outcome.table.rows.len(),
        rejected_rows: outcome.rejected_rows(),
        field_errors: outcome.field_errors(),
    };
    info!(
        file = %path.display(),
        rows_in = report.rows_in,
        rows_out = report.rows_out,
        rejected = report.rejected_rows,
        field_errors = report.field_errors,
        duration_ms = start.elapsed().as_millis(),
        "file cleaned"
    );
    Ok((report, outcome.table))
}
