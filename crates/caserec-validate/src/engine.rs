//! Row engine: per-row column-count check, per-field type dispatch and
//! error accumulation.
//!
//! Rows are independent. A bad field defaults and is reported; a row whose
//! width disagrees with the header is rejected wholesale with one
//! structural record; a failure while dispatching a row (malformed mapping)
//! becomes one `processing` record and the row is skipped. Nothing short of
//! file-level I/O aborts a file.

use tracing::debug;

use caserec_model::{
    CaserecError, ErrorRecord, FieldType, Result, Table, TypeMapping, ValidationOptions,
    VocabularyRegistry,
};

use crate::choice::validate_choice;
use crate::datetime::{DateOutput, validate_date};
use crate::normalize::{clean_null, normalize_diacritics};
use crate::numeric::{validate_float, validate_integer};
use crate::taxid::clean_tax_id;

/// Cleaned table plus the parallel error list.
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    pub table: Table,
    pub errors: Vec<ErrorRecord>,
}

impl ProcessOutcome {
    /// Rows excluded from the output (structural or processing failures).
    pub fn rejected_rows(&self) -> usize {
        self.errors
            .iter()
            .filter(|error| error.column_number == 0)
            .count()
    }

    pub fn field_errors(&self) -> usize {
        self.errors.len() - self.rejected_rows()
    }
}

pub struct RowEngine<'a> {
    mapping: &'a TypeMapping,
    registry: &'a VocabularyRegistry,
    options: ValidationOptions,
}

impl<'a> RowEngine<'a> {
    pub fn new(
        mapping: &'a TypeMapping,
        registry: &'a VocabularyRegistry,
        options: ValidationOptions,
    ) -> Self {
        Self {
            mapping,
            registry,
            options,
        }
    }

    /// Process every row of a table.
    ///
    /// Every input row either appears in the cleaned output (possibly with
    /// defaulted fields) or has a record with `column_number == 0`
    /// explaining its exclusion.
    pub fn process(&self, table: &Table) -> ProcessOutcome {
        let width = table.width();
        let mut cleaned = Table::new(table.headers.clone());
        let mut errors = Vec::new();
        for (idx, row) in table.rows.iter().enumerate() {
            let row_number = idx + 1;
            if row.len() != width {
                debug!(row = row_number, expected = width, found = row.len(), "row rejected");
                errors.push(ErrorRecord::structural(
                    row_number,
                    format!("expected {width} columns, found {}", row.len()),
                ));
                continue;
            }
            let mut row_errors = Vec::new();
            match self.process_row(row, &table.headers, row_number, &mut row_errors) {
                Ok(clean_row) => {
                    errors.append(&mut row_errors);
                    cleaned.push_row(clean_row);
                }
                Err(error) => {
                    debug!(row = row_number, %error, "row skipped");
                    errors.push(ErrorRecord::processing(
                        row_number,
                        row.join("|"),
                        error.to_string(),
                    ));
                }
            }
        }
        ProcessOutcome {
            table: cleaned,
            errors,
        }
    }

    fn process_row(
        &self,
        row: &[String],
        headers: &[String],
        row_number: usize,
        errors: &mut Vec<ErrorRecord>,
    ) -> Result<Vec<String>> {
        let mut output = Vec::with_capacity(row.len());
        for (col_idx, (raw, column_name)) in row.iter().zip(headers).enumerate() {
            let column_number = col_idx + 1;
            let value = clean_null(raw);
            if value.is_empty() {
                output.push(value);
                continue;
            }
            let field_type = self.mapping.type_for_column(column_number);
            let (normalized, valid) = self.dispatch(&value, field_type)?;
            if valid {
                output.push(normalized);
            } else {
                errors.push(ErrorRecord::field(
                    column_name,
                    column_number,
                    field_type.to_string(),
                    value,
                    row_number,
                    failure_message(field_type),
                ));
                // The output row keeps the header width: numeric, date and
                // tax-id fields default to empty, string-like fields keep
                // the best-effort normalized value.
                if field_type.defaults_to_empty() {
                    output.push(String::new());
                } else {
                    output.push(normalized);
                }
            }
        }
        Ok(output)
    }

    fn dispatch(&self, value: &str, field_type: &FieldType) -> Result<(String, bool)> {
        let leniency = self.options.datetime_leniency;
        Ok(match field_type {
            FieldType::Int => validate_integer(value),
            FieldType::Float => validate_float(value),
            FieldType::Date => validate_date(value, DateOutput::Date, leniency),
            FieldType::DateDmy => validate_date(value, DateOutput::DateDmy, leniency),
            FieldType::Datetime => validate_date(value, DateOutput::Datetime, leniency),
            FieldType::Nit => clean_tax_id(value),
            FieldType::Str => (value.to_string(), true),
            FieldType::StrNoSpecialChars => (normalize_diacritics(value), true),
            FieldType::Choice(domain) => {
                let vocabulary = self
                    .registry
                    .get(domain)
                    .ok_or_else(|| CaserecError::UnknownVocabulary(domain.clone()))?;
                validate_choice(value, vocabulary, self.options.choice_validity)
            }
        })
    }
}

fn failure_message(field_type: &FieldType) -> String {
    match field_type {
        FieldType::Int => "not a valid integer".to_string(),
        FieldType::Float => "not a valid number".to_string(),
        FieldType::Date | FieldType::DateDmy => "not a valid date".to_string(),
        FieldType::Datetime => "not a valid datetime".to_string(),
        FieldType::Nit => "not a valid NIT".to_string(),
        FieldType::Choice(domain) => format!("value not found in vocabulary '{domain}'"),
        FieldType::Str | FieldType::StrNoSpecialChars => "invalid value".to_string(),
    }
}
