use serde::Serialize;

/// Type name used for whole-row width mismatches.
pub const STRUCTURAL_TYPE: &str = "structural";

/// Type name used for unexpected per-row failures (e.g. malformed mapping).
pub const PROCESSING_TYPE: &str = "processing";

/// One anomaly found while cleaning a file.
///
/// Records are created during row processing, appended to the error list and
/// never mutated afterwards; the report writer serializes them once at the
/// end of the file. `row_number` is 1-based and excludes the header row;
/// `column_number` is 1-based, or 0 for whole-row errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorRecord {
    pub column_name: String,
    pub column_number: usize,
    pub type_name: String,
    pub original_value: String,
    pub row_number: usize,
    pub message: String,
}

impl ErrorRecord {
    /// A field-level validation failure.
    pub fn field(
        column_name: impl Into<String>,
        column_number: usize,
        type_name: impl Into<String>,
        original_value: impl Into<String>,
        row_number: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            column_name: column_name.into(),
            column_number,
            type_name: type_name.into(),
            original_value: original_value.into(),
            row_number,
            message: message.into(),
        }
    }

    /// A row rejected before per-field validation (width mismatch).
    pub fn structural(row_number: usize, message: impl Into<String>) -> Self {
        Self {
            column_name: String::new(),
            column_number: 0,
            type_name: STRUCTURAL_TYPE.to_string(),
            original_value: String::new(),
            row_number,
            message: message.into(),
        }
    }

    /// An unexpected failure while processing a row; the row is skipped.
    pub fn processing(
        row_number: usize,
        original_value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            column_name: String::new(),
            column_number: 0,
            type_name: PROCESSING_TYPE.to_string(),
            original_value: original_value.into(),
            row_number,
            message: message.into(),
        }
    }

    pub fn is_structural(&self) -> bool {
        self.type_name == STRUCTURAL_TYPE
    }
}
