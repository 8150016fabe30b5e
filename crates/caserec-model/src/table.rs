use serde::{Deserialize, Serialize};

/// An in-memory delimited table.
///
/// Rows are positional: `rows[i][j]` belongs to `headers[j]`. Data rows are
/// kept exactly as read; a row whose length disagrees with the header is a
/// structural error for the row engine to report, never silently padded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Number of header columns.
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
