//! Versioned per-file schema configuration.
//!
//! Agency layouts change yearly; each year/file gets its own immutable
//! `SchemaConfig` loaded from JSON and passed into the pipeline, one per
//! schema version.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::mapping::TypeMapping;
use crate::options::ValidationOptions;

fn default_delimiter() -> char {
    '|'
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaConfig {
    /// Schema version label, e.g. "defensoria-2024".
    pub version: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Ordered type mapping (first entry claiming a column wins).
    pub types: TypeMapping,
    /// Reference header order; matched headers are emitted first, in this
    /// order, unmatched headers keep their relative order afterwards.
    #[serde(default)]
    pub reference_headers: Vec<String>,
    /// Normalized-header renames applied before reordering.
    #[serde(default)]
    pub header_replacements: BTreeMap<String, String>,
    #[serde(default)]
    pub options: ValidationOptions,
}

impl SchemaConfig {
    pub fn new(version: impl Into<String>, types: TypeMapping) -> Self {
        Self {
            version: version.into(),
            delimiter: default_delimiter(),
            types,
            reference_headers: Vec::new(),
            header_replacements: BTreeMap::new(),
            options: ValidationOptions::default(),
        }
    }
}
