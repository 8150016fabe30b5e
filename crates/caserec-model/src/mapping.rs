//! Column-position-to-type mapping.
//!
//! Agencies redefine their column layout per file and per year, so the
//! mapping is an explicit, versioned configuration object handed to the row
//! engine per invocation. The entries are an ordered list, not a map: when
//! two entries claim the same column the first one wins, and that tie-break
//! is part of the contract.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Expected semantic type of a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FieldType {
    Int,
    Float,
    Date,
    /// Date formatted as DD/MM/YYYY on output.
    DateDmy,
    Datetime,
    /// Colombian tax identification number.
    Nit,
    Str,
    /// Free text run through the diacritics normalizer.
    StrNoSpecialChars,
    /// Controlled-vocabulary column; the payload names the vocabulary.
    Choice(String),
}

impl FieldType {
    /// Types whose failure default is the empty string; string-like types
    /// keep the best-effort normalized value instead.
    pub fn defaults_to_empty(&self) -> bool {
        matches!(
            self,
            FieldType::Int
                | FieldType::Float
                | FieldType::Date
                | FieldType::DateDmy
                | FieldType::Datetime
                | FieldType::Nit
        )
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Int => f.write_str("int"),
            FieldType::Float => f.write_str("float"),
            FieldType::Date => f.write_str("date"),
            FieldType::DateDmy => f.write_str("date_dd_mm_yyyy"),
            FieldType::Datetime => f.write_str("datetime"),
            FieldType::Nit => f.write_str("nit"),
            FieldType::Str => f.write_str("str"),
            FieldType::StrNoSpecialChars => f.write_str("str_no_special_chars"),
            FieldType::Choice(domain) => write!(f, "choice_{domain}"),
        }
    }
}

impl FromStr for FieldType {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let name = raw.trim();
        if let Some(domain) = name.strip_prefix("choice_") {
            if domain.is_empty() {
                return Err(format!("choice type without a vocabulary name: {raw:?}"));
            }
            return Ok(FieldType::Choice(domain.to_string()));
        }
        match name {
            "int" => Ok(FieldType::Int),
            "float" => Ok(FieldType::Float),
            "date" => Ok(FieldType::Date),
            "date_dd_mm_yyyy" => Ok(FieldType::DateDmy),
            "datetime" => Ok(FieldType::Datetime),
            "nit" => Ok(FieldType::Nit),
            "str" => Ok(FieldType::Str),
            "str_no_special_chars" => Ok(FieldType::StrNoSpecialChars),
            other => Err(format!("unknown field type: {other:?}")),
        }
    }
}

impl TryFrom<String> for FieldType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FieldType> for String {
    fn from(value: FieldType) -> Self {
        value.to_string()
    }
}

/// Ordered mapping from semantic type to 1-based column positions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeMapping {
    entries: Vec<(FieldType, Vec<usize>)>,
}

static DEFAULT_TYPE: FieldType = FieldType::Str;

impl TypeMapping {
    pub fn new(entries: Vec<(FieldType, Vec<usize>)>) -> Self {
        Self { entries }
    }

    /// Resolve the expected type for a 1-based column position.
    ///
    /// The first entry listing the position wins; columns no entry claims
    /// default to `str`.
    pub fn type_for_column(&self, position: usize) -> &FieldType {
        self.entries
            .iter()
            .find(|(_, positions)| positions.contains(&position))
            .map(|(field_type, _)| field_type)
            .unwrap_or(&DEFAULT_TYPE)
    }

    pub fn entries(&self) -> &[(FieldType, Vec<usize>)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
