//! Colombian tax-ID (NIT) cleanup.

use std::sync::LazyLock;

use regex::Regex;

/// Phrases agencies write instead of a missing tax ID.
const UNKNOWN_SENTINELS: &[&str] = &[
    "nan",
    "null",
    "sin registro",
    "desconocido",
    "no aplica",
    "ninguna",
    "no registra",
    "sin",
    "sin id",
];

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("name pattern"));
static NIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:-\d+)*$").expect("nit pattern"));
static ALPHA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]+$").expect("alpha pattern"));

/// Clean a NIT cell.
///
/// Empty cells and unknown-sentinel phrases are invalid. A value made of
/// letters and whitespace only is a person/company name standing in for a
/// missing ID and passes through unchanged. Everything else drops the
/// `.000000` float-export artifact and, when the remainder looks like
/// `digits(-digits)*`, the verification-digit suffix after the first
/// hyphen.
pub fn clean_tax_id(raw: &str) -> (String, bool) {
    let trimmed = raw.trim();
    if trimmed.is_empty() || UNKNOWN_SENTINELS.contains(&trimmed.to_lowercase().as_str()) {
        return (String::new(), false);
    }
    if NAME_RE.is_match(trimmed) {
        return (trimmed.to_string(), true);
    }
    let mut cleaned = trimmed.replace(".000000", "");
    if NIT_RE.is_match(&cleaned) {
        cleaned = cleaned
            .split('-')
            .next()
            .map(str::to_string)
            .unwrap_or_default();
    }
    if ALPHA_RE.is_match(&cleaned) {
        (String::new(), false)
    } else {
        (cleaned, true)
    }
}
