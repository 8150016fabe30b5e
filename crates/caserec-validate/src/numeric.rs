//! Integer and float validators.
//!
//! Cells are cleaned before matching: characters outside the numeric
//! alphabet are dropped, and validity is judged on the cleaned form.
//! `"12a3"` therefore cleans to `"123"` and validates; `"12.0"` cleans to
//! `"120"` as an integer. Upstream exports rely on this leniency.

use std::sync::LazyLock;

use regex::Regex;

static INTEGER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+$").expect("integer pattern"));
static FLOAT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+(\.\d+)?$").expect("float pattern"));

/// Drop every character outside the numeric alphabet. The decimal point
/// is only kept for floats; integer cleaning removes it, which is how
/// `"12.0"` becomes the valid integer `"120"`.
fn clean_numeric(raw: &str, keep_decimal: bool) -> String {
    raw.chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '-' || (keep_decimal && *ch == '.'))
        .collect()
}

pub fn validate_integer(raw: &str) -> (String, bool) {
    let cleaned = clean_numeric(raw, false);
    let valid = INTEGER_RE.is_match(&cleaned);
    (cleaned, valid)
}

pub fn validate_float(raw: &str) -> (String, bool) {
    let cleaned = clean_numeric(raw, true);
    let valid = FLOAT_RE.is_match(&cleaned);
    (cleaned, valid)
}
