//! String normalization shared by every validator.

use unicode_normalization::UnicodeNormalization;

/// Tokens that mean "no value" in agency exports, compared
/// case-insensitively on the trimmed cell.
pub const NULL_SENTINELS: &[&str] = &["$null$", "nan", "null", "n.a", "n.a."];

/// Trim a raw cell and collapse null sentinels to the empty string.
///
/// This runs before type validation; an empty result short-circuits to
/// "valid, empty" and never reaches a validator.
pub fn clean_null(raw: &str) -> String {
    let trimmed = raw.trim();
    let lowered = trimmed.to_lowercase();
    if NULL_SENTINELS.contains(&lowered.as_str()) {
        String::new()
    } else {
        trimmed.to_string()
    }
}

/// Strip diacritics and the literal `.`/`,` from a string.
///
/// NFKD-decomposes the input, drops every non-ASCII character (which
/// removes the combining accent marks), removes periods and commas and
/// trims the result, so "Bogotá.", "BOGOTA" and "bogotá," agree after case
/// folding. Total and idempotent; empty input yields empty output. The trim
/// runs last: dropping punctuation can expose trailing whitespace.
pub fn normalize_diacritics(value: &str) -> String {
    let stripped: String = value
        .nfkd()
        .filter(char::is_ascii)
        .filter(|ch| *ch != '.' && *ch != ',')
        .collect();
    stripped.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_accents_and_punctuation() {
        assert_eq!(normalize_diacritics("Bogotá."), "Bogota");
        assert_eq!(normalize_diacritics("  NARIÑO, "), "NARINO");
        assert_eq!(normalize_diacritics("Cúcuta"), "Cucuta");
        assert_eq!(normalize_diacritics(""), "");
    }

    #[test]
    fn trailing_punctuation_leaves_no_whitespace() {
        assert_eq!(normalize_diacritics("Pasto ."), "Pasto");
        assert_eq!(normalize_diacritics(", Cali ,"), "Cali");
    }

    #[test]
    fn null_sentinels_clean_to_empty() {
        for token in ["$null$", "nan", "NULL", "N.A", "N.A.", "null", ""] {
            assert_eq!(clean_null(token), "", "token {token:?}");
        }
        assert_eq!(clean_null("  NULL  "), "");
        assert_eq!(clean_null(" dato "), "dato");
    }
}
