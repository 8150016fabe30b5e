//! Tests for the numeric validators.

use caserec_validate::{validate_float, validate_integer};

#[test]
fn integer_cleaning_runs_before_matching() {
    // Cleaning strips the dot, so "12.0" validates as the integer "120".
    assert_eq!(validate_integer("12.0"), ("120".to_string(), true));
    // Embedded letters are dropped the same way.
    assert_eq!(validate_integer("12a3"), ("123".to_string(), true));
    assert_eq!(validate_integer(" 1.234 "), ("1234".to_string(), true));
}

#[test]
fn integer_accepts_negatives() {
    assert_eq!(validate_integer("-45"), ("-45".to_string(), true));
}

#[test]
fn integer_rejects_non_numeric_remainders() {
    assert_eq!(validate_integer("abc"), (String::new(), false));
    assert_eq!(validate_integer("1-2"), ("1-2".to_string(), false));
    assert_eq!(validate_integer("--3"), ("--3".to_string(), false));
}

#[test]
fn float_fraction_is_optional() {
    assert_eq!(validate_float("100"), ("100".to_string(), true));
    assert_eq!(validate_float("3.14"), ("3.14".to_string(), true));
    assert_eq!(validate_float("-0.5"), ("-0.5".to_string(), true));
}

#[test]
fn float_rejects_multiple_separators() {
    assert_eq!(validate_float("1.2.3"), ("1.2.3".to_string(), false));
    assert_eq!(validate_float("."), (".".to_string(), false));
}

#[test]
fn currency_markup_is_stripped() {
    assert_eq!(validate_float("$ 1200.50"), ("1200.50".to_string(), true));
}
