//! End-to-end tests for the row engine.

use caserec_model::{
    ChoiceValidity, ErrorRecord, FieldType, Table, TypeMapping, ValidationOptions,
    VocabularyRegistry,
};
use caserec_validate::RowEngine;
use caserec_vocab::default_registry;

fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
    let mut table = Table::new(headers.iter().map(|h| (*h).to_string()).collect());
    for row in rows {
        table.push_row(row.iter().map(|v| (*v).to_string()).collect());
    }
    table
}

fn case_mapping() -> TypeMapping {
    TypeMapping::new(vec![
        (FieldType::Date, vec![2]),
        (FieldType::Nit, vec![3]),
    ])
}

#[test]
fn width_mismatch_rejects_the_row_with_one_structural_error() {
    let mapping = case_mapping();
    let registry = VocabularyRegistry::new();
    let engine = RowEngine::new(&mapping, &registry, ValidationOptions::default());

    let input = table(&["ID", "FECHA", "NIT"], &[&["1", "2023-05-10"]]);
    let outcome = engine.process(&input);

    assert!(outcome.table.rows.is_empty());
    assert_eq!(outcome.errors.len(), 1);
    let error = &outcome.errors[0];
    assert!(error.is_structural());
    assert_eq!(error.row_number, 1);
    assert_eq!(error.column_number, 0);
}

#[test]
fn invalid_fields_default_and_report() {
    let mapping = case_mapping();
    let registry = VocabularyRegistry::new();
    let engine = RowEngine::new(&mapping, &registry, ValidationOptions::default());

    let input = table(
        &["ID", "FECHA", "NIT"],
        &[&["1", "2023-13-40", "DESCONOCIDO"]],
    );
    let outcome = engine.process(&input);

    assert_eq!(outcome.table.rows, vec![vec![
        "1".to_string(),
        String::new(),
        String::new(),
    ]]);
    assert_eq!(outcome.errors.len(), 2);
    let columns: Vec<usize> = outcome.errors.iter().map(|e| e.column_number).collect();
    assert_eq!(columns, vec![2, 3]);
    assert!(outcome.errors.iter().all(|e| e.row_number == 1));
    assert_eq!(outcome.errors[0].original_value, "2023-13-40");
}

#[test]
fn valid_rows_are_normalized_in_place() {
    let mapping = case_mapping();
    let registry = VocabularyRegistry::new();
    let engine = RowEngine::new(&mapping, &registry, ValidationOptions::default());

    let input = table(
        &["ID", "FECHA", "NIT"],
        &[&["7", "10/05/2023", "900123456-7"]],
    );
    let outcome = engine.process(&input);

    assert!(outcome.errors.is_empty());
    assert_eq!(outcome.table.rows, vec![vec![
        "7".to_string(),
        "2023-05-10".to_string(),
        "900123456".to_string(),
    ]]);
}

#[test]
fn names_standing_in_for_a_nit_pass_through() {
    let mapping = case_mapping();
    let registry = VocabularyRegistry::new();
    let engine = RowEngine::new(&mapping, &registry, ValidationOptions::default());

    let input = table(
        &["ID", "FECHA", "NIT"],
        &[&["2", "2024-01-05", "PEPE PEREZ"]],
    );
    let outcome = engine.process(&input);

    assert!(outcome.errors.is_empty());
    assert_eq!(outcome.table.rows[0][2], "PEPE PEREZ");
}

#[test]
fn null_sentinels_become_empty_without_errors() {
    let mapping = case_mapping();
    let registry = VocabularyRegistry::new();
    let engine = RowEngine::new(&mapping, &registry, ValidationOptions::default());

    let input = table(&["ID", "FECHA", "NIT"], &[&["1", "NULL", "$null$"]]);
    let outcome = engine.process(&input);

    assert!(outcome.errors.is_empty());
    assert_eq!(outcome.table.rows, vec![vec![
        "1".to_string(),
        String::new(),
        String::new(),
    ]]);
}

#[test]
fn failed_choice_keeps_the_normalized_value() {
    let mapping = TypeMapping::new(vec![(
        FieldType::Choice("macroproceso".to_string()),
        vec![2],
    )]);
    let registry = default_registry();
    let engine = RowEngine::new(&mapping, &registry, ValidationOptions::default());

    let input = table(&["ID", "MACROPROCESO"], &[&["1", "Pensional."]]);
    let outcome = engine.process(&input);

    // Best-effort normalized value survives; the record flags the miss.
    assert_eq!(outcome.table.rows[0][1], "PENSIONAL");
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.errors[0].type_name, "choice_macroproceso");
}

#[test]
fn permissive_choice_never_reports() {
    let mapping = TypeMapping::new(vec![(
        FieldType::Choice("macroproceso".to_string()),
        vec![2],
    )]);
    let registry = default_registry();
    let options = ValidationOptions::new().with_choice_validity(ChoiceValidity::Permissive);
    let engine = RowEngine::new(&mapping, &registry, options);

    let input = table(&["ID", "MACROPROCESO"], &[&["1", "Pensional."]]);
    let outcome = engine.process(&input);

    assert!(outcome.errors.is_empty());
    assert_eq!(outcome.table.rows[0][1], "PENSIONAL");
}

#[test]
fn unknown_vocabulary_skips_the_row_as_processing_error() {
    let mapping = TypeMapping::new(vec![(FieldType::Choice("inexistente".to_string()), vec![1])]);
    let registry = VocabularyRegistry::new();
    let engine = RowEngine::new(&mapping, &registry, ValidationOptions::default());

    let input = table(&["X"], &[&["valor"], &["otro"]]);
    let outcome = engine.process(&input);

    assert!(outcome.table.rows.is_empty());
    assert_eq!(outcome.errors.len(), 2);
    assert!(outcome.errors.iter().all(|e| e.type_name == "processing"));
    assert_eq!(outcome.rejected_rows(), 2);
}

#[test]
fn rows_are_independent() {
    let mapping = case_mapping();
    let registry = VocabularyRegistry::new();
    let engine = RowEngine::new(&mapping, &registry, ValidationOptions::default());

    let input = table(
        &["ID", "FECHA", "NIT"],
        &[
            &["1", "bad-date", "900123456-7"],
            &["2"],
            &["3", "2023-05-10", "800111222"],
        ],
    );
    let outcome = engine.process(&input);

    assert_eq!(outcome.table.rows.len(), 2);
    assert_eq!(outcome.rejected_rows(), 1);
    assert_eq!(outcome.field_errors(), 1);
    let structural: Vec<&ErrorRecord> =
        outcome.errors.iter().filter(|e| e.is_structural()).collect();
    assert_eq!(structural.len(), 1);
    assert_eq!(structural[0].row_number, 2);
}
