//! Tests for controlled-vocabulary validation.

use caserec_model::ChoiceValidity;
use caserec_validate::validate_choice;
use caserec_vocab::builtin;

#[test]
fn accents_case_and_punctuation_are_ignored() {
    let vocab = builtin::proceso();
    let (value, valid) = validate_choice(
        "Gestión de Fiscalización.",
        &vocab,
        ChoiceValidity::Membership,
    );
    assert_eq!(value, "gestion de fiscalizacion");
    assert!(valid);
}

#[test]
fn aliases_map_to_canonical_values() {
    let vocab = builtin::estado_solicitud();
    let (value, valid) = validate_choice("Finalizada", &vocab, ChoiceValidity::Membership);
    assert_eq!(value, "CERRADA");
    assert!(valid);
}

#[test]
fn code_prefix_is_stripped_for_office_vocabularies() {
    let vocab = builtin::direccion_seccional();
    let (value, valid) = validate_choice(
        "31-Dirección Seccional de Impuestos de Bogotá",
        &vocab,
        ChoiceValidity::Membership,
    );
    assert_eq!(value, "direccion seccional de impuestos de bogota");
    assert!(valid);
}

#[test]
fn typo_aliases_repair_scanned_values() {
    let vocab = builtin::direccion_seccional();
    let (value, valid) = validate_choice(
        "Dirección Seccional de Impuests y Aduanas de Bucaramanga",
        &vocab,
        ChoiceValidity::Membership,
    );
    assert_eq!(value, "direccion seccional de impuestos y aduanas de bucaramanga");
    assert!(valid);
}

#[test]
fn comma_variant_of_macroproceso_matches() {
    let vocab = builtin::macroproceso();
    let (value, valid) = validate_choice(
        "Tributario, Aduanero y Cambiario",
        &vocab,
        ChoiceValidity::Membership,
    );
    assert_eq!(value, "TRIBUTARIO ADUANERO Y CAMBIARIO");
    assert!(valid);
}

#[test]
fn membership_flags_unknown_values_permissive_does_not() {
    let vocab = builtin::macroproceso();
    let (value, valid) = validate_choice("PENSIONAL", &vocab, ChoiceValidity::Membership);
    assert_eq!(value, "PENSIONAL");
    assert!(!valid);

    let (value, valid) = validate_choice("PENSIONAL", &vocab, ChoiceValidity::Permissive);
    assert_eq!(value, "PENSIONAL");
    assert!(valid);
}
