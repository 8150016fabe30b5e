pub mod builtin;
pub mod loader;

pub use builtin::default_registry;
pub use loader::{load_registry, load_vocabulary_file};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_has_all_domains() {
        let registry = default_registry();
        for name in [
            builtin::MACROPROCESO,
            builtin::PROCESO,
            builtin::DEPENDENCIA_DIAN,
            builtin::DIRECCION_SECCIONAL,
            builtin::PROCEDIMIENTO,
            builtin::CLASIFICACION,
            builtin::ESTADO_SOLICITUD,
            builtin::CALIDAD_QUIEN_SOLICITO,
        ] {
            assert!(registry.get(name).is_some(), "missing vocabulary {name}");
        }
    }

    #[test]
    fn aliases_resolve_to_canonical_values() {
        let vocab = builtin::estado_solicitud();
        let canonical = vocab.resolve_alias("FINALIZADA");
        assert_eq!(canonical, "CERRADA");
        assert!(vocab.contains(canonical));
    }

    #[test]
    fn code_prefix_stripping_set_for_office_vocabularies() {
        assert!(builtin::dependencia_dian().strip_code_prefix);
        assert!(builtin::direccion_seccional().strip_code_prefix);
        assert!(!builtin::procedimiento().strip_code_prefix);
    }

    #[test]
    fn vocabulary_json_round_trip() {
        let vocab = builtin::macroproceso();
        let json = serde_json::to_string(&vocab).expect("serialize vocabulary");
        let round: caserec_model::Vocabulary =
            serde_json::from_str(&json).expect("deserialize vocabulary");
        assert_eq!(round, vocab);
    }
}
