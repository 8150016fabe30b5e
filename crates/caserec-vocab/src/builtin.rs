//! Built-in vocabularies for the agencies in scope.
//!
//! Values are stored in their normalized form: diacritics stripped, `.` and
//! `,` removed, case folded per vocabulary. Alias entries collect the
//! historical spelling variants observed in yearly exports.

use caserec_model::{CaseFold, Vocabulary, VocabularyRegistry};

pub const MACROPROCESO: &str = "macroproceso";
pub const PROCESO: &str = "proceso";
pub const DEPENDENCIA_DIAN: &str = "dependencia_dian";
pub const DIRECCION_SECCIONAL: &str = "direccion_seccional";
pub const PROCEDIMIENTO: &str = "procedimiento";
pub const CLASIFICACION: &str = "clasificacion";
pub const ESTADO_SOLICITUD: &str = "estado_solicitud";
pub const CALIDAD_QUIEN_SOLICITO: &str = "calidad_quien_solicito";

pub fn macroproceso() -> Vocabulary {
    Vocabulary::new(MACROPROCESO, CaseFold::Upper).with_values([
        "TRIBUTARIO",
        "ADUANERO",
        "CAMBIARIO",
        "TRIBUTARIO ADUANERO Y CAMBIARIO",
    ])
}

pub fn proceso() -> Vocabulary {
    Vocabulary::new(PROCESO, CaseFold::Lower)
        .with_values([
            "gestion de fiscalizacion",
            "gestion de recaudo",
            "gestion de cobranzas",
            "gestion juridica",
            "gestion aduanera",
            "gestion masiva",
            "gestion disciplinaria",
            "gestion de servicio al ciudadano",
        ])
        .with_alias("fiscalizacion", "gestion de fiscalizacion")
        .with_alias("recaudo", "gestion de recaudo")
        .with_alias("cobranzas", "gestion de cobranzas")
        .with_alias("gestion de cobro", "gestion de cobranzas")
        .with_alias("juridica", "gestion juridica")
}

pub fn dependencia_dian() -> Vocabulary {
    Vocabulary::new(DEPENDENCIA_DIAN, CaseFold::Lower)
        .with_values([
            "direccion de gestion de impuestos",
            "direccion de gestion de aduanas",
            "direccion de gestion de fiscalizacion",
            "direccion de gestion juridica",
            "direccion de gestion de policia fiscal y aduanera",
            "subdireccion de gestion de recaudo y cobranzas",
            "subdireccion de gestion de registro aduanero",
            "defensoria del contribuyente y del usuario aduanero",
        ])
        .with_alias(
            "defensoria del contribuyente",
            "defensoria del contribuyente y del usuario aduanero",
        )
        .with_alias(
            "direccion de impuestos",
            "direccion de gestion de impuestos",
        )
        .with_alias("direccion de aduanas", "direccion de gestion de aduanas")
        .with_code_prefix_stripping()
}

pub fn direccion_seccional() -> Vocabulary {
    Vocabulary::new(DIRECCION_SECCIONAL, CaseFold::Lower)
        .with_values([
            "direccion seccional de impuestos de bogota",
            "direccion seccional de impuestos de medellin",
            "direccion seccional de impuestos de cali",
            "direccion seccional de impuestos de barranquilla",
            "direccion seccional de aduanas de bogota",
            "direccion seccional de aduanas de cartagena",
            "direccion seccional de impuestos y aduanas de bucaramanga",
            "direccion seccional de impuestos y aduanas de cucuta",
            "direccion seccional de impuestos y aduanas de ibague",
            "direccion seccional de impuestos y aduanas de manizales",
            "direccion seccional de impuestos y aduanas de pereira",
            "direccion seccional de impuestos y aduanas de villavicencio",
        ])
        // Recurring typos from scanned source exports.
        .with_alias(
            "direccion seccional de impuests y aduanas de bucaramanga",
            "direccion seccional de impuestos y aduanas de bucaramanga",
        )
        .with_alias(
            "direccion seccionalde aduanas de bogota",
            "direccion seccional de aduanas de bogota",
        )
        .with_alias(
            "direccion seccional impuestos de bogota",
            "direccion seccional de impuestos de bogota",
        )
        .with_code_prefix_stripping()
}

pub fn procedimiento() -> Vocabulary {
    Vocabulary::new(PROCEDIMIENTO, CaseFold::Upper)
        .with_values([
            "DEVOLUCION Y/O COMPENSACION",
            "COBRO COACTIVO",
            "FISCALIZACION TRIBUTARIA",
            "FISCALIZACION ADUANERA",
            "OPERACION ADUANERA",
            "REGIMEN CAMBIARIO",
            "RECURSOS JURIDICOS",
            "NOTIFICACIONES",
        ])
        .with_alias("DEVOLUCIONES", "DEVOLUCION Y/O COMPENSACION")
        .with_alias("DEVOLUCION O COMPENSACION", "DEVOLUCION Y/O COMPENSACION")
        .with_alias("COBRANZAS", "COBRO COACTIVO")
}

pub fn clasificacion() -> Vocabulary {
    Vocabulary::new(CLASIFICACION, CaseFold::Upper)
        .with_values([
            "PETICION",
            "QUEJA",
            "RECLAMO",
            "SUGERENCIA",
            "DENUNCIA",
            "FELICITACION",
            "SOLICITUD DE INFORMACION",
        ])
        .with_alias("PETICIONES", "PETICION")
        .with_alias("QUEJAS", "QUEJA")
        .with_alias("RECLAMOS", "RECLAMO")
        .with_alias("DENUNCIA DE CORRUPCION", "DENUNCIA")
}

pub fn estado_solicitud() -> Vocabulary {
    Vocabulary::new(ESTADO_SOLICITUD, CaseFold::Upper)
        .with_values(["ASIGNADA", "EN TRAMITE", "RESUELTA", "CERRADA", "RECHAZADA"])
        .with_alias("FINALIZADA", "CERRADA")
        .with_alias("FINALIZADO", "CERRADA")
        .with_alias("EN PROCESO", "EN TRAMITE")
        .with_alias("TRAMITE", "EN TRAMITE")
        .with_alias("RESUELTO", "RESUELTA")
}

pub fn calidad_quien_solicito() -> Vocabulary {
    Vocabulary::new(CALIDAD_QUIEN_SOLICITO, CaseFold::Upper)
        .with_values([
            "CONTRIBUYENTE",
            "APODERADO",
            "REPRESENTANTE LEGAL",
            "AGENTE OFICIOSO",
            "USUARIO ADUANERO",
            "ANONIMO",
        ])
        .with_alias("REP LEGAL", "REPRESENTANTE LEGAL")
        .with_alias("ANONIMA", "ANONIMO")
}

/// Registry with every built-in vocabulary.
pub fn default_registry() -> VocabularyRegistry {
    let mut registry = VocabularyRegistry::new();
    registry.register(macroproceso());
    registry.register(proceso());
    registry.register(dependencia_dian());
    registry.register(direccion_seccional());
    registry.register(procedimiento());
    registry.register(clasificacion());
    registry.register(estado_solicitud());
    registry.register(calidad_quien_solicito());
    registry
}
