//! Header reconciliation.
//!
//! Source exports arrive with inconsistent column spellings (casing,
//! accents, stray punctuation) and in varying order. Columns are mapped
//! onto a canonical header set so the same schema applies to every
//! export of a given agency.

use std::collections::BTreeMap;

use tracing::debug;

use caserec_model::Table;

/// Canonical form of a column name: trimmed, uppercased, spaces and
/// hyphens folded to underscores, accents folded, periods dropped.
pub fn normalize_column_name(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter_map(|ch| match ch {
            ' ' | '-' => Some('_'),
            '.' => None,
            'á' | 'Á' => Some('A'),
            'é' | 'É' => Some('E'),
            'í' | 'Í' => Some('I'),
            'ó' | 'Ó' => Some('O'),
            'ú' | 'Ú' => Some('U'),
            'ñ' | 'Ñ' => Some('N'),
            other => Some(other.to_ascii_uppercase()),
        })
        .collect()
}

/// Rebuild a table against a canonical header order.
///
/// Each source header is normalized, then passed through `replacements`
/// (keys are normalized names). Duplicate canonical names keep the first
/// occurrence. The output header order is `reference` columns that are
/// present, followed by leftover columns in source order; cells travel
/// with their column name, and columns of the reference missing from
/// the source are filled with empty strings.
pub fn reorganize_table(
    table: &Table,
    reference: &[String],
    replacements: &BTreeMap<String, String>,
) -> Table {
    // Canonical name and source index for each retained column.
    let mut canonical: Vec<(String, usize)> = Vec::with_capacity(table.headers.len());
    for (index, header) in table.headers.iter().enumerate() {
        let normalized = normalize_column_name(header);
        let name = replacements.get(&normalized).cloned().unwrap_or(normalized);
        if canonical.iter().any(|(existing, _)| *existing == name) {
            debug!(column = %name, index, "duplicate column dropped");
            continue;
        }
        canonical.push((name, index));
    }

    let mut ordered: Vec<(String, Option<usize>)> = Vec::new();
    for wanted in reference {
        let source = canonical
            .iter()
            .find(|(name, _)| name == wanted)
            .map(|&(_, index)| index);
        ordered.push((wanted.clone(), source));
    }
    for (name, index) in &canonical {
        if !reference.contains(name) {
            ordered.push((name.clone(), Some(*index)));
        }
    }

    let headers: Vec<String> = ordered.iter().map(|(name, _)| name.clone()).collect();
    let rows = table
        .rows
        .iter()
        .map(|row| {
            ordered
                .iter()
                .map(|&(_, source)| match source {
                    Some(index) => row.get(index).cloned().unwrap_or_default(),
                    None => String::new(),
                })
                .collect()
        })
        .collect();

    Table { headers, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_column_name() {
        assert_eq!(normalize_column_name("  Fecha Radicación "), "FECHA_RADICACION");
        assert_eq!(normalize_column_name("No. Expediente"), "NO_EXPEDIENTE");
        assert_eq!(normalize_column_name("AÑO-GESTIÓN"), "ANO_GESTION");
    }

    #[test]
    fn test_reorganize_orders_by_reference() {
        let table = Table {
            headers: refs(&["fecha", "expediente"]),
            rows: vec![refs(&["2023-01-01", "100"])],
        };
        let out = reorganize_table(&table, &refs(&["EXPEDIENTE", "FECHA"]), &BTreeMap::new());

        assert_eq!(out.headers, refs(&["EXPEDIENTE", "FECHA"]));
        assert_eq!(out.rows[0], refs(&["100", "2023-01-01"]));
    }

    #[test]
    fn test_reorganize_fills_missing_reference_columns() {
        let table = Table {
            headers: refs(&["EXPEDIENTE"]),
            rows: vec![refs(&["100"])],
        };
        let out = reorganize_table(&table, &refs(&["EXPEDIENTE", "ESTADO"]), &BTreeMap::new());

        assert_eq!(out.headers, refs(&["EXPEDIENTE", "ESTADO"]));
        assert_eq!(out.rows[0], refs(&["100", ""]));
    }

    #[test]
    fn test_reorganize_appends_extra_columns() {
        let table = Table {
            headers: refs(&["EXPEDIENTE", "OBSERVACIONES"]),
            rows: vec![refs(&["100", "ninguna"])],
        };
        let out = reorganize_table(&table, &refs(&["EXPEDIENTE"]), &BTreeMap::new());

        assert_eq!(out.headers, refs(&["EXPEDIENTE", "OBSERVACIONES"]));
    }

    #[test]
    fn test_reorganize_applies_replacements() {
        let mut replacements = BTreeMap::new();
        replacements.insert("NRO_EXPEDIENTE".to_string(), "EXPEDIENTE".to_string());
        let table = Table {
            headers: refs(&["Nro Expediente"]),
            rows: vec![refs(&["100"])],
        };
        let out = reorganize_table(&table, &refs(&["EXPEDIENTE"]), &replacements);

        assert_eq!(out.headers, refs(&["EXPEDIENTE"]));
        assert_eq!(out.rows[0], refs(&["100"]));
    }

    #[test]
    fn test_duplicate_columns_keep_first() {
        let table = Table {
            headers: refs(&["ESTADO", "estado"]),
            rows: vec![refs(&["ABIERTO", "CERRADO"])],
        };
        let out = reorganize_table(&table, &refs(&["ESTADO"]), &BTreeMap::new());

        assert_eq!(out.headers, refs(&["ESTADO"]));
        assert_eq!(out.rows[0], refs(&["ABIERTO"]));
    }

    #[test]
    fn test_short_row_pads_empty() {
        let table = Table {
            headers: refs(&["A", "B"]),
            rows: vec![refs(&["1"])],
        };
        let out = reorganize_table(&table, &refs(&["B", "A"]), &BTreeMap::new());

        assert_eq!(out.rows[0], refs(&["", "1"]));
    }
}
