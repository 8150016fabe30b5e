//! Concatenation of cleaned exports into one consolidated table.

use caserec_model::Table;

/// Strip the `.0` suffix spreadsheet round-trips leave on integer cells.
pub fn clean_float_artifact(value: &str) -> &str {
    value.strip_suffix(".0").unwrap_or(value)
}

/// Stack tables vertically under the union of their headers.
///
/// Header order is first-seen across the inputs, with `source_column`
/// appended last carrying each table's label. Cells travel by column
/// name; columns absent from a given table are filled with empty
/// strings.
pub fn concat_tables(tables: &[(String, Table)], source_column: &str) -> Table {
    let mut headers: Vec<String> = Vec::new();
    for (_, table) in tables {
        for header in &table.headers {
            if !headers.contains(header) {
                headers.push(header.clone());
            }
        }
    }
    headers.push(source_column.to_string());

    let mut rows = Vec::new();
    for (label, table) in tables {
        for row in &table.rows {
            let mut out: Vec<String> = Vec::with_capacity(headers.len());
            for header in headers.iter().take(headers.len() - 1) {
                let value = table
                    .headers
                    .iter()
                    .position(|h| h == header)
                    .and_then(|index| row.get(index))
                    .map(|cell| clean_float_artifact(cell).to_string())
                    .unwrap_or_default();
                out.push(value);
            }
            out.push(label.clone());
            rows.push(out);
        }
    }

    Table { headers, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_clean_float_artifact() {
        assert_eq!(clean_float_artifact("123.0"), "123");
        assert_eq!(clean_float_artifact("123.05"), "123.05");
        assert_eq!(clean_float_artifact("abc"), "abc");
        assert_eq!(clean_float_artifact(""), "");
    }

    #[test]
    fn test_concat_union_headers() {
        let first = Table {
            headers: strings(&["A", "B"]),
            rows: vec![strings(&["1", "2"])],
        };
        let second = Table {
            headers: strings(&["B", "C"]),
            rows: vec![strings(&["3", "4"])],
        };
        let out = concat_tables(
            &[("uno.csv".to_string(), first), ("dos.csv".to_string(), second)],
            "ARCHIVO",
        );

        assert_eq!(out.headers, strings(&["A", "B", "C", "ARCHIVO"]));
        assert_eq!(out.rows[0], strings(&["1", "2", "", "uno.csv"]));
        assert_eq!(out.rows[1], strings(&["", "3", "4", "dos.csv"]));
    }

    #[test]
    fn test_concat_strips_float_artifacts() {
        let table = Table {
            headers: strings(&["N"]),
            rows: vec![strings(&["42.0"])],
        };
        let out = concat_tables(&[("f.csv".to_string(), table)], "ARCHIVO");

        assert_eq!(out.rows[0], strings(&["42", "f.csv"]));
    }

    #[test]
    fn test_concat_empty_input() {
        let out = concat_tables(&[], "ARCHIVO");

        assert_eq!(out.headers, strings(&["ARCHIVO"]));
        assert!(out.rows.is_empty());
    }
}
