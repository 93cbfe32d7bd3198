//! Spreadsheet specification documents.
//!
//! The first worksheet is read; its first row is the header. The first data
//! row also carries the document-level `title`, `description`, `target` and
//! `subject`. Every data row is one case:
//! - `name`
//! - `payload_json`: JSON call input, `{}` when blank
//! - `expected_json`: JSON expectation, `{}` when blank
//! - `edge_case`: `yes`/`true`/`1` (any case) routes the row to edge cases

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use casegen_core::{InputCase, Specification};
use serde_json::{Map, Value, json};

use crate::error::LoaderError;

/// Tag stamped on every spec loaded from a spreadsheet.
pub const EXCEL_TAG: &str = "excel";

/// Read the first worksheet of `path` and build a specification from it.
///
/// # Errors
///
/// Returns [`LoaderError::Workbook`] if the file cannot be opened or has no
/// readable sheet, and any error [`spec_from_rows`] reports.
pub fn load_excel_spec(path: &Path) -> Result<Specification, LoaderError> {
    let workbook_error = |message: String| LoaderError::Workbook {
        path: path.to_path_buf(),
        message,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| workbook_error(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| workbook_error("no worksheet found".to_string()))?
        .map_err(|e| workbook_error(e.to_string()))?;

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect::<Vec<_>>());
    let header = rows.next().unwrap_or_default();
    let rows = rows.collect::<Vec<_>>();

    tracing::debug!(path = %path.display(), rows = rows.len(), "read spreadsheet spec");
    spec_from_rows(&header, &rows)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Build a specification from a header row and data rows of cell text.
///
/// Header names are matched case-insensitively; missing columns read as
/// blank. Fully blank rows are skipped. Row numbers in errors are sheet row
/// numbers (the header is row 1).
///
/// # Errors
///
/// Returns [`LoaderError::EmptySheet`] when no data row remains and
/// [`LoaderError::CellJson`] when a JSON column holds invalid JSON.
pub fn spec_from_rows(header: &[String], rows: &[Vec<String>]) -> Result<Specification, LoaderError> {
    let columns = header
        .iter()
        .enumerate()
        .map(|(idx, name)| (name.trim().to_ascii_lowercase(), idx))
        .collect::<HashMap<_, _>>();
    let cell = |row: &[String], column: &str| -> String {
        columns
            .get(column)
            .and_then(|&idx| row.get(idx))
            .map(|text| text.trim().to_string())
            .unwrap_or_default()
    };

    let data_rows = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| (idx + 2, row))
        .filter(|(_, row)| row.iter().any(|text| !text.trim().is_empty()))
        .collect::<Vec<_>>();

    let Some((_, first)) = data_rows.first() else {
        return Err(LoaderError::EmptySheet);
    };

    let mut spec = Specification {
        title: cell(first, "title"),
        description: cell(first, "description"),
        target: cell(first, "target"),
        subject: cell(first, "subject"),
        metadata: BTreeMap::from([("tags".to_string(), json!([EXCEL_TAG]))]),
        ..Specification::default()
    };

    for (row_number, row) in data_rows {
        let mut record = Map::new();
        let name = cell(row, "name");
        if !name.is_empty() {
            record.insert("name".into(), Value::String(name));
        }

        let payload = parse_json_cell(&cell(row, "payload_json"), row_number, "payload_json")?;
        record.insert("payload".into(), payload.unwrap_or_else(|| json!({})));

        let expected = parse_json_cell(&cell(row, "expected_json"), row_number, "expected_json")?;
        record.insert("expected".into(), expected.unwrap_or_else(|| json!({})));

        let case = InputCase::from_record(Value::Object(record));
        if is_truthy(&cell(row, "edge_case")) {
            spec.edge_cases.push(case);
        } else {
            spec.inputs.push(case);
        }
    }

    Ok(spec.normalized())
}

fn parse_json_cell(text: &str, row: usize, column: &str) -> Result<Option<Value>, LoaderError> {
    if text.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(text)
        .map(Some)
        .map_err(|source| LoaderError::CellJson {
            row,
            column: column.to_string(),
            source,
        })
}

fn is_truthy(text: &str) -> bool {
    matches!(text.to_ascii_lowercase().as_str(), "yes" | "true" | "1")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| (*s).to_string()).collect()
    }

    fn header() -> Vec<String> {
        strings(&[
            "title",
            "description",
            "target",
            "subject",
            "name",
            "payload_json",
            "expected_json",
            "edge_case",
        ])
    }

    #[test]
    fn first_row_supplies_spec_fields_and_rows_route_by_flag() {
        let rows = vec![
            strings(&[
                "Login API",
                "Auth endpoint",
                "api",
                "login",
                "valid",
                r#"{"user":"a","pass":"b"}"#,
                r#"{"status":"success"}"#,
                "no",
            ]),
            strings(&["", "", "", "", "empty_pass", r#"{"user":"a","pass":""}"#, "", "YES"]),
            strings(&["", "", "", "", "numeric_flag", "", "", "1"]),
        ];

        let spec = spec_from_rows(&header(), &rows).unwrap();

        assert_eq!(spec.title, "Login API");
        assert_eq!(spec.description, "Auth endpoint");
        assert_eq!(spec.target, "api");
        assert_eq!(spec.subject, "login");
        assert_eq!(spec.tags(), vec!["excel".to_string()]);

        assert_eq!(spec.inputs.len(), 1);
        assert_eq!(spec.inputs[0].input(), &json!({"user": "a", "pass": "b"}));
        assert_eq!(spec.inputs[0].expected(), Some(&json!({"status": "success"})));

        assert_eq!(spec.edge_cases.len(), 2);
        assert_eq!(spec.edge_cases[0].name(), Some("empty_pass"));
        assert_eq!(spec.edge_cases[0].expected(), Some(&json!({})));
        assert_eq!(spec.edge_cases[1].input(), &json!({}));
    }

    #[test]
    fn blank_expected_cell_is_an_empty_expectation() {
        let header = strings(&["title", "name", "payload_json", "expected_json", "edge_case"]);
        let rows = vec![strings(&["T", "a", "{}", "", ""])];

        let spec = spec_from_rows(&header, &rows).unwrap();

        assert_eq!(spec.inputs[0].expected(), Some(&json!({})));
    }

    #[test]
    fn cell_text_stringifies_typed_cells() {
        assert_eq!(cell_text(&Data::Empty), "");
        assert_eq!(cell_text(&Data::String("yes".into())), "yes");
        assert_eq!(cell_text(&Data::Float(1.0)), "1");
        assert_eq!(cell_text(&Data::Int(1)), "1");
        assert_eq!(cell_text(&Data::Bool(true)), "true");
    }

    #[test]
    fn typed_flag_cells_route_rows_to_edge_cases() {
        let header = strings(&["title", "name", "edge_case"]);
        let rows = [
            vec![Data::String("T".into()), Data::String("float".into()), Data::Float(1.0)],
            vec![Data::Empty, Data::String("bool".into()), Data::Bool(true)],
            vec![Data::Empty, Data::String("int".into()), Data::Int(0)],
        ]
        .iter()
        .map(|row| row.iter().map(cell_text).collect::<Vec<_>>())
        .collect::<Vec<_>>();

        let spec = spec_from_rows(&header, &rows).unwrap();

        assert_eq!(spec.edge_cases.len(), 2);
        assert_eq!(spec.inputs.len(), 1);
        assert_eq!(spec.inputs[0].name(), Some("int"));
    }

    #[test]
    fn truthy_values_are_case_insensitive() {
        for value in ["yes", "TRUE", "True", "1", " yes "] {
            assert!(is_truthy(value.trim()), "{value} should be truthy");
        }
        for value in ["no", "false", "0", "", "y"] {
            assert!(!is_truthy(value), "{value} should not be truthy");
        }
    }

    #[test]
    fn header_matching_ignores_case_and_order() {
        let header = strings(&["Edge_Case", "NAME", "Title"]);
        let rows = vec![strings(&["true", "boundary", "Reordered"])];

        let spec = spec_from_rows(&header, &rows).unwrap();
        assert_eq!(spec.title, "Reordered");
        assert_eq!(spec.target, "function");
        assert_eq!(spec.edge_cases[0].name(), Some("boundary"));
    }

    #[test]
    fn blank_rows_are_skipped() {
        let rows = vec![
            strings(&["T", "", "api", "s", "a", "", "", ""]),
            strings(&["", "", "", "", "", "", "", ""]),
            strings(&["", "", "", "", "b", "", "", ""]),
        ];
        let spec = spec_from_rows(&header(), &rows).unwrap();
        assert_eq!(spec.inputs.len(), 2);
    }

    #[test]
    fn no_data_rows_is_an_error() {
        let rows = vec![strings(&["", ""])];
        let err = spec_from_rows(&header(), &rows).unwrap_err();
        assert!(matches!(err, LoaderError::EmptySheet));
    }

    #[test]
    fn invalid_json_names_row_and_column() {
        let rows = vec![
            strings(&["T", "", "api", "s", "ok", "{}", "", ""]),
            strings(&["", "", "", "", "broken", "{not json", "", ""]),
        ];
        let err = spec_from_rows(&header(), &rows).unwrap_err();
        match err {
            LoaderError::CellJson { row, column, .. } => {
                assert_eq!(row, 3);
                assert_eq!(column, "payload_json");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unreadable_workbook_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spec.xlsx");
        std::fs::write(&path, b"this is not a zip archive").unwrap();

        let err = load_excel_spec(&path).unwrap_err();
        assert!(matches!(err, LoaderError::Workbook { .. }));
        assert_eq!(err.kind(), casegen_core::ErrorKind::Io);
    }
}
