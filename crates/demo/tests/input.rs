// File: crates/demo/tests/input.rs
// Purpose: CSV loading: delimiters, skipped lines, column selection and per-row errors.

use xyplot_core::RowErrorKind;
use xyplot_demo::{read_series, InputOptions};

fn opts(delimiter: &str, y_columns: &str, skip_rows: u64) -> InputOptions {
    InputOptions { delimiter: delimiter.into(), x_column: 0, y_columns: y_columns.into(), skip_rows }
}

#[test]
fn reads_semicolon_default() {
    let csv = "0;1.5\n1;2.5\n2;0.5\n";
    let loaded = read_series(csv.as_bytes(), &InputOptions::default()).unwrap();
    assert_eq!(loaded.series.len(), 3);
    assert!(loaded.skipped.is_empty());
    assert_eq!(loaded.series.samples()[1].ys, vec![2.5]);
}

#[test]
fn header_lines_are_skipped_by_line_number() {
    let csv = "time,volt,amp\nunit,V,A\n0,1,10\n1,2,20\n";
    let loaded = read_series(csv.as_bytes(), &opts(",", "1 2", 2)).unwrap();
    assert_eq!(loaded.series.len(), 2);
    assert_eq!(loaded.series.columns(), 2);
    assert_eq!(loaded.series.samples()[1].ys, vec![2.0, 20.0]);
}

#[test]
fn tab_escape_selects_tab() {
    let csv = "1\t3\n2\t4\n";
    let loaded = read_series(csv.as_bytes(), &opts("\\t", "1", 0)).unwrap();
    assert_eq!(loaded.series.len(), 2);
}

#[test]
fn bad_rows_are_reported_and_skipped() {
    let csv = "0;1\n1;oops\n2\n3;4\n";
    let loaded = read_series(csv.as_bytes(), &InputOptions::default()).unwrap();
    assert_eq!(loaded.series.len(), 2);
    assert_eq!(loaded.skipped.len(), 2);
    assert_eq!(loaded.skipped[0].line, 2);
    assert!(matches!(loaded.skipped[0].kind, RowErrorKind::NotNumeric { column: 1, .. }));
    assert_eq!(loaded.skipped[1].line, 3);
    assert_eq!(loaded.skipped[1].kind, RowErrorKind::MissingField { column: 1 });
}

#[test]
fn invalid_utf8_is_a_row_error() {
    let mut bytes = b"0;1\n".to_vec();
    bytes.extend_from_slice(b"1;\xff\n");
    bytes.extend_from_slice(b"2;3\n");
    let loaded = read_series(bytes.as_slice(), &InputOptions::default()).unwrap();
    assert_eq!(loaded.series.len(), 2);
    assert_eq!(loaded.skipped.len(), 1);
    assert_eq!(loaded.skipped[0].kind, RowErrorKind::InvalidUtf8);
}

#[test]
fn bad_settings_fail_up_front() {
    assert!(read_series("0;1\n".as_bytes(), &opts(";;", "1", 0)).is_err());
    assert!(read_series("0;1\n".as_bytes(), &opts(";", "one", 0)).is_err());
    assert!(read_series("0;1\n".as_bytes(), &opts(";", " , ", 0)).is_err());
}
