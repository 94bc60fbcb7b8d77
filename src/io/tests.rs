use super::*;
use crate::error::MatrixError;
use crate::helpers::test_helpers::{generate_random_sparse, generate_random_sparse_int};
use std::io::Cursor;

fn parse(text: &str) -> Result<SparseMatrix<i64>> {
    read_matrix(Cursor::new(text))
}

fn format_reason(err: LoadError) -> String {
    match err {
        LoadError::Format { reason, .. } => reason,
        other => panic!("expected a format error, got {:?}", other),
    }
}

#[test]
fn reads_well_formed_file() {
    let m = parse("rows=2\ncols=3\n(0, 1, 5)\n\n  (2, 3, -4)  \n(1,0,+7)\n").unwrap();
    assert_eq!(m.shape(), (3, 4));
    assert_eq!(m.nnz(), 3);
    assert_eq!(m.get(0, 1).unwrap(), 5);
    assert_eq!(m.get(2, 3).unwrap(), -4);
    assert_eq!(m.get(1, 0).unwrap(), 7);
}

#[test]
fn zero_entries_are_not_stored() {
    let m = parse("rows=1\ncols=1\n(0, 0, 3)\n(1, 1, 0)\n(0, 0, 0)\n").unwrap();
    assert!(m.is_zero());
}

#[test]
fn reads_file_without_entries() {
    let m = parse("cols=4\nrows=0\n").unwrap();
    assert_eq!(m.shape(), (1, 5));
    assert!(m.is_zero());
}

#[test]
fn reads_float_values() {
    let m: SparseMatrix<f64> = read_matrix(Cursor::new("rows=1\ncols=1\n(1, 0, -2.5)\n")).unwrap();
    assert_eq!(m.get(1, 0).unwrap(), -2.5);
}

#[test]
fn rejects_repeated_dimensions() {
    let reason = format_reason(parse("rows=2\nrows=3\ncols=1\n").unwrap_err());
    assert!(reason.contains("'rows' specified multiple times"));
    let reason = format_reason(parse("rows=2\ncols=1\ncols=1\n").unwrap_err());
    assert!(reason.contains("'cols' specified multiple times"));
}

#[test]
fn rejects_missing_dimensions() {
    let reason = format_reason(parse("rows=2\n").unwrap_err());
    assert!(reason.contains("missing"));
    assert!(parse("").is_err());
}

#[test]
fn rejects_entries_before_dimensions() {
    let reason = format_reason(parse("rows=2\n(0, 0, 1)\ncols=2\n").unwrap_err());
    assert!(reason.contains("before data entries"));
}

#[test]
fn rejects_malformed_dimension_values() {
    let reason = format_reason(parse("rows=two\ncols=1\n").unwrap_err());
    assert!(reason.contains("not an integer"));
    let reason = format_reason(parse("rows=-2\ncols=1\n").unwrap_err());
    assert!(reason.contains("less than -1"));
}

#[test]
fn empty_dimension_is_invalid() {
    match parse("rows=-1\ncols=3\n") {
        Err(LoadError::Matrix(MatrixError::InvalidDimension { rows: 0, cols: 4 })) => {}
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn rejects_malformed_entries() {
    for text in [
        "rows=1\ncols=1\n(0, 0)\n",
        "rows=1\ncols=1\n(0, 0, 1, 2)\n",
        "rows=1\ncols=1\n(a, 0, 1)\n",
        "rows=1\ncols=1\n(0, 0, 1.5)\n",
    ] {
        let reason = format_reason(parse(text).unwrap_err());
        assert!(reason.contains("invalid data entry on line 3"), "{}", reason);
    }
}

#[test]
fn rejects_out_of_bounds_entries() {
    let reason = format_reason(parse("rows=2\ncols=2\n(3, 0, 1)\n").unwrap_err());
    assert!(reason.contains("(3,0) out of bounds"));
    let reason = format_reason(parse("rows=2\ncols=2\n(0, -1, 5)\n").unwrap_err());
    assert!(reason.contains("(0,-1) out of bounds"));
}

#[test]
fn rejects_unrecognized_lines() {
    match parse("rows=1\ncols=1\n\nhello\n").unwrap_err() {
        LoadError::Format { line, reason } => {
            assert_eq!(line, Some(4));
            assert!(reason.contains("line 4"));
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn writes_sorted_entries() {
    let m = SparseMatrix::from_triplets(3, 2, vec![(2, 1, 8), (0, 1, -1), (0, 0, 4)]).unwrap();
    let mut out = Vec::new();
    write_matrix(&mut out, &m).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "rows=2\ncols=1\n(0, 0, 4)\n(0, 1, -1)\n(2, 1, 8)\n"
    );
}

#[test]
fn write_then_read_gives_equal_matrix() {
    for m in [
        generate_random_sparse_int(13, 7, 0.2, 5, 42),
        SparseMatrix::new(4, 4).unwrap(),
    ] {
        let mut out = Vec::new();
        write_matrix(&mut out, &m).unwrap();
        let back: SparseMatrix<i64> = read_matrix(Cursor::new(out)).unwrap();
        assert_eq!(back, m);
    }
}

#[test]
fn save_then_load_float_matrix() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("matrix.txt");
    let m = generate_random_sparse(9, 9, 0.3, 8);
    save(&path, &m).unwrap();
    let back: SparseMatrix<f64> = load(&path).unwrap();
    // `Display` for floats prints the shortest representation that parses back exactly
    assert_eq!(back, m);
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");
    match load::<i64, _>(&path) {
        Err(LoadError::Open { path: p, .. }) => assert_eq!(p, path),
        other => panic!("unexpected result {:?}", other),
    }
}
