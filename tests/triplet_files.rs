//! Integration tests for loading and writing triplet files

use std::io::Write;

use sparsemat::triplet_io::{read_matrix, read_matrix_with_config, write_matrix};
use sparsemat::{multiply, LoadError, MatrixConfig, RemovalPolicy, SparseMatrix};
use tempfile::{tempdir, NamedTempFile};

/// Writes `contents` to a temporary file that is removed on drop
fn fixture(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_file_roundtrip() {
    let original = SparseMatrix::from_triplets(
        3,
        4,
        vec![(2, 3, -9), (0, 0, 1), (1, 2, 7)],
    )
    .unwrap();

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path().to_path_buf();

    write_matrix(&path, &original).unwrap();
    let contents = std::fs::read_to_string(&path).unwrap();
    let loaded = read_matrix(&path).unwrap();

    assert_eq!(contents, "rows=3\ncols=4\n(0, 0, 1)\n(1, 2, 7)\n(2, 3, -9)\n");
    assert_eq!(loaded, original);
}

#[test]
fn test_load_then_multiply() {
    let dir = tempdir().unwrap();
    let path_a = dir.path().join("a.txt");
    let path_b = dir.path().join("b.txt");
    std::fs::write(&path_a, "rows=2\ncols=2\n(0, 0, 1)\n\n(1, 1, 2)\n").unwrap();
    std::fs::write(&path_b, "rows=2\ncols=2\n(0, 0, 3)\n(0, 1, 4)\n").unwrap();

    let a = read_matrix(&path_a).unwrap();
    let b = read_matrix(&path_b).unwrap();

    let product = multiply(&a, &b).unwrap();
    let expected =
        SparseMatrix::from_triplets(2, 2, vec![(0, 0, 3), (0, 1, 4), (1, 0, 6), (1, 1, 8)]).unwrap();
    assert_eq!(product, expected);
}

#[test]
fn test_load_with_config() {
    let file = fixture("rows=1\ncols=1\n(0, 0, 1)\n");

    let config = MatrixConfig::compact().with_removal(RemovalPolicy::Stable);
    let matrix = read_matrix_with_config(file.path(), config.clone()).unwrap();

    assert_eq!(matrix.config(), &config);
    assert_eq!(matrix.get(0, 0), 1);
}

#[test]
fn test_malformed_file_reports_line() {
    let file = fixture("rows=2\ncols=2\n(0, 0, 1)\n(1; 1; 1)\n");

    let result = read_matrix(file.path());
    assert!(matches!(result, Err(LoadError::InvalidEntry { line: 4, .. })));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let result = read_matrix(dir.path().join("does-not-exist.txt"));
    assert!(matches!(result, Err(LoadError::Io(_))));
}
