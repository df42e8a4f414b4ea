//! Reader and writer for the triplet text format
//!
//! ```text
//! rows=3
//! cols=3
//!
//! (0, 0, 1)
//! (2, 1, -4)
//! ```
//!
//! The first two lines declare the dimensions. Every following line is
//! either blank (skipped) or a `(<row>, <col>, <value>)` triple, which is
//! upserted into the matrix: a repeated coordinate overwrites the earlier
//! value and a zero value leaves the cell empty.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::constants::{COLS_HEADER_PREFIX, ROWS_HEADER_PREFIX};
use crate::error::LoadError;
use crate::matrix::{EntryOrder, MatrixConfig, Scalar, SparseMatrix};

type LoadResult<T> = std::result::Result<T, LoadError>;

/// Reads a matrix from a file
pub fn read_matrix<P: AsRef<Path>>(path: P) -> LoadResult<SparseMatrix<i64>> {
    read_matrix_with_config(path, MatrixConfig::default())
}

/// Reads a matrix from a file, using `config` for the new matrix
pub fn read_matrix_with_config<P: AsRef<Path>>(
    path: P,
    config: MatrixConfig,
) -> LoadResult<SparseMatrix<i64>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let matrix = from_reader(BufReader::new(file), config)?;
    debug!(
        "loaded {}: {}×{} with {} nnz",
        path.display(),
        matrix.n_rows(),
        matrix.n_cols(),
        matrix.nnz()
    );
    Ok(matrix)
}

/// Parses a matrix from an in-memory string
pub fn parse_str(input: &str) -> LoadResult<SparseMatrix<i64>> {
    from_reader(input.as_bytes(), MatrixConfig::default())
}

/// Parses a matrix from any buffered reader
pub fn from_reader<R: BufRead>(reader: R, config: MatrixConfig) -> LoadResult<SparseMatrix<i64>> {
    let mut lines = reader.lines().enumerate().map(|(i, line)| (i + 1, line));

    let n_rows = parse_header(lines.next(), ROWS_HEADER_PREFIX)?;
    let n_cols = parse_header(lines.next(), COLS_HEADER_PREFIX)?;

    let header_line = 2;
    let mut matrix = SparseMatrix::with_config(n_rows, n_cols, config)
        .map_err(|source| LoadError::Matrix { line: header_line, source })?;

    for (line_no, line) in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let (row, col, value) = parse_entry(&line).ok_or_else(|| LoadError::InvalidEntry {
            line: line_no,
            content: line.clone(),
        })?;

        let (row, col) = matrix
            .bounds_check(row, col)
            .map_err(|source| LoadError::Matrix { line: line_no, source })?;
        matrix
            .set(row, col, value)
            .map_err(|source| LoadError::Matrix { line: line_no, source })?;
    }

    Ok(matrix)
}

fn parse_header(
    line: Option<(usize, std::io::Result<String>)>,
    prefix: &'static str,
) -> LoadResult<usize> {
    let (line_no, line) = line.ok_or(LoadError::MissingHeader { expected: prefix })?;
    let line = line?;

    let parsed = line
        .trim()
        .strip_prefix(prefix)
        .and_then(|value| value.trim().parse().ok());

    parsed.ok_or(LoadError::InvalidHeader {
        line: line_no,
        content: line,
    })
}

/// Parses `(<row>, <col>, <value>)`, tolerating whitespace around tokens
fn parse_entry(line: &str) -> Option<(i64, i64, i64)> {
    let inner = line.trim().strip_prefix('(')?.strip_suffix(')')?;
    let mut fields = inner.split(',').map(str::trim);

    let row = fields.next()?.parse().ok()?;
    let col = fields.next()?.parse().ok()?;
    let value = fields.next()?.parse().ok()?;

    match fields.next() {
        None => Some((row, col, value)),
        Some(_) => None,
    }
}

/// Writes `matrix` in the triplet format
pub fn write_to<T: Scalar, W: Write>(
    mut writer: W,
    matrix: &SparseMatrix<T>,
    order: EntryOrder,
) -> std::io::Result<()> {
    writeln!(writer, "{}{}", ROWS_HEADER_PREFIX, matrix.n_rows())?;
    writeln!(writer, "{}{}", COLS_HEADER_PREFIX, matrix.n_cols())?;
    for line in matrix.lines_ordered(order) {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()
}

/// Writes `matrix` to a file in the triplet format, rows in row-major order
pub fn write_matrix<T: Scalar, P: AsRef<Path>>(path: P, matrix: &SparseMatrix<T>) -> std::io::Result<()> {
    let file = File::create(path)?;
    write_to(BufWriter::new(file), matrix, EntryOrder::RowMajor)
}

/// Renders `matrix` in the triplet format
pub fn to_string<T: Scalar>(matrix: &SparseMatrix<T>) -> String {
    let mut rendered = format!(
        "{}{}\n{}{}\n",
        ROWS_HEADER_PREFIX,
        matrix.n_rows(),
        COLS_HEADER_PREFIX,
        matrix.n_cols()
    );
    for line in matrix.lines_ordered(EntryOrder::RowMajor) {
        rendered.push_str(&line);
        rendered.push('\n');
    }
    rendered
}
