//! Error types for sparsemat

use thiserror::Error;

use crate::matrix::Operation;

/// Result type alias using the matrix error
pub type Result<T> = std::result::Result<T, SparseError>;

/// Errors surfaced by matrix construction, mutation and arithmetic
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SparseError {
    /// A matrix must have at least one row and one column
    #[error("Invalid dimensions {n_rows} × {n_cols}: both must be positive")]
    InvalidDimensions {
        /// Requested number of rows
        n_rows: usize,
        /// Requested number of columns
        n_cols: usize,
    },

    /// Coordinate outside the declared dimensions
    #[error("Index out of bounds (row: {row}, col: {col}) for {n_rows} × {n_cols} matrix")]
    OutOfBounds {
        /// Offending row, signed so that negative input can be reported
        row: i64,
        /// Offending column
        col: i64,
        /// Number of rows of the target matrix
        n_rows: usize,
        /// Number of columns of the target matrix
        n_cols: usize,
    },

    /// Operand shapes are incompatible for the operation
    #[error("Matrix dimensions do not match for {op}: {}×{} vs {}×{}", .lhs.0, .lhs.1, .rhs.0, .rhs.1)]
    DimensionMismatch {
        /// The operation that was attempted
        op: Operation,
        /// Shape of the left operand
        lhs: (usize, usize),
        /// Shape of the right operand
        rhs: (usize, usize),
    },

    /// Backing storage could not grow
    #[error("Memory allocation failed: could not reserve {requested} entries")]
    AllocationFailure {
        /// Number of additional entries requested
        requested: usize,
    },

    /// Integer overflow while computing a result cell
    #[error("Integer overflow during {op} at (row: {row}, col: {col})")]
    Overflow {
        /// The operation that overflowed
        op: Operation,
        /// Row of the result cell
        row: usize,
        /// Column of the result cell
        col: usize,
    },
}

/// Errors that can occur while loading a matrix from the text format
#[derive(Error, Debug)]
pub enum LoadError {
    /// Underlying I/O failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended before a header line
    #[error("Missing header line, expected `{expected}<int>`")]
    MissingHeader {
        /// Expected header prefix
        expected: &'static str,
    },

    /// Header line present but malformed
    #[error("Invalid header on line {line}: {content:?}")]
    InvalidHeader {
        /// 1-based line number
        line: usize,
        /// Raw line content
        content: String,
    },

    /// Entry line not of the form `(<row>, <col>, <value>)`
    #[error("Invalid element format on line {line}: {content:?}")]
    InvalidEntry {
        /// 1-based line number
        line: usize,
        /// Raw line content
        content: String,
    },

    /// The matrix rejected the declared dimensions or an entry
    #[error("Line {line}: {source}")]
    Matrix {
        /// 1-based line number
        line: usize,
        /// Error reported by the matrix
        #[source]
        source: SparseError,
    },
}
