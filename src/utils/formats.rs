//! Utilities for converting between our COO matrix and external libraries

use ndarray::Array2;
use sprs::CsMat;

use crate::error::Result;
use crate::matrix::{Scalar, SparseMatrix};

/// Converts a COO matrix to sprs CsMat in CSR format
pub fn to_sprs_csr<T: Scalar>(matrix: &SparseMatrix<T>) -> CsMat<T> {
    // Entries are unique per coordinate, so sorting gives valid CSR order
    let sorted = matrix.sorted_entries();

    let mut row_counts = vec![0usize; matrix.n_rows()];
    for entry in &sorted {
        row_counts[entry.row] += 1;
    }

    let row_ptr: Vec<usize> = std::iter::once(0)
        .chain(row_counts.iter().scan(0, |end, &count| {
            *end += count;
            Some(*end)
        }))
        .collect();
    let col_idx = sorted.iter().map(|e| e.col).collect();
    let values = sorted.iter().map(|e| e.value).collect();

    CsMat::new(matrix.shape(), row_ptr, col_idx, values)
}

/// Converts an sprs matrix (CSR or CSC) to a COO matrix
///
/// Explicitly stored zeros are dropped.
pub fn from_sprs<T: Scalar>(matrix: &CsMat<T>) -> Result<SparseMatrix<T>> {
    let (n_rows, n_cols) = matrix.shape();
    let mut result = SparseMatrix::new(n_rows, n_cols)?;

    for (&value, (row, col)) in matrix.iter() {
        result.set(row, col, value)?;
    }

    Ok(result)
}

/// Materializes a COO matrix as a dense ndarray
pub fn to_dense<T: Scalar>(matrix: &SparseMatrix<T>) -> Array2<T> {
    let mut dense = Array2::zeros(matrix.shape());
    for entry in matrix.iter() {
        dense[[entry.row, entry.col]] = entry.value;
    }
    dense
}

/// Builds a COO matrix from the nonzero cells of a dense ndarray
pub fn from_dense<T: Scalar>(dense: &Array2<T>) -> Result<SparseMatrix<T>> {
    let (n_rows, n_cols) = dense.dim();
    let mut result = SparseMatrix::new(n_rows, n_cols)?;

    for ((row, col), &value) in dense.indexed_iter() {
        result.set(row, col, value)?;
    }

    Ok(result)
}
