//! Addition, subtraction and multiplication of COO matrices
//!
//! Every operation reads its operands and builds a fresh result; operands
//! are never mutated. Absent entries are treated as zero, and results only
//! ever store nonzero cells. Results inherit the left operand's
//! configuration.

use std::collections::HashMap;
use std::fmt;

use log::debug;
use num_traits::{NumCast, ToPrimitive};

use crate::error::{Result, SparseError};
use crate::matrix::coo::{Scalar, SparseMatrix};

/// A binary matrix operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    /// All operations, in menu order
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    /// Maps a menu selector (1 = add, 2 = subtract, 3 = multiply)
    pub fn from_selector(selector: u8) -> Option<Self> {
        match selector {
            1 => Some(Operation::Add),
            2 => Some(Operation::Subtract),
            3 => Some(Operation::Multiply),
            _ => None,
        }
    }

    pub fn selector(self) -> u8 {
        match self {
            Operation::Add => 1,
            Operation::Subtract => 2,
            Operation::Multiply => 3,
        }
    }

    /// Applies the operation to `a` and `b`
    pub fn apply<T: Scalar>(self, a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
        match self {
            Operation::Add => add(a, b),
            Operation::Subtract => subtract(a, b),
            Operation::Multiply => multiply(a, b),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "addition",
            Operation::Subtract => "subtraction",
            Operation::Multiply => "multiplication",
        };
        f.write_str(name)
    }
}

/// Computes `a + b`
///
/// # Errors
///
/// `DimensionMismatch` unless both operands have the same shape,
/// `Overflow` if a cell sum does not fit in `T`.
pub fn add<T: Scalar>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    require_same_shape(Operation::Add, a, b)?;
    let mut result = SparseMatrix::with_config(a.n_rows(), a.n_cols(), a.config().clone())?;

    // Cells stored in `a`, summed with whatever `b` holds there. A zero sum
    // is a no-op on the empty result.
    for e in a.iter() {
        let sum = e
            .value
            .checked_add(&b.get(e.row, e.col))
            .ok_or_else(|| overflow(Operation::Add, e.row, e.col))?;
        result.set(e.row, e.col, sum)?;
    }

    // Cells stored only in `b`
    for e in b.iter() {
        if a.get(e.row, e.col).is_zero() {
            result.set(e.row, e.col, e.value)?;
        }
    }

    finish(Operation::Add, a, b, result)
}

/// Computes `a - b`
///
/// # Errors
///
/// `DimensionMismatch` unless both operands have the same shape,
/// `Overflow` if a cell difference does not fit in `T`.
pub fn subtract<T: Scalar>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    require_same_shape(Operation::Subtract, a, b)?;
    let mut result = SparseMatrix::with_config(a.n_rows(), a.n_cols(), a.config().clone())?;

    for e in a.iter() {
        let diff = e
            .value
            .checked_sub(&b.get(e.row, e.col))
            .ok_or_else(|| overflow(Operation::Subtract, e.row, e.col))?;
        if !diff.is_zero() {
            result.set(e.row, e.col, diff)?;
        }
    }

    for e in b.iter() {
        if a.get(e.row, e.col).is_zero() {
            let negated = T::zero()
                .checked_sub(&e.value)
                .ok_or_else(|| overflow(Operation::Subtract, e.row, e.col))?;
            result.set(e.row, e.col, negated)?;
        }
    }

    finish(Operation::Subtract, a, b, result)
}

/// Computes the matrix product `a × b`
///
/// Every pair of entries whose inner coordinates meet (`a.col == b.row`)
/// contributes its product to the result cell `(a.row, b.col)`. Each cell is
/// summed exactly in 128-bit arithmetic and narrowed to `T` once, so the
/// outcome does not depend on the order entries are stored in. Cells whose
/// total is zero are not stored.
///
/// # Errors
///
/// `DimensionMismatch` unless `a.n_cols() == b.n_rows()`,
/// `Overflow` if a cell total does not fit in `T`, or if a single product
/// does not fit in `i128`.
pub fn multiply<T: Scalar>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    if a.n_cols() != b.n_rows() {
        return Err(mismatch(Operation::Multiply, a, b));
    }
    let mut result = SparseMatrix::with_config(a.n_rows(), b.n_cols(), a.config().clone())?;

    // Cells in first-touch order, plus an index into them by coordinate
    let mut cells: Vec<((usize, usize), ProductSum)> = Vec::new();
    let mut slots: HashMap<(usize, usize), usize> = HashMap::new();

    for ea in a.iter() {
        for eb in b.iter().filter(|eb| eb.row == ea.col) {
            let cell = (ea.row, eb.col);
            let product = ea
                .value
                .to_i128()
                .zip(eb.value.to_i128())
                .and_then(|(x, y)| x.checked_mul(y))
                .ok_or_else(|| overflow(Operation::Multiply, cell.0, cell.1))?;

            let slot = *slots.entry(cell).or_insert_with(|| {
                cells.push((cell, ProductSum::default()));
                cells.len() - 1
            });
            cells[slot].1.add(product);
        }
    }

    for ((row, col), sum) in cells {
        let value = sum
            .to_scalar::<T>()
            .ok_or_else(|| overflow(Operation::Multiply, row, col))?;
        result.set(row, col, value)?;
    }

    finish(Operation::Multiply, a, b, result)
}

/// Exact running sum of products, `low + carries × 2^128`
#[derive(Debug, Default, Clone, Copy)]
struct ProductSum {
    low: i128,
    carries: i64,
}

impl ProductSum {
    fn add(&mut self, product: i128) {
        let (low, wrapped) = self.low.overflowing_add(product);
        if wrapped {
            self.carries += if product > 0 { 1 } else { -1 };
        }
        self.low = low;
    }

    fn to_scalar<T: Scalar>(self) -> Option<T> {
        if self.carries == 0 {
            <T as NumCast>::from(self.low)
        } else {
            None
        }
    }
}

fn require_same_shape<T: Scalar>(op: Operation, a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<()> {
    if a.shape() == b.shape() {
        Ok(())
    } else {
        Err(mismatch(op, a, b))
    }
}

fn mismatch<T: Scalar>(op: Operation, a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> SparseError {
    SparseError::DimensionMismatch {
        op,
        lhs: a.shape(),
        rhs: b.shape(),
    }
}

fn overflow(op: Operation, row: usize, col: usize) -> SparseError {
    SparseError::Overflow { op, row, col }
}

fn finish<T: Scalar>(
    op: Operation,
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
    result: SparseMatrix<T>,
) -> Result<SparseMatrix<T>> {
    debug!(
        "{}: {} nnz ⊕ {} nnz -> {}×{} with {} nnz",
        op,
        a.nnz(),
        b.nnz(),
        result.n_rows(),
        result.n_cols(),
        result.nnz()
    );
    Ok(result)
}
