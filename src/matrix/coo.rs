//! Coordinate-list (COO) sparse matrix implementation

use std::fmt;

use log::{debug, trace};
use num_traits::{PrimInt, Signed};

use crate::constants::{GROWTH_FACTOR, MAX_DISPLAY_ENTRIES};
use crate::error::{Result, SparseError};
use crate::matrix::config::{EntryOrder, MatrixConfig, RemovalPolicy};

/// Signed primitive integer usable as a matrix value
pub trait Scalar: PrimInt + Signed + Default + fmt::Display + fmt::Debug {}

impl<T> Scalar for T where T: PrimInt + Signed + Default + fmt::Display + fmt::Debug {}

/// A single stored cell: a (row, col, value) triple with a nonzero value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entry<T> {
    pub row: usize,
    pub col: usize,
    pub value: T,
}

impl<T: fmt::Display> fmt::Display for Entry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.row, self.col, self.value)
    }
}

/// A sparse integer matrix in coordinate (COO) format
///
/// Only nonzero cells are stored, as an unordered list of `Entry` triples.
/// The list never contains two entries with the same coordinate and never
/// contains a zero value: writing zero to a cell deletes its entry.
///
/// Lookups and upserts scan the entry list linearly, so the structure suits
/// small to moderate nonzero counts. Entry order is incidental: it follows
/// insertion order, perturbed by swap removals unless the matrix is
/// configured with `RemovalPolicy::Stable`.
#[derive(Clone)]
pub struct SparseMatrix<T = i64> {
    n_rows: usize,
    n_cols: usize,
    entries: Vec<Entry<T>>,
    config: MatrixConfig,
}

impl<T: Scalar> SparseMatrix<T> {
    /// Creates an empty matrix with the default configuration
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` if either dimension is zero, `AllocationFailure`
    /// if the initial storage cannot be reserved.
    pub fn new(n_rows: usize, n_cols: usize) -> Result<Self> {
        Self::with_config(n_rows, n_cols, MatrixConfig::default())
    }

    /// Creates an empty matrix, same as `new`
    pub fn zeros(n_rows: usize, n_cols: usize) -> Result<Self> {
        Self::new(n_rows, n_cols)
    }

    /// Creates an empty matrix with an explicit configuration
    pub fn with_config(n_rows: usize, n_cols: usize, config: MatrixConfig) -> Result<Self> {
        if n_rows == 0 || n_cols == 0 {
            return Err(SparseError::InvalidDimensions { n_rows, n_cols });
        }

        let mut entries = Vec::new();
        entries
            .try_reserve_exact(config.initial_capacity)
            .map_err(|_| SparseError::AllocationFailure {
                requested: config.initial_capacity,
            })?;

        Ok(Self {
            n_rows,
            n_cols,
            entries,
            config,
        })
    }

    /// Creates an `n × n` identity matrix
    pub fn identity(n: usize) -> Result<Self> {
        let mut matrix = Self::new(n, n)?;
        for i in 0..n {
            matrix.set(i, i, T::one())?;
        }
        Ok(matrix)
    }

    /// Builds a matrix by upserting each triple in order
    ///
    /// Later triples overwrite earlier ones at the same coordinate and zero
    /// values delete, exactly as a sequence of `set` calls would.
    pub fn from_triplets<I>(n_rows: usize, n_cols: usize, triplets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::new(n_rows, n_cols)?;
        for (row, col, value) in triplets {
            matrix.set(row, col, value)?;
        }
        Ok(matrix)
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Returns `(n_rows, n_cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    /// Returns the number of stored (nonzero) entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the allocated entry capacity, always `>= nnz()`
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    pub fn config(&self) -> &MatrixConfig {
        &self.config
    }

    /// Stored entries in storage order
    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    /// Iterates over stored entries in storage order
    pub fn iter(&self) -> impl Iterator<Item = &Entry<T>> {
        self.entries.iter()
    }

    /// Returns the value at `(row, col)`, or zero if no entry is stored
    ///
    /// This is a pure lookup over the stored entries. Coordinates are not
    /// checked against the dimensions; out-of-range coordinates read as zero.
    pub fn get(&self, row: usize, col: usize) -> T {
        self.position(row, col)
            .map_or_else(T::zero, |i| self.entries[i].value)
    }

    /// Returns true if an entry is stored at `(row, col)`
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.position(row, col).is_some()
    }

    /// Converts signed coordinates into checked indices for this matrix
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if either coordinate is negative or not below the
    /// corresponding dimension.
    pub fn bounds_check(&self, row: i64, col: i64) -> Result<(usize, usize)> {
        let checked = |idx: i64, limit: usize| usize::try_from(idx).ok().filter(|&i| i < limit);

        match (checked(row, self.n_rows), checked(col, self.n_cols)) {
            (Some(r), Some(c)) => Ok((r, c)),
            _ => Err(SparseError::OutOfBounds {
                row,
                col,
                n_rows: self.n_rows,
                n_cols: self.n_cols,
            }),
        }
    }

    /// Upserts the value at `(row, col)`
    ///
    /// - existing entry, nonzero value: overwritten
    /// - existing entry, zero value: removed
    /// - no entry, nonzero value: appended, doubling capacity when full
    /// - no entry, zero value: no-op
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if the coordinate lies outside the matrix, and
    /// `AllocationFailure` if storage cannot grow. The matrix is unchanged
    /// in both cases.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if row >= self.n_rows || col >= self.n_cols {
            return Err(SparseError::OutOfBounds {
                row: i64::try_from(row).unwrap_or(i64::MAX),
                col: i64::try_from(col).unwrap_or(i64::MAX),
                n_rows: self.n_rows,
                n_cols: self.n_cols,
            });
        }

        match self.position(row, col) {
            Some(i) if value.is_zero() => {
                self.remove_at(i);
            }
            Some(i) => {
                self.entries[i].value = value;
            }
            None if value.is_zero() => {}
            None => {
                self.grow_if_full()?;
                self.entries.push(Entry { row, col, value });
            }
        }

        trace!("set ({}, {}) = {}, nnz = {}", row, col, value, self.entries.len());
        Ok(())
    }

    /// Removes the entry at `(row, col)`, returning its value if present
    pub fn remove(&mut self, row: usize, col: usize) -> Option<T> {
        let i = self.position(row, col)?;
        Some(self.remove_at(i).value)
    }

    /// Serializes each stored entry as `(row, col, value)`, in storage order
    ///
    /// The iterator borrows the matrix, so calling this again without an
    /// intervening mutation yields the same sequence.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(ToString::to_string)
    }

    /// Serializes each stored entry in the requested order
    pub fn lines_ordered(&self, order: EntryOrder) -> Box<dyn Iterator<Item = String> + '_> {
        match order {
            EntryOrder::Storage => Box::new(self.lines()),
            EntryOrder::RowMajor => {
                Box::new(self.sorted_entries().into_iter().map(|e| e.to_string()))
            }
        }
    }

    /// Copies the entries sorted by row, then column
    pub fn sorted_entries(&self) -> Vec<Entry<T>> {
        let mut sorted = self.entries.clone();
        sorted.sort_unstable_by_key(|e| (e.row, e.col));
        sorted
    }

    fn position(&self, row: usize, col: usize) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.row == row && e.col == col)
    }

    fn remove_at(&mut self, i: usize) -> Entry<T> {
        match self.config.removal {
            RemovalPolicy::SwapRemove => self.entries.swap_remove(i),
            RemovalPolicy::Stable => self.entries.remove(i),
        }
    }

    fn grow_if_full(&mut self) -> Result<()> {
        let current = self.entries.capacity();
        if self.entries.len() < current {
            return Ok(());
        }

        // Reserve so that the new capacity is GROWTH_FACTOR times the old one
        let additional = current.max(1) * (GROWTH_FACTOR - 1);
        self.entries
            .try_reserve_exact(additional)
            .map_err(|_| SparseError::AllocationFailure {
                requested: additional,
            })?;

        debug!(
            "grew entry storage from {} to {} ({} × {} matrix)",
            current,
            self.entries.capacity(),
            self.n_rows,
            self.n_cols
        );
        Ok(())
    }
}

/// Two matrices are equal when they have the same shape and the same
/// nonzero cells, regardless of storage order or configuration.
impl<T: Scalar> PartialEq for SparseMatrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape()
            && self.nnz() == other.nnz()
            && self.iter().all(|e| other.get(e.row, e.col) == e.value)
    }
}

impl<T: Scalar> Eq for SparseMatrix<T> {}

impl<T: Scalar> fmt::Debug for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {} (capacity {})", self.nnz(), self.capacity())?;

        if !self.entries.is_empty() {
            write!(f, "  entries: ")?;
            for entry in self.entries.iter().take(MAX_DISPLAY_ENTRIES) {
                write!(f, "{} ", entry)?;
            }
            if self.nnz() > MAX_DISPLAY_ENTRIES {
                write!(f, "... ({} more)", self.nnz() - MAX_DISPLAY_ENTRIES)?;
            }
            writeln!(f)?;
        }

        write!(f, "}}")
    }
}
