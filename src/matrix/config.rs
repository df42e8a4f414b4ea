//! Configuration for sparse matrix storage and output

use crate::constants::{COMPACT_INITIAL_CAPACITY, DEFAULT_INITIAL_CAPACITY};

/// How an entry is removed when its value is set to zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemovalPolicy {
    /// Overwrite the removed slot with the last entry, O(1), disturbs order
    #[default]
    SwapRemove,
    /// Shift later entries down, O(n), preserves insertion order
    Stable,
}

/// Order in which entries are emitted by the line serializer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryOrder {
    /// Current storage order (insertion order, perturbed by swap removals)
    #[default]
    Storage,
    /// Sorted by row, then column
    RowMajor,
}

/// Configuration for a `SparseMatrix`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixConfig {
    /// Number of entries reserved up front; only affects allocation
    pub initial_capacity: usize,

    /// Removal strategy used by `set(.., 0)`
    pub removal: RemovalPolicy,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            removal: RemovalPolicy::SwapRemove,
        }
    }
}

impl MatrixConfig {
    /// Config with a small initial reservation, for many small matrices
    pub fn compact() -> Self {
        Self {
            initial_capacity: COMPACT_INITIAL_CAPACITY,
            ..Self::default()
        }
    }

    /// Config that keeps entries in insertion order across removals
    pub fn stable() -> Self {
        Self {
            removal: RemovalPolicy::Stable,
            ..Self::default()
        }
    }

    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_removal(mut self, removal: RemovalPolicy) -> Self {
        self.removal = removal;
        self
    }
}
