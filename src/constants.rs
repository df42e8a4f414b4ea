//! Centralized constants for the sparsemat library
//!
//! This module contains all hardcoded constants used throughout the codebase.
//! Constants are organized by category for easy reference and maintenance.

// ============================================================================
// STORAGE CONSTANTS
// ============================================================================

/// Initial entry capacity for a freshly created matrix
pub const DEFAULT_INITIAL_CAPACITY: usize = 1000;

/// Initial entry capacity used by `MatrixConfig::compact`
pub const COMPACT_INITIAL_CAPACITY: usize = 16;

/// Factor applied to the backing capacity when it is exhausted
pub const GROWTH_FACTOR: usize = 2;

// ============================================================================
// TEXT FORMAT CONSTANTS
// ============================================================================

/// Prefix of the header line declaring the number of rows
pub const ROWS_HEADER_PREFIX: &str = "rows=";

/// Prefix of the header line declaring the number of columns
pub const COLS_HEADER_PREFIX: &str = "cols=";

// ============================================================================
// DISPLAY CONSTANTS
// ============================================================================

/// Maximum number of entries to show in debug output
pub const MAX_DISPLAY_ENTRIES: usize = 10;
