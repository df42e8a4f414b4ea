//! # sparsemat: coordinate-list sparse integer matrices
//!
//! A sparse matrix is stored as an unordered list of `(row, col, value)`
//! triples, one per nonzero cell. Dense arrays are never materialized by the
//! arithmetic; absent entries simply read as zero.
//!
//! ## Overview
//!
//! - [`SparseMatrix`]: the COO structure with coordinate lookup and upsert
//! - [`add`], [`subtract`], [`multiply`]: binary operations that build a new
//!   matrix and leave their operands untouched
//! - [`triplet_io`]: the `rows=` / `cols=` / `(r, c, v)` text format
//! - [`utils`]: conversions to `sprs` and `ndarray`
//!
//! ## Usage
//!
//! ```
//! use sparsemat::{SparseMatrix, add, multiply};
//!
//! let a = SparseMatrix::from_triplets(2, 2, vec![(0, 0, 1), (1, 1, 2)]).unwrap();
//! let b = SparseMatrix::from_triplets(2, 2, vec![(0, 0, 3), (0, 1, 4)]).unwrap();
//!
//! let sum = add(&a, &b).unwrap();
//! assert_eq!(sum.get(0, 0), 4);
//!
//! let product = multiply(&a, &b).unwrap();
//! assert_eq!(product.get(1, 1), 8);
//!
//! for line in product.lines() {
//!     println!("{}", line);
//! }
//! ```

pub mod constants;
pub mod error;
pub mod matrix;
pub mod triplet_io;
pub mod utils;

// Re-export primary components
pub use error::{LoadError, Result, SparseError};
pub use matrix::{add, multiply, subtract, Operation};
pub use matrix::{Entry, Scalar, SparseMatrix};
pub use matrix::config::{EntryOrder, MatrixConfig, RemovalPolicy};
pub use utils::{from_dense, from_sprs, to_dense, to_sprs_csr};

/// Version information for the sparsemat library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
