// Matrix data structures and operations

pub mod arithmetic;
pub mod config;
pub mod coo;

pub use arithmetic::{add, multiply, subtract, Operation};
pub use config::{EntryOrder, MatrixConfig, RemovalPolicy};
pub use coo::{Entry, Scalar, SparseMatrix};
