//! Property-based tests for the COO invariants and arithmetic

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use sparsemat::{
    add, multiply, subtract, to_dense, MatrixConfig, RemovalPolicy, SparseError, SparseMatrix,
};

type Triplets = Vec<(usize, usize, i64)>;

/// Writes within an `n_rows × n_cols` matrix, zeros included
fn writes(n_rows: usize, n_cols: usize) -> impl Strategy<Value = Triplets> {
    prop::collection::vec((0..n_rows, 0..n_cols, -4i64..=4), 0..40)
}

fn shaped_writes() -> impl Strategy<Value = (usize, usize, Triplets)> {
    (1usize..6, 1usize..6).prop_flat_map(|(r, c)| (Just(r), Just(c), writes(r, c)))
}

fn same_shape_pair() -> impl Strategy<Value = (usize, usize, Triplets, Triplets)> {
    (1usize..6, 1usize..6)
        .prop_flat_map(|(r, c)| (Just(r), Just(c), writes(r, c), writes(r, c)))
}

fn chain_pair() -> impl Strategy<Value = (usize, usize, usize, Triplets, Triplets)> {
    (1usize..5, 1usize..5, 1usize..5)
        .prop_flat_map(|(m, n, p)| (Just(m), Just(n), Just(p), writes(m, n), writes(n, p)))
}

fn build(n_rows: usize, n_cols: usize, triplets: Triplets) -> SparseMatrix {
    SparseMatrix::from_triplets(n_rows, n_cols, triplets).unwrap()
}

fn assert_invariants(matrix: &SparseMatrix) {
    let coords: HashSet<_> = matrix.iter().map(|e| (e.row, e.col)).collect();
    assert_eq!(coords.len(), matrix.nnz(), "duplicate coordinates stored");
    assert!(matrix.iter().all(|e| e.value != 0), "zero value stored");
    assert!(matrix
        .iter()
        .all(|e| e.row < matrix.n_rows() && e.col < matrix.n_cols()));
    assert!(matrix.capacity() >= matrix.nnz());
}

proptest! {
    #[test]
    fn set_get_round_trip((n_rows, n_cols, ops) in shaped_writes(), stable in any::<bool>()) {
        let removal = if stable { RemovalPolicy::Stable } else { RemovalPolicy::SwapRemove };
        let config = MatrixConfig::compact().with_removal(removal);
        let mut matrix = SparseMatrix::with_config(n_rows, n_cols, config).unwrap();
        let mut model: HashMap<(usize, usize), i64> = HashMap::new();

        for &(row, col, value) in &ops {
            matrix.set(row, col, value).unwrap();
            if value == 0 {
                model.remove(&(row, col));
            } else {
                model.insert((row, col), value);
            }
        }

        for row in 0..n_rows {
            for col in 0..n_cols {
                let expected = model.get(&(row, col)).copied().unwrap_or(0);
                prop_assert_eq!(matrix.get(row, col), expected);
            }
        }
        prop_assert_eq!(matrix.nnz(), model.len());
        assert_invariants(&matrix);
    }

    #[test]
    fn out_of_bounds_set_is_rejected((n_rows, n_cols, ops) in shaped_writes(), value in 1i64..10) {
        let mut matrix = build(n_rows, n_cols, ops);
        let before = matrix.sorted_entries();

        let is_out_of_bounds = matches!(
            matrix.set(n_rows, 0, value),
            Err(SparseError::OutOfBounds { .. })
        );
        prop_assert!(is_out_of_bounds);
        prop_assert!(matrix.set(0, n_cols, value).is_err());
        prop_assert!(matrix.bounds_check(-1, 0).is_err());
        prop_assert_eq!(matrix.sorted_entries(), before);
    }

    #[test]
    fn additive_identity((n_rows, n_cols, ops) in shaped_writes()) {
        let a = build(n_rows, n_cols, ops);
        let zero = SparseMatrix::new(n_rows, n_cols).unwrap();

        prop_assert_eq!(&add(&a, &zero).unwrap(), &a);
        prop_assert_eq!(&add(&zero, &a).unwrap(), &a);
        prop_assert_eq!(&subtract(&a, &zero).unwrap(), &a);
    }

    #[test]
    fn subtraction_self_cancels((n_rows, n_cols, ops) in shaped_writes()) {
        let a = build(n_rows, n_cols, ops);
        prop_assert_eq!(subtract(&a, &a).unwrap().nnz(), 0);
    }

    #[test]
    fn add_and_subtract_match_dense((n_rows, n_cols, ops_a, ops_b) in same_shape_pair()) {
        let a = build(n_rows, n_cols, ops_a);
        let b = build(n_rows, n_cols, ops_b);

        let sum = add(&a, &b).unwrap();
        let diff = subtract(&a, &b).unwrap();

        prop_assert_eq!(to_dense(&sum), &to_dense(&a) + &to_dense(&b));
        prop_assert_eq!(to_dense(&diff), &to_dense(&a) - &to_dense(&b));
        assert_invariants(&sum);
        assert_invariants(&diff);
    }

    #[test]
    fn multiply_matches_dense((m, n, p, ops_a, ops_b) in chain_pair()) {
        let a = build(m, n, ops_a);
        let b = build(n, p, ops_b);

        let product = multiply(&a, &b).unwrap();

        prop_assert_eq!(product.shape(), (m, p));
        prop_assert_eq!(to_dense(&product), to_dense(&a).dot(&to_dense(&b)));
        assert_invariants(&product);
    }

    #[test]
    fn multiply_rejects_inner_mismatch(m in 1usize..5, n in 1usize..5, q in 1usize..5, p in 1usize..5) {
        prop_assume!(n != q);
        let a = SparseMatrix::<i64>::new(m, n).unwrap();
        let b = SparseMatrix::<i64>::new(q, p).unwrap();

        let is_mismatch = matches!(
            multiply(&a, &b),
            Err(SparseError::DimensionMismatch { .. })
        );
        prop_assert!(is_mismatch);
    }
}
