//! Benchmarks for COO matrix operations

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sparsemat::{add, multiply, subtract, SparseMatrix};

/// Banded matrix with `band` nonzeros per row around the diagonal
fn create_banded_matrix(n: usize, band: usize, scale: i64) -> SparseMatrix {
    let mut matrix = SparseMatrix::new(n, n).unwrap();
    for i in 0..n {
        for offset in 0..band {
            let col = (i + offset) % n;
            matrix.set(i, col, scale * (offset as i64 + 1)).unwrap();
        }
    }
    matrix
}

fn bench_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("set");
    for &n in &[50usize, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, &n| {
            bench.iter(|| black_box(create_banded_matrix(n, 3, 1)))
        });
    }
    group.finish();
}

fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");
    for &n in &[50usize, 100] {
        let a = create_banded_matrix(n, 3, 1);
        let b = create_banded_matrix(n, 3, 2);

        group.bench_with_input(BenchmarkId::new("add", n), &n, |bench, _| {
            bench.iter(|| add(black_box(&a), black_box(&b)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("subtract", n), &n, |bench, _| {
            bench.iter(|| subtract(black_box(&a), black_box(&b)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("multiply", n), &n, |bench, _| {
            bench.iter(|| multiply(black_box(&a), black_box(&b)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_set, bench_arithmetic);
criterion_main!(benches);
