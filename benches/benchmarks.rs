//! Benchmarks for spoly polynomial operations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use num_rational::Rational64;

use spoly::Polynomial;

fn dense_f64(n: usize) -> Polynomial<f64> {
    Polynomial::from_coeffs((0..n).map(|i| (i % 7) as f64 + 1.0))
}

fn bench_poly_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("Poly Operations");

    let p_small = dense_f64(16);
    let p_medium = dense_f64(64);
    let p_large = dense_f64(256);

    // Polynomial multiplication (convolution)
    group.bench_function("mul_16x16", |bencher| {
        bencher.iter(|| black_box(&p_small) * black_box(&p_small))
    });

    group.bench_function("mul_64x64", |bencher| {
        bencher.iter(|| black_box(&p_medium) * black_box(&p_medium))
    });

    group.bench_function("add_256", |bencher| {
        bencher.iter(|| black_box(&p_large) + black_box(&p_medium))
    });

    // Polynomial evaluation
    let x = 0.5;
    group.bench_function("eval_16", |bencher| {
        bencher.iter(|| black_box(&p_small).eval(black_box(&x)))
    });

    group.bench_function("eval_256", |bencher| {
        bencher.iter(|| black_box(&p_large).eval(black_box(&x)))
    });

    group.finish();
}

fn bench_sparse_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sparse Operations");

    for degree in [64usize, 1024, 16384] {
        // x^degree + 3x^(degree/2) - 1
        let p = Polynomial::from_terms([(degree, 1i64), (degree / 2, 3), (0, -1)]);

        group.bench_with_input(BenchmarkId::new("mul", degree), &p, |bencher, p| {
            bencher.iter(|| black_box(p) * black_box(p))
        });
    }

    group.finish();
}

fn bench_poly_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("Poly Algorithms");

    let q = Rational64::from_integer;

    // (x^3 + x^2 + 2x + 1)(x + 2) and (x^2 + x + 1)(x + 2)
    let common = Polynomial::new(vec![q(2), q(1)]);
    let p1 = Polynomial::new(vec![q(1), q(2), q(1), q(1)]) * &common;
    let p2 = Polynomial::new(vec![q(1), q(1), q(1)]) * &common;

    group.bench_function("gcd", |bencher| {
        bencher.iter(|| Polynomial::gcd(black_box(&p1), black_box(&p2)))
    });

    group.bench_function("div_rem", |bencher| {
        bencher.iter(|| black_box(&p1).div_rem(black_box(&p2)))
    });

    let outer = Polynomial::new(vec![1i64, 0, 2, 0, 1]);
    let inner = Polynomial::new(vec![1i64, 1, 1]);
    group.bench_function("compose_deg4_deg2", |bencher| {
        bencher.iter(|| black_box(&outer).compose(black_box(&inner)))
    });

    group.bench_function("pow_8", |bencher| {
        bencher.iter(|| black_box(&inner).pow(8))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_poly_operations,
    bench_sparse_operations,
    bench_poly_algorithms,
);
criterion_main!(benches);
