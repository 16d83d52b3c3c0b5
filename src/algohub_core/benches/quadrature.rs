#![allow(missing_docs, reason = "Unnecessary for benchmarks")]
#![allow(unused_results, reason = "Unnecessary for benchmarks")]
#![allow(clippy::missing_assert_message, reason = "Unnecessary for benchmarks")]

use std::hint::black_box;

use algohub_core::prelude::*;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

fn integrand(x: f64) -> f64 {
    x.sin() * (-x).exp()
}

#[allow(clippy::missing_panics_doc, reason = "Benchmarking only")]
pub fn quadrature_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Quadrature");

    for n in [10_usize, 1_000, 100_000] {
        for rule in [Quadrature::Trapezoidal, Quadrature::Rectangular] {
            group.bench_with_input(BenchmarkId::new(rule.name(), n), &n, |b, &n| {
                b.iter(|| {
                    rule.calculate(integrand, 0.0, black_box(std::f64::consts::PI), n)
                        .unwrap()
                });
            });
        }
    }
}

criterion_group!(quadrature, quadrature_benchmark);
criterion_main!(quadrature);
