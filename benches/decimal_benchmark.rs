// ============================================================================
// Scaled Decimal Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Arithmetic - add/mul/div at 18-decimal token magnitudes
// 2. Scale Conversion - scale_down under each rounding policy
// 3. Text - truncating parse and formatting
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scaled_decimal::prelude::*;

fn token(amount: &str) -> ScaledDecimal {
    to_fp(amount, 18).unwrap()
}

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    let a = token("123456789.123456789012345678");
    let b = token("0.000000000000000001");
    let usdc = to_fp("2500.25", 6).unwrap();

    group.bench_function("add_same_scale", |bench| {
        bench.iter(|| black_box(&a).add(black_box(&b)))
    });

    group.bench_function("add_mixed_scale", |bench| {
        bench.iter(|| black_box(&a).add(black_box(&usdc)))
    });

    group.bench_function("mul", |bench| {
        bench.iter(|| black_box(&a).mul(black_box(&usdc)))
    });

    group.bench_function("div", |bench| {
        bench.iter(|| black_box(&a).div(black_box(&usdc)))
    });

    group.bench_function("compare", |bench| {
        bench.iter(|| black_box(&a).lt(black_box(&usdc)))
    });

    group.finish();
}

// ============================================================================
// Scale Conversion Benchmarks
// ============================================================================

fn benchmark_scale_down(c: &mut Criterion) {
    let mut group = c.benchmark_group("scale_down");

    let notional = token("2750.5").mul(&to_fp("3120.456789", 6).unwrap()).unwrap();

    for policy in RoundingPolicy::ALL {
        group.bench_with_input(
            BenchmarkId::new("24_to_6", format!("{:?}", policy)),
            &policy,
            |bench, policy| bench.iter(|| black_box(&notional).scale_down(6, *policy)),
        );
    }

    group.finish();
}

// ============================================================================
// Text Benchmarks
// ============================================================================

fn benchmark_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");

    group.bench_function("to_fp", |bench| {
        bench.iter(|| to_fp(black_box("123456789.123456789012345678999"), 18))
    });

    let cap = max_uint256();
    group.bench_function("format_max_uint256", |bench| {
        bench.iter(|| black_box(&cap).format(None))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_arithmetic,
    benchmark_scale_down,
    benchmark_text
);
criterion_main!(benches);
