// File: crates/sensitivity-core/benches/normalize_bench.rs
// Summary: Criterion benches for normalization over synthetic leverage x rate sweeps.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sensitivity_core::{normalize, SamplePoint};

fn sweep(levels: usize, rates: usize) -> Vec<SamplePoint> {
    let mut out = Vec::with_capacity(levels * rates);
    for r in 0..rates {
        let wacc = 0.05 + r as f64 * 0.0025;
        for l in 0..levels {
            let lev = l as f64 * 0.25;
            out.push(SamplePoint::new(lev, wacc, 0.05 + lev * 0.02 - wacc * 0.5));
        }
    }
    out
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    for &(levels, rates) in &[(9usize, 5usize), (64, 40), (256, 120)] {
        let samples = sweep(levels, rates);
        group.bench_function(format!("{levels}x{rates}"), |b| {
            b.iter(|| black_box(normalize(black_box(&samples))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
