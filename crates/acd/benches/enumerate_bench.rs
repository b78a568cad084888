//! Criterion benchmarks for whole-size enumeration (group "enumerate").
//!
//! - Word generation alone, to see what pruning costs.
//! - Full estimates for small sizes, sequential and on a frontier schedule.
//!
//! Estimates stay at size 4 and below so a run finishes in seconds.

use acd::api::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_words(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate");
    for &size in &[3usize, 4, 5] {
        let mut words = 0u64;
        for_each_word(Variant::PreAcd, size, |_| words += 1);
        group.throughput(Throughput::Elements(words));
        group.bench_with_input(BenchmarkId::new("words_pre_acd", size), &size, |b, &size| {
            b.iter(|| {
                let mut n = 0usize;
                for_each_word(Variant::PreAcd, size, |w| n += w.len());
                n
            })
        });
    }
    group.finish();
}

fn bench_estimates(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate");
    group.sample_size(10);
    let sequential = EnumCfg {
        parallel_from: usize::MAX,
        ..EnumCfg::default()
    };
    let frontier = EnumCfg {
        threads: 4,
        parallel_from: 1,
        schedule: Schedule::Frontier { depth: 3 },
        ..EnumCfg::default()
    };
    for &size in &[3usize, 4] {
        for variant in Variant::ALL {
            group.bench_with_input(
                BenchmarkId::new(format!("seq_{}", variant.slug()), size),
                &size,
                |b, &size| {
                    b.iter(|| {
                        compute_worst_case_estimates_with(variant, size, true, &sequential)
                            .unwrap()
                    })
                },
            );
            group.bench_with_input(
                BenchmarkId::new(format!("frontier_{}", variant.slug()), size),
                &size,
                |b, &size| {
                    b.iter(|| {
                        compute_worst_case_estimates_with(variant, size, true, &frontier).unwrap()
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_words, bench_estimates);
criterion_main!(benches);
