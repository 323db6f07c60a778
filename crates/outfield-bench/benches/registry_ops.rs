//! Criterion micro-benchmarks for registration, queries, and the evaluation pass.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use outfield_bench::{cycle, reference_profile, stress_profile};
use outfield_core::FieldType;
use outfield_registry::FieldCollection;
use outfield_test_utils::fixtures::synthetic_history;

/// Benchmark: register 200 direct + 20 custom fields (including compilation).
fn bench_register_reference(c: &mut Criterion) {
    c.bench_function("register_reference", |b| {
        b.iter(|| black_box(synthetic_history(200, 20)));
    });
}

/// Benchmark: one full reporting cycle on the reference profile.
fn bench_cycle_reference(c: &mut Criterion) {
    let mut history = reference_profile();
    let mut iteration = 0u64;
    c.bench_function("cycle_reference", |b| {
        b.iter(|| {
            cycle(&mut history, iteration).unwrap();
            iteration += 1;
        });
    });
}

/// Benchmark: one full reporting cycle on the stress profile.
fn bench_cycle_stress(c: &mut Criterion) {
    let mut history = stress_profile();
    let mut iteration = 0u64;
    c.bench_function("cycle_stress", |b| {
        b.iter(|| {
            cycle(&mut history, iteration).unwrap();
            iteration += 1;
        });
    });
}

/// Benchmark: key lookup with group search over the reference profile.
fn bench_query_keys(c: &mut Criterion) {
    let history = reference_profile();
    let keys = ["D0", "G3", "D199", "C7", "MISSING"];
    c.bench_function("query_keys_reference", |b| {
        b.iter(|| black_box(history.fields_by_keys(black_box(&keys), true)));
    });
}

/// Benchmark: group query followed by a classification re-query of the subset.
fn bench_query_groups_then_type(c: &mut Criterion) {
    let history = reference_profile();
    c.bench_function("query_groups_then_type", |b| {
        b.iter(|| {
            let subset = history.fields_by_groups(&["G1", "G2", "CUSTOM"]).into_matches();
            black_box(FieldCollection::select_by_type(&[FieldType::Custom], &subset))
        });
    });
}

criterion_group!(
    benches,
    bench_register_reference,
    bench_cycle_reference,
    bench_cycle_stress,
    bench_query_keys,
    bench_query_groups_then_type
);
criterion_main!(benches);
