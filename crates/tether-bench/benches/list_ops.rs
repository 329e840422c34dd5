//! Criterion micro-benchmarks for list link, unlink, and traversal.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use tether::prelude::*;
use tether_bench::{arena_for, filled_list, shuffled_order, Entry};

const N: usize = 10_000;

/// Benchmark: steady-state queue churn, append at the tail and unlink at
/// the head, on a list holding 1K entries.
fn bench_queue_churn(c: &mut Criterion) {
    let (mut arena, list, _) = filled_list(1_000);
    c.bench_function("queue_churn_1k", |b| {
        b.iter(|| {
            let id = arena.unlink_head(list).unwrap().unwrap();
            arena.append_node(list, black_box(id)).unwrap();
        });
    });
}

/// Benchmark: insert 10K records and append each to an empty list.
fn bench_append_10k(c: &mut Criterion) {
    c.bench_function("append_10k", |b| {
        b.iter_batched(
            || arena_for(N),
            |mut arena| {
                let list = arena.new_list().unwrap();
                for seq in 0..N as u64 {
                    let id = arena.insert(Entry::new(seq)).unwrap();
                    arena.append_node(list, id).unwrap();
                }
                black_box(arena)
            },
            BatchSize::LargeInput,
        );
    });
}

/// Benchmark: unlink all 10K entries in random order, without the list handle.
fn bench_random_unlink_10k(c: &mut Criterion) {
    c.bench_function("random_unlink_10k", |b| {
        b.iter_batched(
            || {
                let (arena, list, ids) = filled_list(N);
                (arena, list, shuffled_order(&ids, 42))
            },
            |(mut arena, list, order)| {
                for id in order {
                    arena.node_unlink(id).unwrap();
                }
                black_box(arena.is_empty(list).unwrap())
            },
            BatchSize::LargeInput,
        );
    });
}

/// Benchmark: walk 10K entries front to back and back to front.
fn bench_traverse_10k(c: &mut Criterion) {
    let (arena, list, _) = filled_list(N);
    c.bench_function("traverse_10k", |b| {
        b.iter(|| {
            let forward = arena.iter(list).unwrap().count();
            let backward = arena.iter(list).unwrap().rev().count();
            black_box(forward + backward)
        });
    });
}

/// Benchmark: full well-formedness check of a 10K-entry list.
fn bench_validate_10k(c: &mut Criterion) {
    let (arena, list, _) = filled_list(N);
    c.bench_function("validate_10k", |b| {
        b.iter(|| black_box(arena.validate(list).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_queue_churn,
    bench_append_10k,
    bench_random_unlink_10k,
    bench_traverse_10k,
    bench_validate_10k
);
criterion_main!(benches);
