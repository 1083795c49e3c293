//! Benchmarks for ForwardList front operations, traversal, and cloning.
//!
//! Compares against std's doubly-linked `LinkedList`, the closest std
//! container with the same per-node allocation profile.

use std::collections::LinkedList;

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use forward_list::ForwardList;

const SIZES: &[usize] = &[64, 1024, 16384];

fn build_forward(n: usize) -> ForwardList<u64> {
    (0..n as u64).collect()
}

fn build_std(n: usize) -> LinkedList<u64> {
    (0..n as u64).collect()
}

// ============================================================================
// Push / pop
// ============================================================================

fn bench_push_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_front");
    for &n in SIZES {
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("forward_list", n), &n, |b, &n| {
            b.iter(|| {
                let mut list = ForwardList::new();
                for i in 0..n as u64 {
                    list.push_front(black_box(i));
                }
                list
            });
        });

        group.bench_with_input(BenchmarkId::new("std_linked_list", n), &n, |b, &n| {
            b.iter(|| {
                let mut list = LinkedList::new();
                for i in 0..n as u64 {
                    list.push_front(black_box(i));
                }
                list
            });
        });
    }
    group.finish();
}

fn bench_drain_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("drain_front");
    for &n in SIZES {
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("forward_list", n), &n, |b, &n| {
            b.iter_batched(
                || build_forward(n),
                |mut list| {
                    while let Some(value) = list.pop_front() {
                        black_box(value);
                    }
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("std_linked_list", n), &n, |b, &n| {
            b.iter_batched(
                || build_std(n),
                |mut list| {
                    while let Some(value) = list.pop_front() {
                        black_box(value);
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

// ============================================================================
// Traversal and clone
// ============================================================================

fn bench_iter_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("iter_sum");
    for &n in SIZES {
        group.throughput(Throughput::Elements(n as u64));

        let forward = build_forward(n);
        group.bench_with_input(BenchmarkId::new("forward_list", n), &forward, |b, list| {
            b.iter(|| black_box(list.iter().sum::<u64>()));
        });

        let std_list = build_std(n);
        group.bench_with_input(BenchmarkId::new("std_linked_list", n), &std_list, |b, list| {
            b.iter(|| black_box(list.iter().sum::<u64>()));
        });
    }
    group.finish();
}

fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");
    for &n in SIZES {
        group.throughput(Throughput::Elements(n as u64));

        let forward = build_forward(n);
        group.bench_with_input(BenchmarkId::new("forward_list", n), &forward, |b, list| {
            b.iter(|| list.clone());
        });

        let std_list = build_std(n);
        group.bench_with_input(BenchmarkId::new("std_linked_list", n), &std_list, |b, list| {
            b.iter(|| list.clone());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_push_front,
    bench_drain_front,
    bench_iter_sum,
    bench_clone
);
criterion_main!(benches);
