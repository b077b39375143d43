//! Benchmark for IntList vs standard VecDeque.
//!
//! Compares the singly-linked IntList against Rust's standard VecDeque
//! for common operations at both ends and for a full-list fold.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use intlist::IntList;
use std::collections::VecDeque;
use std::hint::black_box;

// =============================================================================
// push Benchmark (prepend)
// =============================================================================

fn benchmark_push(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("push");

    for size in [100, 1000, 10000] {
        group.bench_with_input(
            BenchmarkId::new("IntList", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut list = IntList::new();
                    for index in 0..size {
                        list.push(black_box(index));
                    }
                    black_box(list)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("VecDeque", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut deque = VecDeque::new();
                    for index in 0..size {
                        deque.push_front(black_box(index));
                    }
                    black_box(deque)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// push_back Benchmark (append)
// =============================================================================

fn benchmark_push_back(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("push_back");

    for size in [100, 1000, 10000] {
        group.bench_with_input(
            BenchmarkId::new("IntList", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut list = IntList::new();
                    for index in 0..size {
                        list.push_back(black_box(index));
                    }
                    black_box(list)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("VecDeque", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut deque = VecDeque::new();
                    for index in 0..size {
                        deque.push_back(black_box(index));
                    }
                    black_box(deque)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// fold Benchmark (full traversal)
// =============================================================================

fn benchmark_fold(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("fold_left");

    for size in [100, 1000, 10000] {
        let list = IntList::range(1, size);
        let deque: VecDeque<i64> = (1..=size).collect();

        group.bench_with_input(BenchmarkId::new("IntList", size), &list, |bencher, list| {
            bencher.iter(|| {
                black_box(list.fold_left(0, |accumulator, value| accumulator + value))
            });
        });

        group.bench_with_input(
            BenchmarkId::new("VecDeque", size),
            &deque,
            |bencher, deque| {
                bencher.iter(|| black_box(deque.iter().fold(0i64, |accumulator, value| accumulator + value)));
            },
        );
    }

    group.finish();
}

// =============================================================================
// reverse Benchmark
// =============================================================================

fn benchmark_reverse(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("reverse");

    for size in [100, 1000, 10000] {
        let list = IntList::range(1, size);

        group.bench_with_input(BenchmarkId::new("IntList", size), &list, |bencher, list| {
            bencher.iter(|| black_box(list.reverse()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_push,
    benchmark_push_back,
    benchmark_fold,
    benchmark_reverse
);
criterion_main!(benches);
