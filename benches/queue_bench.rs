//! Criterion benchmarks for the stable priority queue.
//!
//! Uses shuffled integer workloads to measure pure structure overhead
//! independent of any element type.

use std::cmp::Ordering;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::prelude::*;
use stableheap::queue::PriorityQueue;

fn ascending(a: &u64, b: &u64) -> Ordering {
    a.cmp(b)
}

fn descending(a: &u64, b: &u64) -> Ordering {
    b.cmp(a)
}

fn shuffled(n: usize) -> Vec<u64> {
    let mut values: Vec<u64> = (0..n as u64).collect();
    values.shuffle(&mut rand::rng());
    values
}

fn bench_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("churn");
    for &n in &[1_000usize, 10_000] {
        let values = shuffled(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| {
                let mut queue = PriorityQueue::with_comparator(ascending);
                for &value in values {
                    queue.enqueue(black_box(value)).unwrap();
                }
                while let Some(value) = queue.dequeue().unwrap() {
                    black_box(value);
                }
            });
        });
    }
    group.finish();
}

fn bench_sorted_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_sorted_vec");
    for &n in &[1_000usize, 10_000] {
        let queue = PriorityQueue::from_iter_with(shuffled(n), ascending).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &queue, |b, queue| {
            b.iter(|| black_box(queue.to_sorted_vec().unwrap()));
        });
    }
    group.finish();
}

fn bench_comparator_replacement(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_comparator");
    for &n in &[1_000usize, 10_000] {
        let values = shuffled(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter_batched(
                || PriorityQueue::from_iter_with(values.clone(), ascending).unwrap(),
                |mut queue| {
                    queue.set_comparator(descending).unwrap();
                    queue
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_churn,
    bench_sorted_snapshot,
    bench_comparator_replacement
);
criterion_main!(benches);
