//! Benchmarks for status filtering over large todo lists.
//!
//! Note: Full benchmarks require the crate to expose library functions.
//! These benchmarks mirror the filtering and counting passes over a list
//! shaped like the application's todo list.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

#[derive(Clone)]
struct Row {
    completed: bool,
    title: String,
}

fn rows(n: usize) -> Vec<Row> {
    (0..n)
        .map(|i| Row {
            completed: i % 3 == 0,
            title: format!("todo {}", i),
        })
        .collect()
}

fn bench_filter_active(c: &mut Criterion) {
    let todos = rows(10_000);
    c.bench_function("filter_active_10k", |b| {
        b.iter(|| {
            black_box(&todos)
                .iter()
                .filter(|row| !row.completed)
                .cloned()
                .collect::<Vec<_>>()
        })
    });
}

fn bench_filter_completed(c: &mut Criterion) {
    let todos = rows(10_000);
    c.bench_function("filter_completed_10k", |b| {
        b.iter(|| {
            black_box(&todos)
                .iter()
                .filter(|row| row.completed)
                .cloned()
                .collect::<Vec<_>>()
        })
    });
}

fn bench_active_count(c: &mut Criterion) {
    let todos = rows(10_000);
    c.bench_function("active_count_10k", |b| {
        b.iter(|| black_box(&todos).iter().filter(|row| !row.completed).count())
    });
}

criterion_group!(
    benches,
    bench_filter_active,
    bench_filter_completed,
    bench_active_count
);
criterion_main!(benches);
