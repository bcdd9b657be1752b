//! Benchmark for the evaluators.
//!
//! Measures the structural recursion of each evaluator over inputs of
//! growing size.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use shapewright::prelude::*;
use std::hint::black_box;

fn flat_sequence(size: usize) -> Sequence {
    (0..size).map(|index| Shape::number(index as i64)).collect()
}

fn nested_sequence(size: usize) -> Sequence {
    (0..size)
        .map(|index| {
            let inner: Sequence = (0..4).map(|offset| Shape::number((index + offset) as i64)).collect();
            Shape::Sequence(inner)
        })
        .collect()
}

fn wide_record(size: usize) -> Record {
    (0..size)
        .map(|index| (Text::from(format!("key{index}")), Shape::number(index as i64)))
        .collect()
}

fn left_spine(depth: usize) -> Tree {
    (0..depth).fold(Tree::empty(), |subtree, index| {
        Tree::node(index as i64, subtree, Tree::empty())
    })
}

// =============================================================================
// Sequence Evaluator Benchmark
// =============================================================================

fn benchmark_sequence(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sequence");

    for size in [100, 1000, 10000] {
        let flat = flat_sequence(size);
        group.bench_with_input(BenchmarkId::new("reverse", size), &flat, |bencher, input| {
            bencher.iter(|| black_box(sequence::reverse(black_box(input))));
        });

        let nested = nested_sequence(size);
        group.bench_with_input(BenchmarkId::new("flatten", size), &nested, |bencher, input| {
            bencher.iter(|| black_box(sequence::flatten(black_box(input), FlattenDepth::Unlimited)));
        });

        let target = Shape::number(size as i64 - 1);
        group.bench_with_input(BenchmarkId::new("includes", size), &flat, |bencher, input| {
            bencher.iter(|| black_box(sequence::includes(black_box(input), &target)));
        });
    }

    group.finish();
}

// =============================================================================
// Text Evaluator Benchmark
// =============================================================================

fn benchmark_text(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("text");

    for size in [100, 1000, 10000] {
        let padded = Text::from(format!("{}{}{}", " ".repeat(size), "x".repeat(size), "\t".repeat(size)));
        group.bench_with_input(BenchmarkId::new("trim", size), &padded, |bencher, input| {
            bencher.iter(|| black_box(text::trim(black_box(input))));
        });

        let repeated = Text::from("ab".repeat(size));
        group.bench_with_input(BenchmarkId::new("replace_all", size), &repeated, |bencher, input| {
            bencher.iter(|| black_box(text::replace_all(black_box(input), "a", "xyz")));
        });
    }

    group.finish();
}

// =============================================================================
// Record Evaluator Benchmark
// =============================================================================

fn benchmark_record(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("record");

    for size in [10, 100, 1000] {
        let record = wide_record(size);
        let keys: Vec<String> = (0..size).step_by(2).map(|index| format!("key{index}")).collect();
        let keys: Vec<&str> = keys.iter().map(String::as_str).collect();

        group.bench_with_input(BenchmarkId::new("pick", size), &record, |bencher, input| {
            bencher.iter(|| black_box(record::pick(black_box(input), &keys)));
        });

        group.bench_with_input(BenchmarkId::new("merge", size), &record, |bencher, input| {
            bencher.iter(|| black_box(record::merge(black_box(input), black_box(input))));
        });
    }

    group.finish();
}

// =============================================================================
// Tree Evaluator Benchmark
// =============================================================================

fn benchmark_tree(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("tree");

    for depth in [100, 1000, 10000] {
        let spine = left_spine(depth);
        group.bench_with_input(
            BenchmarkId::new("inorder_traversal", depth),
            &spine,
            |bencher, input| {
                bencher.iter(|| black_box(tree::inorder_traversal(black_box(input))));
            },
        );
        std::mem::forget(spine);
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_sequence,
    benchmark_text,
    benchmark_record,
    benchmark_tree
);

criterion_main!(benches);
