//! Benchmarks for confdiff alignment and navigation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use confdiff::core::{Algorithm, ChangeNavigator, DiffOptions, DiffResult, TextBuffer};

/// A config-like document of `n` keys; keys in `edited` get a different value.
fn document(n: usize, edited: &[usize]) -> TextBuffer {
    let mut buf = String::with_capacity(n * 24);
    for i in 0..n {
        if edited.contains(&i) {
            buf.push_str(&format!("setting_{} = \"edited\"\n", i));
        } else {
            buf.push_str(&format!("setting_{} = {}\n", i, i));
        }
    }
    TextBuffer::new(buf.as_bytes())
}

fn options(algorithm: Algorithm) -> DiffOptions {
    DiffOptions {
        algorithm,
        ..DiffOptions::default()
    }
}

fn bench_algorithms(c: &mut Criterion, name: &str, sizes: &[usize], edits: fn(usize) -> Vec<usize>) {
    let mut group = c.benchmark_group(name);

    for &size in sizes {
        let before = document(size, &[]);
        let after = document(size, &edits(size));
        group.throughput(Throughput::Elements(size as u64));

        for algorithm in [Algorithm::Lookahead, Algorithm::Myers] {
            let opts = options(algorithm);
            group.bench_with_input(
                BenchmarkId::new(algorithm.to_string(), size),
                &(&before, &after),
                |b, (before, after)| {
                    b.iter(|| DiffResult::compute_with(black_box(before), black_box(after), &opts));
                },
            );
        }
    }

    group.finish();
}

fn bench_identical(c: &mut Criterion) {
    bench_algorithms(c, "compute/identical", &[100, 1_000, 10_000], |_| Vec::new());
}

fn bench_single_edit(c: &mut Criterion) {
    bench_algorithms(c, "compute/single_edit", &[100, 1_000, 10_000], |n| vec![n / 2]);
}

fn bench_scattered_edits(c: &mut Criterion) {
    bench_algorithms(c, "compute/scattered_edits", &[100, 1_000, 10_000], |n| {
        (0..n).filter(|i| i % 10 == 0).collect()
    });
}

fn bench_rewritten(c: &mut Criterion) {
    bench_algorithms(c, "compute/rewritten", &[100, 500, 1_000], |n| (0..n).collect());
}

fn bench_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigator");

    let size = 10_000;
    let edited: Vec<usize> = (0..size).filter(|i| i % 50 == 0).collect();
    let diff = DiffResult::compute(&document(size, &[]), &document(size, &edited));

    group.bench_function("build", |b| {
        b.iter(|| ChangeNavigator::new(black_box(&diff)));
    });

    let mut nav = ChangeNavigator::new(&diff);
    group.bench_function("full_cycle", |b| {
        b.iter(|| {
            for _ in 0..nav.len() {
                black_box(nav.next());
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_identical,
    bench_single_edit,
    bench_scattered_edits,
    bench_rewritten,
    bench_navigation,
);

criterion_main!(benches);
