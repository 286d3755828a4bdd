//! Performance benchmarks for TitleChecker
//!
//! Run with: cargo bench --bench title_checker_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use titlecase_core::{RuleTokenizer, TitleChecker, Tokenizer};

const TITLES: &[(&str, &str)] = &[
    ("short", "The Wrong Capitalization"),
    (
        "subtitle",
        "A Study of Urban Development: Challenges and Solutions",
    ),
    (
        "defective",
        " Students' Anxiety: in Speaking English In An  Indonesian High-school ",
    ),
];

/// Benchmark full validation for representative titles
fn bench_check_title(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_title");
    let checker = TitleChecker::new().unwrap();

    for (name, title) in TITLES {
        group.throughput(Throughput::Bytes(title.len() as u64));
        group.bench_with_input(BenchmarkId::new("check", name), title, |b, title| {
            b.iter(|| checker.check_title(black_box(title)));
        });
    }

    group.finish();
}

/// Benchmark tokenization alone
fn bench_tokenize(c: &mut Criterion) {
    let tokenizer = RuleTokenizer::default();
    let title = TITLES[1].1;

    c.bench_function("tokenize_subtitle", |b| {
        b.iter(|| tokenizer.tokenize(black_box(title)));
    });
}

/// Benchmark checker construction (rules are cached after the first build)
fn bench_construction(c: &mut Criterion) {
    c.bench_function("checker_new", |b| {
        b.iter(|| TitleChecker::new().unwrap());
    });
}

criterion_group!(benches, bench_check_title, bench_tokenize, bench_construction);
criterion_main!(benches);
