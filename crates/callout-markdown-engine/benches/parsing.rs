use callout_markdown_engine::{parse_document, parse_inline};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
mod common;

fn bench_parse_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_document");
    group.sample_size(10);

    for size in [10, 100] {
        let content = common::generate_markdown_content(size);
        group.bench_with_input(BenchmarkId::new("flat", size), &content, |b, content| {
            b.iter(|| parse_document(std::hint::black_box(content)));
        });
    }

    let content = common::generate_complex_markdown(10, 5);
    group.bench_function("nested", |b| {
        b.iter(|| parse_document(std::hint::black_box(&content)));
    });

    group.finish();
}

fn bench_parse_inline(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_inline");

    let line = common::generate_inline_heavy(500);
    group.bench_function("mixed_spans", |b| {
        b.iter(|| parse_inline(std::hint::black_box(&line)));
    });

    for (name, unmatched) in [
        ("unmatched_underscores", "_a ".repeat(20_000)),
        ("unmatched_brackets", "[".repeat(20_000)),
        ("unclosed_hrefs", "[a](".repeat(5_000)),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| parse_inline(std::hint::black_box(&unmatched)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_document, bench_parse_inline);
criterion_main!(benches);
