use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dupfind_core::normalizer::normalize;
use dupfind_core::{grouper, Record, RemovalWords};

fn removal_words() -> RemovalWords {
    ["inc", "llc", "ltd", "corp", "co", "the", "company", "group"]
        .into_iter()
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    let words = removal_words();
    c.bench_function("normalize_single_name", |b| {
        b.iter(|| normalize(black_box("The Acme Widget Co., LLC (www.acme.com)"), &words))
    });
}

fn bench_group(c: &mut Criterion) {
    let words = removal_words();
    let names: Vec<String> = (0..10_000)
        .map(|i| format!("Company {} Inc.", i % 2_500))
        .collect();
    c.bench_function("group_10k_names", |b| {
        b.iter(|| {
            let records = names.iter().map(|n| Record::new(n, &words)).collect();
            grouper::group(black_box(records))
        })
    });
}

criterion_group!(benches, bench_normalize, bench_group);
criterion_main!(benches);
