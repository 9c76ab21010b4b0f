//! Criterion benchmarks for Stemline.
//!
//! Covers single-paragraph analysis, the two stemming strategies and
//! sequential versus parallel batch throughput.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use stemline::analysis::morph::{DictionaryAnalyzer, MorphAnalyzer};
use stemline::analysis::stem::{LatinAlgorithm, SnowballStemmer, Stemmer};
use stemline::pipeline::{PipelineConfig, StemmingPipeline};

/// Generate mixed-script paragraphs for benchmarking.
fn generate_test_paragraphs(count: usize) -> Vec<String> {
    let words = [
        "кошек",
        "бежали",
        "по-домам",
        "и",
        "т.д.",
        "книги",
        "читали",
        "новые",
        "42",
        "3,14",
        "hello-world",
        "running",
        "словами",
        "на",
        "столах",
        "делали",
        "engine",
        "работает",
        "Ёлки",
        "окна",
    ];

    let mut paragraphs = Vec::with_capacity(count);
    for i in 0..count {
        let length = 20 + (i % 60); // Variable length paragraphs
        let mut paragraph_words = Vec::with_capacity(length);

        for j in 0..length {
            let word_idx = (i * 7 + j * 13) % words.len(); // Pseudo-random distribution
            paragraph_words.push(words[word_idx]);
        }

        paragraphs.push(paragraph_words.join(" "));
    }

    paragraphs
}

/// Benchmark a single paragraph through the whole chain.
fn bench_paragraph(c: &mut Criterion) {
    let mut group = c.benchmark_group("paragraph");

    let pipeline = StemmingPipeline::from_config(&PipelineConfig::default()).unwrap();
    let paragraphs = generate_test_paragraphs(100);

    group.bench_function("stem_single_paragraph", |b| {
        b.iter(|| black_box(pipeline.stem_paragraph(black_box(&paragraphs[0]))))
    });

    group.finish();
}

/// Benchmark the two stemming strategies in isolation.
fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategies");

    let lemmatizer = DictionaryAnalyzer::builtin().unwrap();
    let stemmer = SnowballStemmer::new(LatinAlgorithm::English);

    group.bench_function("lemmatize_known", |b| {
        b.iter(|| black_box(lemmatizer.analyze(black_box("кошек"))))
    });
    group.bench_function("lemmatize_guessed", |b| {
        b.iter(|| black_box(lemmatizer.analyze(black_box("перечитывали"))))
    });
    group.bench_function("snowball_stem", |b| {
        b.iter(|| black_box(stemmer.stem(black_box("running"))))
    });

    group.finish();
}

/// Benchmark batch throughput, sequential versus parallel.
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    group.sample_size(20);

    let paragraphs = generate_test_paragraphs(1000);
    let parallel = StemmingPipeline::from_config(&PipelineConfig::default()).unwrap();
    let sequential = parallel.clone().parallel(false);

    for size in [10, 100, 1000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("sequential", size), &size, |b, &size| {
            b.iter(|| black_box(sequential.run(&paragraphs[..size])))
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &size, |b, &size| {
            b.iter(|| black_box(parallel.run(&paragraphs[..size])))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_paragraph, bench_strategies, bench_batch);
criterion_main!(benches);
