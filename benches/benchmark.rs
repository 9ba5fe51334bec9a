//! Benchmarks for the cryptanalysis pipeline.
//!
//! Measures the quadratic Kasiski scan across input sizes and a full
//! analysis run (categorize, count, build tree, enumerate, decode).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use vigenere_breaker::{decoder, AnalysisConfig, Analyzer};

/// Plaintext block repeated to build inputs of the desired size.
const BENCH_PLAINTEXT: &str = "it was the best of times it was the worst of times ";

/// Key used consistently across all benchmarks.
const BENCH_KEY: &str = "LEMON";

fn ciphertext(analyzer: &Analyzer, repeats: usize) -> String {
    decoder::encrypt(&BENCH_PLAINTEXT.repeat(repeats), BENCH_KEY, analyzer.alphabet()).unwrap()
}

/// Benchmarks `Analyzer::suggest_key_lengths()` as the input grows.
fn bench_kasiski_scaling(c: &mut Criterion) {
    let analyzer = Analyzer::new(AnalysisConfig::default()).unwrap();
    let mut group = c.benchmark_group("kasiski_scaling");

    for &repeats in &[4usize, 16, 64] {
        let text = ciphertext(&analyzer, repeats);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(repeats), &text, |b, text| {
            b.iter(|| analyzer.suggest_key_lengths(black_box(text)).unwrap());
        });
    }

    group.finish();
}

/// Benchmarks `Analyzer::analyze()` at the true key length.
fn bench_analyze(c: &mut Criterion) {
    let analyzer = Analyzer::new(AnalysisConfig::default()).unwrap();
    let text = ciphertext(&analyzer, 32);

    let mut group = c.benchmark_group("analyze");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("key_length_5", |b| {
        b.iter(|| analyzer.analyze(black_box(&text), 5).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_kasiski_scaling, bench_analyze);
criterion_main!(benches);
