//! Benchmarks for similarity ranking
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses a synthetic corpus so no dataset files are needed.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::{Corpus, MovieRecord};
use pipeline::SimilarityRanker;
use std::sync::Arc;
use vectorizer::{build_soups, VectorSpace, VectorSpaceConfig};

const WORDS: &[&str] = &[
    "spy", "heist", "love", "war", "ship", "dragon", "detective", "space", "robot", "family",
    "island", "murder", "queen", "school", "band", "zombie", "desert", "river", "city", "storm",
];
const GENRES: &[&str] = &["Action", "Drama", "Comedy", "Horror", "Romance", "Thriller"];

fn synthetic_corpus(size: usize) -> Arc<Corpus> {
    let records = (0..size)
        .map(|i| {
            let overview: Vec<&str> = (0..12).map(|j| WORDS[(i * 7 + j * 3) % WORDS.len()]).collect();
            MovieRecord::new(format!("Movie {i}"))
                .with_genres([GENRES[i % GENRES.len()], GENRES[(i / 3) % GENRES.len()]])
                .with_language(if i % 5 == 0 { "fr" } else { "en" })
                .with_overview(overview.join(" "))
        })
        .collect();
    Arc::new(Corpus::from_records(records))
}

fn build_ranker(size: usize) -> SimilarityRanker {
    let corpus = synthetic_corpus(size);
    let space = VectorSpace::fit(&build_soups(&corpus), &VectorSpaceConfig::default())
        .expect("Failed to fit vector space");
    SimilarityRanker::new(corpus, Arc::new(space))
}

fn bench_fit(c: &mut Criterion) {
    let corpus = synthetic_corpus(5000);
    let soups = build_soups(&corpus);
    let config = VectorSpaceConfig::default();

    c.bench_function("vector_space_fit_5000", |b| {
        b.iter(|| black_box(VectorSpace::fit(black_box(&soups), &config).unwrap()))
    });
}

fn bench_on_demand(c: &mut Criterion) {
    let ranker = build_ranker(5000);

    c.bench_function("similar_to_on_demand_5000", |b| {
        b.iter(|| black_box(ranker.similar_to(black_box(42), black_box(10), None)))
    });
}

fn bench_precomputed(c: &mut Criterion) {
    let ranker = build_ranker(2000).with_precomputed_matrix();

    c.bench_function("similar_to_precomputed_2000", |b| {
        b.iter(|| black_box(ranker.similar_to(black_box(42), black_box(10), None)))
    });
}

criterion_group!(benches, bench_fit, bench_on_demand, bench_precomputed);
criterion_main!(benches);
