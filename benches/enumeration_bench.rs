//! Benchmarks for classification and exact enumeration.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use poker_odds::{Card, CardSet, Category, GameState, HandClassifier, ProbabilityEngine};

fn classifier_benchmark(c: &mut Criterion) {
    let hands: Vec<CardSet> = (0..52 - 7)
        .map(|start| (start..start + 7).filter_map(Card::from_index).collect())
        .collect();

    c.bench_function("classify_all_categories", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for &hand in &hands {
                let hand = HandClassifier::from_set(black_box(hand));
                hits += Category::ALL.iter().filter(|&&c| hand.satisfies(c)).count();
            }
            hits
        })
    });
}

fn flop_benchmark(c: &mut Criterion) {
    let state: GameState = "Ah Kh Qh\n2d 7c\n7h 7d\nAd Kc\n8c 8d".parse().unwrap();
    let engine = ProbabilityEngine::new(&state);

    c.bench_function("flop_single_category", |b| {
        b.iter(|| engine.flush_for_player(black_box(0)))
    });
    c.bench_function("flop_all_categories", |b| {
        b.iter(|| engine.odds_for_player(black_box(0)))
    });
}

fn turn_benchmark(c: &mut Criterion) {
    let state: GameState = "Ah Kh Qh Jh\n2d 7c".parse().unwrap();
    let engine = ProbabilityEngine::new(&state);

    c.bench_function("turn_all_categories", |b| {
        b.iter(|| engine.odds_for_player(black_box(0)))
    });
}

fn preflop_benchmark(c: &mut Criterion) {
    let state: GameState = "\n2d 7c".parse().unwrap();
    let engine = ProbabilityEngine::new(&state);

    let mut group = c.benchmark_group("preflop");
    group.sample_size(10);
    group.bench_function("all_categories", |b| {
        b.iter(|| engine.odds_for_player(black_box(0)))
    });
    group.finish();
}

criterion_group!(benches, classifier_benchmark, flop_benchmark, turn_benchmark, preflop_benchmark);
criterion_main!(benches);
