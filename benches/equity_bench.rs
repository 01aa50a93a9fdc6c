//! Benchmarks for hand evaluation and equity estimation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use postflop_bot::policy::SeededRandom;
use postflop_bot::{Card, EquityConfig, EquityEstimator, HandEvaluator, HoleCards};

fn evaluate_7_benchmark(c: &mut Criterion) {
    let evaluator = HandEvaluator::new();
    let hole = [Card::new(12, 3), Card::new(11, 3)];
    let board = [
        Card::new(10, 3),
        Card::new(9, 2),
        Card::new(3, 1),
        Card::new(0, 0),
        Card::new(7, 3),
    ];

    c.bench_function("evaluate_7", |b| {
        b.iter(|| evaluator.evaluate_7(black_box(hole), black_box(&board)))
    });
}

fn estimate_flop_benchmark(c: &mut Criterion) {
    let hole: HoleCards = "AhKh".parse().unwrap();
    let board = Card::parse_many("Qh 7d 2c").unwrap();
    let estimator = EquityEstimator::new(EquityConfig::default());
    let mut rng = SeededRandom::from_seed(42);

    c.bench_function("estimate_flop_200_trials_3_opponents", |b| {
        b.iter(|| estimator.estimate(&hole, black_box(&board), 3, &mut rng).unwrap())
    });
}

fn estimate_parallel_benchmark(c: &mut Criterion) {
    let hole: HoleCards = "AhKh".parse().unwrap();
    let estimator = EquityEstimator::new(EquityConfig::default().with_trials(10_000).with_parallel(true));
    let mut rng = SeededRandom::from_seed(42);
    let board: Vec<Card> = Vec::new();

    c.bench_function("estimate_preflop_10000_trials_parallel", |b| {
        b.iter(|| estimator.estimate(&hole, black_box(&board), 1, &mut rng).unwrap())
    });
}

criterion_group!(
    benches,
    evaluate_7_benchmark,
    estimate_flop_benchmark,
    estimate_parallel_benchmark
);
criterion_main!(benches);
