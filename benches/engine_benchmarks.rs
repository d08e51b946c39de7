//! Benchmarks for engine performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use gomoku_minimax::board::search::{evaluate, minimal_plies_to_terminal, BoardOrder};
use gomoku_minimax::board::{Agent, GameState, PatternCounts, SearchParams};

const MIDGAME: &str = "win=5
    .........
    .........
    ...O.....
    ...XXO...
    ...OX....
    ....X....
    .........
    .........
    .........";

fn bench_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("patterns");

    for size in [9, 15, 19] {
        let state = GameState::new(size, 5);
        group.bench_with_input(BenchmarkId::new("empty", size), &state, |b, state| {
            b.iter(|| PatternCounts::compute(black_box(state.board()), 5))
        });
    }

    let midgame: GameState = MIDGAME.parse().expect("valid diagram");
    group.bench_function("midgame_pressure", |b| {
        b.iter(|| black_box(midgame.corr().pressure()))
    });

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    let midgame: GameState = MIDGAME.parse().expect("valid diagram");
    group.bench_function("terminal", |b| b.iter(|| black_box(evaluate(&midgame))));
    group.bench_function("horizon", |b| {
        b.iter(|| black_box(minimal_plies_to_terminal(&midgame)))
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10); // Fewer samples for slower benchmarks

    let midgame: GameState = MIDGAME.parse().expect("valid diagram");
    for depth in [1, 2, 3] {
        group.bench_with_input(BenchmarkId::new("midgame", depth), &depth, |b, &depth| {
            b.iter(|| {
                let params = SearchParams::new(9, 5, depth).expect("valid params");
                let mut agent = Agent::with_tie_break(params, BoardOrder);
                agent.select_move(&midgame)
            })
        });
    }

    let tiny = GameState::new(3, 3);
    for depth in [4, 5] {
        group.bench_with_input(BenchmarkId::new("tiny", depth), &depth, |b, &depth| {
            b.iter(|| {
                let params = SearchParams::new(3, 3, depth).expect("valid params");
                Agent::with_tie_break(params, BoardOrder).decide(&tiny, depth)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_patterns, bench_eval, bench_search);
criterion_main!(benches);
