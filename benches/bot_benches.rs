use std::time::Duration;

use criterion::{black_box, BenchmarkId, Criterion};

use rookery::core::Color;
use rookery::tools::{SearchConfig, Searcher};
use rookery::{AlphaBetaSearcher, ChessState, MiniMaxSearcher};

fn bench_all_searchers(c: &mut Criterion) {
    let state = ChessState::initial();
    let mut group = c.benchmark_group("Searcher Benches");
    for depth in [2u16, 3].iter() {
        let config = SearchConfig::default().depth(*depth).seed(7);
        group.bench_with_input(BenchmarkId::new("MiniMax", depth), &config, |b, config| {
            b.iter(|| {
                let mut bot = MiniMaxSearcher::with_config(Color::White, *config);
                black_box(bot.best_move(None, &state))
            })
        });
        group.bench_with_input(BenchmarkId::new("AlphaBeta", depth), &config, |b, config| {
            b.iter(|| {
                let mut bot = AlphaBetaSearcher::with_config(Color::White, *config);
                black_box(bot.best_move(None, &state))
            })
        });
    }
    group.finish();
}

criterion_group!(name = bot_benches;
    config = Criterion::default().sample_size(10).warm_up_time(Duration::from_millis(100));
    targets = bench_all_searchers
);
