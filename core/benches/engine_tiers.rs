use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sapper_core::*;
use std::hint::black_box;

fn center(config: GameConfig) -> Coord2 {
    (config.rows() / 2, config.cols() / 2)
}

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");
    for difficulty in Difficulty::ALL {
        let config = difficulty.config();
        group.bench_with_input(
            BenchmarkId::from_parameter(difficulty),
            &config,
            |b, &config| {
                let mut seed = 0u64;
                b.iter(|| {
                    seed += 1;
                    let mut generator = RandomMinefieldGenerator::new(seed);
                    black_box(generator.generate(config, center(config)))
                });
            },
        );
    }
    group.finish();
}

fn bench_first_reveal(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_reveal");
    for difficulty in Difficulty::ALL {
        let config = difficulty.config();
        group.bench_with_input(
            BenchmarkId::from_parameter(difficulty),
            &config,
            |b, &config| {
                let mut seed = 0u64;
                b.iter(|| {
                    seed += 1;
                    let mut game = Game::new(config, seed);
                    black_box(game.reveal(center(config)))
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_generation, bench_first_reveal);
criterion_main!(benches);
