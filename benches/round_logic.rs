use criterion::{black_box, criterion_group, criterion_main, Criterion};
use chimp_test::core::{generate_positions, EngineConfig, RoundEngine, SimpleRng};

fn bench_generate_small(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    c.bench_function("generate_positions_5", |b| {
        b.iter(|| generate_positions(&mut rng, black_box(5)))
    });
}

fn bench_generate_large(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    c.bench_function("generate_positions_15", |b| {
        b.iter(|| generate_positions(&mut rng, black_box(15)))
    });
}

fn bench_start_round(c: &mut Criterion) {
    let mut engine = RoundEngine::new(EngineConfig::default().with_seed(12345));
    c.bench_function("start_round_10", |b| {
        b.iter(|| engine.start_round(black_box(10)))
    });
}

fn bench_full_round(c: &mut Criterion) {
    let mut engine = RoundEngine::new(EngineConfig::default().with_seed(12345));
    c.bench_function("play_round_8", |b| {
        b.iter(|| {
            engine.start_round(8);
            engine.tick(u32::MAX);
            for id in 1..=8 {
                engine.handle_click(black_box(id));
            }
        })
    });
}

fn bench_tick(c: &mut Criterion) {
    let mut engine = RoundEngine::new(EngineConfig::default().with_seed(12345));
    c.bench_function("engine_tick_16ms", |b| {
        b.iter(|| engine.tick(black_box(16)))
    });
}

criterion_group!(
    benches,
    bench_generate_small,
    bench_generate_large,
    bench_start_round,
    bench_full_round,
    bench_tick
);
criterion_main!(benches);
