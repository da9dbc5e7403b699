//! Benchmark: complete games through the public command surface.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pig_dice::control::ModeController;
use pig_dice::core::{GameConfig, GameMode};
use pig_dice::engine::TurnEngine;

fn play_two_human_game(seed: u64) -> u32 {
    let mut engine = TurnEngine::with_seed(GameConfig::new(), seed);

    while engine.state().game_active {
        if engine.state().active().current_score() >= 20 {
            engine.hold().unwrap();
        } else {
            engine.roll().unwrap();
        }
        engine.take_events();
    }

    engine.state().active().total_score()
}

fn play_vs_computer_game(seed: u64) -> u32 {
    let mut engine = TurnEngine::with_seed(GameConfig::new(), seed);
    let mut controller = ModeController::default();
    engine.set_mode(GameMode::HumanVsComputer).unwrap();

    while engine.state().game_active {
        if engine.state().active().current_score() >= 20 {
            engine.hold().unwrap();
        } else {
            engine.roll().unwrap();
        }
        controller.run_opponent(&mut engine).unwrap();
        engine.take_events();
    }

    engine.state().active().total_score()
}

fn bench_games(c: &mut Criterion) {
    c.bench_function("full_game_two_human", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(play_two_human_game(seed))
        });
    });

    c.bench_function("full_game_vs_computer", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(play_vs_computer_game(seed))
        });
    });
}

criterion_group!(benches, bench_games);
criterion_main!(benches);
