//! Full random-playout throughput.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use powderkeg::core::{GameConfig, GameRng};
use powderkeg::rules::{Action, GameEngine};

/// Play one game to completion under a uniform random policy.
/// Returns the number of commands resolved.
fn random_playout(seed: u64, players: u8) -> u32 {
    let mut engine = GameEngine::new(GameConfig::standard(players), seed).unwrap();
    let mut policy = GameRng::new(seed ^ 0x5DEECE66D);
    let mut commands = 0u32;

    while !engine.is_over() {
        let actions = engine.legal_actions();
        match actions[policy.gen_range_usize(0..actions.len())] {
            Action::Draw => {
                engine.draw_card().unwrap();
            }
            Action::Play { kind, target } => {
                engine.play_card(kind, target).unwrap();
            }
        }
        commands += 1;
    }
    commands
}

fn bench_playouts(c: &mut Criterion) {
    for players in [2u8, 5u8] {
        c.bench_function(&format!("random_playout_{players}p"), |b| {
            let mut seed = 0u64;
            b.iter(|| {
                seed = seed.wrapping_add(1);
                black_box(random_playout(seed, players))
            });
        });
    }
}

criterion_group!(benches, bench_playouts);
criterion_main!(benches);
