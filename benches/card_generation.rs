use criterion::{black_box, criterion_group, criterion_main, Criterion};

use magic_cards::cards::{generate_cards, Variant};
use magic_cards::core::{FixedVariant, TrickConfig};
use magic_cards::game::{replay, GameMachine, GameState};

fn bench_generate(c: &mut Criterion) {
    let default = TrickConfig::default();
    let large = TrickConfig::for_range(10_000).unwrap();

    c.bench_function("generate_cards/100", |b| {
        b.iter(|| generate_cards(black_box(Variant::Inverted), &default))
    });
    c.bench_function("generate_cards/10000", |b| {
        b.iter(|| generate_cards(black_box(Variant::Standard), &large))
    });
}

fn bench_round(c: &mut Criterion) {
    let config = TrickConfig::default();
    let key = GameState::new(Variant::Inverted, &config).answer_key(42);

    c.bench_function("replay_round", |b| {
        b.iter(|| replay(&config, Variant::Inverted, black_box(key.clone())))
    });

    let mut machine = GameMachine::new(config.clone(), FixedVariant(Variant::Standard));
    let state = machine.create_initial_state();
    c.bench_function("answer_clone_state", |b| {
        b.iter(|| black_box(&state).answer(magic_cards::Answer::Yes))
    });
}

criterion_group!(benches, bench_generate, bench_round);
criterion_main!(benches);
