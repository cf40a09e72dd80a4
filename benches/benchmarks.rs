criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        shuffling_fresh_deck,
        dealing_whole_tower,
        simulating_ride_strategy,
}

fn shuffling_fresh_deck(c: &mut criterion::Criterion) {
    let mut rng = SmallRng::seed_from_u64(0);
    c.bench_function("shuffle a fresh Deck", |b| {
        b.iter(|| Deck::shuffled(&mut rng))
    });
}

fn dealing_whole_tower(c: &mut criterion::Criterion) {
    let mut session = Session::new(Options {
        seed: Some(0),
        ..Options::default()
    });
    c.bench_function("deal a Round until bust or full Tower", |b| {
        b.iter(|| {
            session.new_round();
            while session.deal_next_row().is_some() {}
        })
    });
}

fn simulating_ride_strategy(c: &mut criterion::Criterion) {
    c.bench_function("simulate 1000 rounds riding the Tower", |b| {
        b.iter(|| Simulation::new(1_000, Strategy::Ride, 0).run())
    });
}

use gatetower::analysis::*;
use gatetower::cards::*;
use gatetower::round::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
