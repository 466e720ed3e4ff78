use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use meadow_core::{Ecosystem, MeadowConfig};

fn env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}

fn seeded_world(creatures: usize) -> Ecosystem {
    let config = MeadowConfig {
        rng_seed: Some(0x4D45_4144),
        ..MeadowConfig::default()
    };
    let mut world = Ecosystem::new(config).expect("valid default config");
    world.seed_food();
    for _ in 0..creatures {
        world.spawn_random_creature();
    }
    world
}

fn bench_world_step(c: &mut Criterion) {
    let creatures = env_usize("MEADOW_BENCH_CREATURES", 64);
    let warm_ticks = env_usize("MEADOW_BENCH_WARM_TICKS", 256);

    let mut group = c.benchmark_group("world_step");
    group.bench_function(format!("step_{creatures}_creatures"), |b| {
        b.iter_batched_ref(
            || {
                let mut world = seeded_world(creatures);
                for _ in 0..warm_ticks {
                    world.step(1.0);
                }
                world
            },
            |world| world.step(1.0),
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_world_step);
criterion_main!(benches);
