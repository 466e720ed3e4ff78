use anyhow::Result;
use meadow_core::{Ecosystem, MeadowConfig};
use std::time::Duration;
use tracing::{info, warn};

fn main() -> Result<()> {
    init_tracing();
    let mut world = bootstrap_world()?;
    info!("Starting meadow simulation shell");

    let driver = FixedIntervalDriver {
        period: Duration::from_millis(env_u64("MEADOW_TICK_MS", 16)),
        base_step: env_f64("MEADOW_BASE_STEP", 1.0),
        log_every: env_u64("MEADOW_LOG_EVERY", 250),
    };
    driver.run(&mut world, env_u64("MEADOW_TICKS", 10_000));

    if let Some(summary) = world.history().last() {
        info!(
            tick = summary.tick.0,
            alive = summary.alive,
            food_available = summary.food_available,
            avg_hunger = summary.average_hunger,
            "Run complete",
        );
    } else {
        warn!("Run completed without any tick summaries");
    }
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn bootstrap_world() -> Result<Ecosystem> {
    let mut config = match std::env::var("MEADOW_PROFILE").as_deref() {
        Ok("classic") => MeadowConfig::classic(),
        _ => MeadowConfig::default(),
    };
    if let Ok(raw) = std::env::var("MEADOW_SEED") {
        match raw.parse() {
            Ok(seed) => config.rng_seed = Some(seed),
            Err(_) => warn!(%raw, "Ignoring unparseable MEADOW_SEED"),
        }
    }
    let mut world = Ecosystem::new(config)?;

    let seeded = world.seed_food();
    let starters = env_u64("MEADOW_CREATURES", 12);
    for _ in 0..starters {
        world.spawn_random_creature();
    }
    info!(
        food = seeded,
        creatures = starters,
        "World bootstrapped",
    );
    Ok(world)
}

/// Fixed-interval tick driver: sleeps `period` between steps and skips
/// stepping while the world is paused.
struct FixedIntervalDriver {
    period: Duration,
    base_step: f64,
    log_every: u64,
}

impl FixedIntervalDriver {
    fn run(&self, world: &mut Ecosystem, ticks: u64) {
        for _ in 0..ticks {
            if !world.is_paused() {
                let events = world.step(self.base_step);
                if events.births > 0 || events.deaths > 0 {
                    info!(
                        tick = events.tick.0,
                        births = events.births,
                        deaths = events.deaths,
                        "Population changed",
                    );
                }
                if self.log_every > 0 && events.tick.0 % self.log_every == 0 {
                    if let Some(summary) = world.history().last() {
                        info!(
                            tick = summary.tick.0,
                            time = summary.time,
                            alive = summary.alive,
                            food_available = summary.food_available,
                            avg_hunger = summary.average_hunger,
                            "Tick summary",
                        );
                    }
                }
                if world.living_creatures().count() == 0 {
                    warn!(tick = events.tick.0, "Population extinct; stopping early");
                    return;
                }
            }
            if !self.period.is_zero() {
                std::thread::sleep(self.period);
            }
        }
    }
}

fn env_u64(name: &str, default: u64) -> u64 {
    match std::env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(name, %raw, "Ignoring unparseable environment override");
            default
        }),
        Err(_) => default,
    }
}

fn env_f64(name: &str, default: f64) -> f64 {
    match std::env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(name, %raw, "Ignoring unparseable environment override");
            default
        }),
        Err(_) => default,
    }
}
