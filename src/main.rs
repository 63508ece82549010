use anyhow::Result;
use clap::Parser;
use std::time::Instant;
use vivarium_core::metrics::{init_logging, Metrics};
use vivarium_core::{World, WorldConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path (TOML); built-in defaults apply when omitted
    #[arg(short, long)]
    config: Option<String>,

    /// Number of ticks to run (0 = run until interrupted)
    #[arg(short, long, default_value_t = 10_000)]
    ticks: u64,

    /// Override the config's world seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Emit one JSON snapshot line on stdout every N ticks (0 = never)
    #[arg(long, default_value_t = 0)]
    snapshot_every: u64,

    /// Log an ecology summary every N ticks (0 = never)
    #[arg(long, default_value_t = 500)]
    log_every: u64,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => WorldConfig::load(path)?,
        None => WorldConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }

    let metrics = Metrics::new();
    let mut world = World::new(config.clone())?;

    let mut completed: u64 = 0;
    while args.ticks == 0 || completed < args.ticks {
        let started = Instant::now();
        let report = world.update();
        metrics.record_tick(started.elapsed(), world.creatures.len(), world.food.len());
        completed += 1;

        for kill in &report.kills {
            tracing::debug!(
                hunter = %kill.hunter_id,
                prey = %kill.prey_id,
                prey_diet = kill.prey_diet.as_str(),
                tick = kill.tick,
                "Kill"
            );
        }

        if args.snapshot_every > 0 && completed.is_multiple_of(args.snapshot_every) {
            println!("{}", serde_json::to_string(&world.snapshot())?);
        }

        if args.log_every > 0 && completed.is_multiple_of(args.log_every) {
            tracing::info!(
                tick = world.tick,
                population = world.stats.current_population,
                food = world.food.len(),
                avg_energy = world.stats.average_energy,
                max_generation = world.stats.max_generation,
                births = world.stats.total_births,
                deaths = world.stats.total_deaths,
                "Ecology"
            );
        }

        if world.creatures.is_empty() {
            // A fixed seed would replay the exact same collapse, so seeded
            // runs restart on the successor seed.
            if let Some(seed) = config.seed {
                config.seed = Some(seed.wrapping_add(1));
            }
            tracing::warn!(
                tick = world.tick,
                seed = ?config.seed,
                "Extinction; reinitializing world"
            );
            world = World::new(config.clone())?;
        }
    }

    tracing::info!(
        ticks = metrics.tick_count(),
        population = metrics.creature_count(),
        elapsed_ms = metrics.elapsed().as_millis() as u64,
        "Run complete"
    );
    Ok(())
}
