//! Headless driver running a randomly populated world.

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use creatures::simulation::factory;
use creatures::{DeathCause, Params};

/// Runs the creature simulation headless and logs population statistics.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file with simulation parameters
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Number of creatures in the initial world
    #[arg(short, long, default_value_t = 40)]
    creatures: usize,

    /// Number of ticks to run
    #[arg(short, long, default_value_t = 10_000)]
    ticks: u64,

    /// Time delta passed to every tick
    #[arg(short, long, default_value_t = 0.05)]
    delta: f64,

    /// Ticks between two statistics lines
    #[arg(long, default_value_t = 200)]
    report_every: u64,

    /// Seed for the world RNG, overriding the params file
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "creatures=info".into());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let mut params = match &args.params {
        Some(path) => Params::from_json_file(path)?,
        None => Params::default(),
    };
    if args.seed.is_some() {
        params.rng_seed = args.seed;
    }

    let mut world = factory::basic_world(params, args.creatures)?;
    let (mut births, mut deaths) = (0, 0);

    for tick in 1..=args.ticks {
        let report = world.tick(args.delta);
        births += report.births();
        deaths += report.deaths(DeathCause::Starvation) + report.deaths(DeathCause::OldAge);

        if tick % args.report_every.max(1) == 0 {
            let creatures = world.creatures();
            let pregnant = creatures.iter().filter(|c| c.is_pregnant()).count();
            info!(
                tick,
                time = world.time(),
                creatures = creatures.len(),
                pregnant,
                food = world.food().len(),
                births,
                deaths,
                "population"
            );
        }

        if world.creatures().is_empty() {
            warn!(tick, "population went extinct");
            break;
        }
    }

    Ok(())
}
