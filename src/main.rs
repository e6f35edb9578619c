#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battlesim::{init_logging, run_simulation, StrategyKind, DEFAULT_NUM_GAMES};
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

/// Compare Battleship targeting strategies over repeated simulated games.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Games averaged per (strategy, run) pair.
    #[arg(long, default_value_t = DEFAULT_NUM_GAMES)]
    games: usize,

    /// Number of repeated runs per strategy.
    #[arg(long, default_value_t = 10)]
    runs: usize,

    /// Only simulate one strategy instead of all three.
    #[arg(long, value_enum)]
    strategy: Option<StrategyKind>,

    /// Fix the RNG seed for reproducible results (e.g., --seed 12345).
    #[arg(long)]
    seed: Option<u64>,

    /// Emit results as a JSON array instead of CSV.
    #[arg(long)]
    json: bool,
}

#[cfg(feature = "std")]
#[derive(serde::Serialize)]
struct RunRecord {
    strategy: &'static str,
    run: usize,
    average_shots: f64,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    };

    let strategies: Vec<StrategyKind> = match cli.strategy {
        Some(kind) => vec![kind],
        None => StrategyKind::ALL.to_vec(),
    };

    let mut records = Vec::with_capacity(cli.runs * strategies.len());
    for run in 1..=cli.runs {
        for &kind in &strategies {
            let average_shots = run_simulation(kind, cli.games, &mut rng)?;
            records.push(RunRecord {
                strategy: kind.label(),
                run,
                average_shots,
            });
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        println!("strategy,run,average_shots");
        for rec in &records {
            println!("{},{},{:.2}", rec.strategy, rec.run, rec.average_shots);
        }
    }
    Ok(())
}
