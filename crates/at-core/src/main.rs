//! armtune CLI entry point.
//!
//! `armtune tune` runs the simulated-annealing search over the bandit's
//! (epsilon, decay) hyperparameters; `armtune episode` evaluates a single
//! simulated episode. Both accept a JSON config file plus flag overrides,
//! an optional RNG seed for reproducible runs, and text or JSON output.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use at_common::Result;
use at_config::TuneConfig;
use at_core::{evaluate, Annealer, EpisodeReport, EpsilonGreedy, RewardModel, TuneReport};

#[derive(Debug, Parser)]
#[command(name = "armtune", version, about = "Epsilon-greedy bandit tuner")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Seed for the random number generator (omit for OS entropy).
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Path to a JSON configuration file.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Tune (epsilon, decay) by simulated annealing.
    Tune {
        /// Annealing iteration budget.
        #[arg(long)]
        iterations: Option<u64>,
        /// Number of bandit arms.
        #[arg(long)]
        arms: Option<usize>,
        /// Rounds per simulated episode.
        #[arg(long)]
        rounds: Option<u64>,
        /// Starting epsilon for the search.
        #[arg(long)]
        epsilon: Option<f64>,
        /// Starting decay for the search.
        #[arg(long)]
        decay: Option<f64>,
        /// Relative perturbation scale for candidate proposals.
        #[arg(long)]
        perturbation: Option<f64>,
    },
    /// Simulate a single episode and report its regret.
    Episode {
        /// Number of bandit arms.
        #[arg(long)]
        arms: Option<usize>,
        /// Rounds to simulate.
        #[arg(long)]
        rounds: Option<u64>,
        /// Policy epsilon.
        #[arg(long)]
        epsilon: Option<f64>,
        /// Policy decay.
        #[arg(long)]
        decay: Option<f64>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(u8::try_from(err.code()).unwrap_or(1))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let base = match &cli.config {
        Some(path) => TuneConfig::from_file(path)?,
        None => TuneConfig::default(),
    };
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    match cli.command {
        Command::Tune {
            iterations,
            arms,
            rounds,
            epsilon,
            decay,
            perturbation,
        } => {
            let mut config = base;
            if let Some(v) = iterations {
                config.annealing.iterations = v;
            }
            if let Some(v) = arms {
                config.policy.arm_count = v;
            }
            if let Some(v) = rounds {
                config.simulation.rounds = v;
            }
            if let Some(v) = epsilon {
                config.annealing.epsilon = v;
            }
            if let Some(v) = decay {
                config.annealing.decay = v;
            }
            if let Some(v) = perturbation {
                config.annealing.perturbation_scale = v;
            }

            let annealer = Annealer::new(config.clone())?;
            info!(
                iterations = config.annealing.iterations,
                arms = config.policy.arm_count,
                "starting annealing run"
            );
            let outcome = annealer.run(&mut rng)?;
            let report = TuneReport::new(config, outcome);
            emit(cli.format, report.render_text(), report.render_json()?);
        }
        Command::Episode {
            arms,
            rounds,
            epsilon,
            decay,
        } => {
            let mut config = base;
            if let Some(v) = arms {
                config.policy.arm_count = v;
            }
            if let Some(v) = rounds {
                config.simulation.rounds = v;
            }
            if let Some(v) = epsilon {
                config.policy.epsilon = v;
            }
            if let Some(v) = decay {
                config.policy.decay = v;
            }
            config.validate()?;

            let model = RewardModel::generate(config.policy.arm_count, &mut rng)?;
            let mut policy = EpsilonGreedy::new(config.policy.clone())?;
            let outcome = evaluate(&mut policy, &model, config.simulation.rounds, &mut rng)?;
            let report = EpisodeReport::new(config.policy.arm_count, outcome);
            emit(cli.format, report.render_text(), report.render_json()?);
        }
    }
    Ok(())
}

fn emit(format: Format, text: String, json: String) {
    match format {
        Format::Text => print!("{text}"),
        Format::Json => println!("{json}"),
    }
}
