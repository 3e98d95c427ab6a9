use std::path::PathBuf;

use aca_core::{write_results, Dimension, Evolution, EvolutionConfig, ResultFormat};
use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_help() {
    println!("aca - search for apoptotic cellular automata");
    println!();
    println!("USAGE:");
    println!("    aca [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config FILE   Read settings from FILE instead of the default config");
    println!("    -o, --output FILE   Write results to FILE");
    println!("    --1d | --2d         Override the automata dimension");
    println!("    --mevs N            Number of mating events to run");
    println!("    --seed N            Seed the random source for a reproducible run");
    println!("    --json              Write results as JSON");
    println!("    --init-config       Create the default config file and exit");
    println!("    -h, --help          Print help information");
    println!("    -v, --version       Print version");
    println!();
    println!("CONFIG:");
    println!("    {}", EvolutionConfig::default_config_path().display());
}

/// Command line overrides on top of the config file
#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    output: Option<PathBuf>,
    dimension: Option<Dimension>,
    num_mevs: Option<usize>,
    seed: Option<u64>,
    json: bool,
}

enum Command {
    Run(Args),
    Help,
    Version,
    InitConfig,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Command> {
    let mut parsed = Args::default();
    while let Some(arg) = args.next() {
        let mut value = || args.next().with_context(|| format!("{arg} needs a value"));
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-v" | "--version" => return Ok(Command::Version),
            "--init-config" => return Ok(Command::InitConfig),
            "-c" | "--config" => parsed.config = Some(value()?.into()),
            "-o" | "--output" => parsed.output = Some(value()?.into()),
            "--mevs" => parsed.num_mevs = Some(value()?.parse().context("--mevs expects a number")?),
            "--seed" => parsed.seed = Some(value()?.parse().context("--seed expects a number")?),
            "--1d" => parsed.dimension = Some(Dimension::One),
            "--2d" => parsed.dimension = Some(Dimension::Two),
            "--json" => parsed.json = true,
            other => bail!("unknown argument: {other} (see --help)"),
        }
    }
    Ok(Command::Run(parsed))
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => EvolutionConfig::load_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => EvolutionConfig::load(),
    };
    if let Some(output) = args.output {
        config.output_file = output;
    }
    if let Some(dimension) = args.dimension {
        config.dimension = dimension;
    }
    if let Some(num_mevs) = args.num_mevs {
        config.num_mevs = num_mevs;
    }

    let rng = args.seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    let output = config.output_file.clone();

    let mut evolution = Evolution::new(config, rng).context("Failed to grow initial population")?;
    evolution.run().context("Evolution failed")?;

    let format = if args.json { ResultFormat::Json } else { ResultFormat::Text };
    write_results(evolution.boards(), &output, format)
        .with_context(|| format!("Could not write results to {}", output.display()))?;

    if let Some(best) = evolution.best() {
        tracing::info!(fitness = best.fitness(), rules = %best.result(), "Fittest automata");
    }
    println!("Output written to:\n{}", output.display());
    Ok(())
}

fn main() -> Result<()> {
    // Initialize structured logging (tracing)
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    match parse_args(std::env::args().skip(1))? {
        Command::Help => print_help(),
        Command::Version => println!("aca {VERSION}"),
        Command::InitConfig => {
            EvolutionConfig::create_default_if_missing()?;
            println!("{}", EvolutionConfig::default_config_path().display());
        }
        Command::Run(args) => run(args)?,
    }
    Ok(())
}
