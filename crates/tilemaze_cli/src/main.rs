//! Command-line front end for tilemaze
//!
//! Run with: tilemaze --size 9 --seed 42
//!
//! Prints the generated grid as tile type codes (`.` for blank) followed by
//! the generation statistics.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info, LevelFilter};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tilemaze_core::Grid;
use tilemaze_gen::{
    GenerationStats, Generator, GeneratorConfig, GeneratorError, StepOutcome, MAX_IDLE_STEPS,
};

#[derive(Debug, Parser)]
#[command(name = "tilemaze", version, about = "Generate a connected grid of path tiles")]
struct Args {
    /// Side length of the grid (overrides the config file)
    #[arg(long, short)]
    size: Option<u32>,

    /// Random seed; drawn from the OS when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file with generator settings
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Drive placement one step at a time and log every step
    #[arg(long)]
    step_by_step: bool,

    /// Run the blank-region reduction pass after generation
    #[arg(long)]
    rejigger: bool,

    /// Increase log verbosity (repeatable)
    #[arg(long = "verbose", short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), GeneratorError> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(size) = args.size {
        config.size = size;
    }
    if args.rejigger {
        config.rejigger.enabled = true;
    }
    config.step_by_step = args.step_by_step;

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("generating {0}x{0} grid with seed {1}", config.size, seed);
    let rng = SmallRng::seed_from_u64(seed);

    let mut generator = Generator::new(rng, config)?;
    if generator.config().step_by_step {
        drive_steps(&mut generator);
    }
    let stats = generator.stats();
    print_grid(generator.grid());

    print_stats(seed, &stats);
    Ok(())
}

/// Step until the frontier closes or stops growing.
fn drive_steps(generator: &mut Generator<SmallRng>) {
    let mut idle = 0;
    while !generator.is_complete() && generator.can_extend() && idle < MAX_IDLE_STEPS {
        match generator.step() {
            StepOutcome::Placed(placement) => {
                idle = 0;
                let kind = generator
                    .grid()
                    .tile(placement.target)
                    .map(|t| t.kind().code())
                    .unwrap_or(-1);
                info!(
                    "step {}: type {} at ({}, {}) after {} trials{}",
                    generator.stats().steps,
                    kind,
                    placement.target.x,
                    placement.target.y,
                    placement.trials,
                    if placement.forced_dead_end { " (dead end)" } else { "" }
                );
            }
            StepOutcome::NoBlankNeighbour => idle += 1,
            StepOutcome::FrontierExhausted => break,
        }
    }
    if generator.config().rejigger.enabled {
        generator.run_to_completion();
    }
}

fn print_grid(grid: &Grid) {
    let size = grid.size() as i64;
    for y in 0..size {
        let row: String = (0..size)
            .map(|x| match grid.tile_at(x, y) {
                Some(tile) if !tile.is_blank() => {
                    char::from_digit(tile.kind().code() as u32, 10).unwrap_or('?')
                }
                _ => '.',
            })
            .collect();
        println!("{row}");
    }
}

fn print_stats(seed: u64, stats: &GenerationStats) {
    println!();
    println!("seed:             {seed}");
    println!("steps:            {}", stats.steps);
    println!("placements:       {}", stats.placements);
    println!("forced dead ends: {}", stats.forced_dead_ends);
    println!("abandoned steps:  {}", stats.abandoned_steps);
    println!("rejigger passes:  {}", stats.rejigger_passes);
}
