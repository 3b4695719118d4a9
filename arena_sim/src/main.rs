//! arena_sim - Run an arena fight from a TOML description and print its log

mod fight;

use anyhow::{Context, Result};
use arena_core::config::load_constants;
use arena_core::{Arena, CombatConstants, Dice, InMemoryStore, RandomDice, StepOutcome};
use clap::Parser;
use fight::FightFile;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Simulate an arena fight
#[derive(Parser)]
#[command(name = "arena_sim", version, about)]
struct Args {
    /// Fight description with [player] and [enemy] tables
    #[arg(value_name = "FIGHT")]
    fight: PathBuf,

    /// Seed for reproducible rolls (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Rounds played per step
    #[arg(short, long, default_value_t = 1)]
    rounds_per_step: u32,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Combat constants TOML overriding the standard rules
    #[arg(short, long, value_name = "FILE")]
    constants: Option<PathBuf>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// One human-readable line per event
    Text,
    /// One JSON step outcome per line
    Json,
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    match args.seed {
        Some(seed) => run(&args, &mut RandomDice::seeded(seed)),
        None => run(&args, &mut RandomDice::from_entropy()),
    }
}

/// Log to stderr, honoring `RUST_LOG` and falling back to warnings only
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_writer(std::io::stderr)
        .init();
}

fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn run(args: &Args, dice: &mut impl Dice) -> Result<()> {
    let constants = match &args.constants {
        Some(path) => load_constants(path)
            .with_context(|| format!("loading constants from {}", path.display()))?,
        None => CombatConstants::default(),
    };
    let request = FightFile::load(&args.fight)?.into_request();

    let mut arena = Arena::with_constants(InMemoryStore::new(), constants)?;
    let (id, snapshot) = arena.start(request)?;
    tracing::info!(%id, seed = ?args.seed, "fight loaded");

    if let OutputFormat::Text = args.format {
        println!(
            "{} (level {}, {} HP) vs {} (level {}, {} HP)",
            snapshot.player.name,
            snapshot.player.level,
            snapshot.player.hp_max,
            snapshot.enemy.name,
            snapshot.enemy.level,
            snapshot.enemy.hp_max,
        );
    }

    let step_size = args.rounds_per_step.max(1);
    loop {
        let outcome = arena.step(id, step_size, dice)?;
        print_outcome(&outcome, args.format)?;
        if outcome.is_finished() {
            break;
        }
    }
    Ok(())
}

fn print_outcome(outcome: &StepOutcome, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for line in outcome.lines() {
                println!("{line}");
            }
            let snap = &outcome.snapshot;
            println!(
                "  [{}: {}/{} HP | {}: {}/{} HP]",
                snap.player.name,
                snap.player.hp,
                snap.player.hp_max,
                snap.enemy.name,
                snap.enemy.hp,
                snap.enemy.hp_max,
            );
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(outcome)?),
    }
    Ok(())
}
