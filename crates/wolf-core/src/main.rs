//! Werewolf Arena Simulation
//!
//! Headless driver for the nine-seat werewolf engine. Fast-forwards a
//! seeded simulation by default; `--realtime` drives it with the
//! wall-clock timer instead.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::prelude::*;

use wolf_core::{EngineConfig, GameEngine, GameSession, TickOutcome};
use wolf_events::GameSnapshot;

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "werewolf_sim")]
#[command(about = "A nine-seat werewolf social deduction simulation engine")]
struct Args {
    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of ticks to simulate in headless mode
    #[arg(long, default_value_t = 240)]
    ticks: u64,

    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Drive the loop in real time instead of fast-forwarding
    #[arg(long)]
    realtime: bool,

    /// Output the initial game state as JSON and exit
    #[arg(long)]
    output_initial_state: bool,
}

#[tokio::main]
async fn main() {
    init_tracing();
    let args = Args::parse();

    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Error loading config: {}", error);
            std::process::exit(1);
        }
    };

    if args.output_initial_state {
        let engine = GameEngine::new(config, args.seed);
        match serde_json::to_string_pretty(&engine.snapshot()) {
            Ok(json) => println!("{}", json),
            Err(error) => {
                eprintln!("Error serializing state: {}", error);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("Werewolf Arena Simulation");
    println!("=========================");
    println!("Seed: {}", args.seed);
    if args.realtime {
        println!("Mode: realtime ({} ms/tick)", config.tick_interval_ms);
    } else {
        println!("Mode: headless ({} ticks)", args.ticks);
    }
    println!();

    let summary = if args.realtime {
        run_realtime(config, args.seed).await
    } else {
        run_headless(config, args.seed, args.ticks)
    };

    println!();
    match summary.winner {
        Some(faction) => println!("Winner: {} (day {})", faction, summary.day),
        None => println!("No winner after {} ticks (day {})", summary.tick, summary.day),
    }
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn load_config(path: Option<&std::path::Path>) -> Result<EngineConfig, wolf_core::ConfigError> {
    match path {
        Some(path) => EngineConfig::from_file(path),
        None => Ok(EngineConfig::default()),
    }
}

/// Listener that prints transcript entries as they appear.
fn transcript_printer() -> impl FnMut(GameSnapshot) + Send + 'static {
    let mut printed = 0usize;
    move |snapshot: GameSnapshot| {
        for entry in &snapshot.transcript[printed..] {
            match entry.speaker.and_then(|id| snapshot.seat(id).cloned()) {
                Some(seat) => println!(
                    "[day {} | {}] {}: {}",
                    entry.day, entry.phase, seat.display_name, entry.content
                ),
                None => println!("[day {} | {}] {}", entry.day, entry.phase, entry.content),
            }
        }
        printed = snapshot.transcript.len();
    }
}

fn run_headless(config: EngineConfig, seed: u64, ticks: u64) -> GameSnapshot {
    let mut engine = GameEngine::new(config, seed);
    engine.subscribe(transcript_printer());
    engine.start();

    for _ in 0..ticks {
        if engine.tick() == TickOutcome::Finished {
            break;
        }
    }
    engine.snapshot()
}

async fn run_realtime(config: EngineConfig, seed: u64) -> GameSnapshot {
    let session = GameSession::new(config, seed);
    session.subscribe(transcript_printer());
    session.start_loop();
    session.run_to_completion().await;
    session.initial_state()
}
