//! Strictly Ultimate Games - Unified CLI
//!
//! Play, replay and inspect ultimate tic-tac-toe games.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use strictly_ultimate::{GameEngine, MoveOutcome};
use strictly_ultimate_games::{AppConfig, Session, render_board, render_status, replay};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn,strictly_ultimate=info";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;

    // RUST_LOG wins over the config file
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.log_filter().as_deref().unwrap_or(DEFAULT_LOG_FILTER))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play => run_play(&config),
        Command::Replay { path, json } => run_replay(&config, &path, json),
        Command::Schema => run_schema(),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: &AppConfig) -> Result<()> {
    info!("Starting interactive game");

    let mut session = Session::new(config);
    let stdin = std::io::stdin();
    let outcome = session.run(stdin.lock(), std::io::stdout())?;

    info!(?outcome, "Session ended");
    Ok(())
}

/// Replay a script file and print the final position
#[instrument(skip(config))]
fn run_replay(config: &AppConfig, path: &Path, json: bool) -> Result<()> {
    let script = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;

    let mut engine = GameEngine::with_settings(*config.rules());
    replay(&mut engine, &script).with_context(|| format!("Replay of {} failed", path.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(engine.state())?);
    } else {
        print!("{}", render_board(engine.state(), config.display()));
        print!("{}", render_status(engine.state(), config.display()));
    }
    Ok(())
}

/// Print the JSON Schema of MoveOutcome
fn run_schema() -> Result<()> {
    let schema = schemars::schema_for!(MoveOutcome);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
