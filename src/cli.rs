//! Command-line interface for strictly_ultimate_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Ultimate - Ultimate tic-tac-toe with checked rules
#[derive(Parser, Debug)]
#[command(name = "strictly_ultimate_games")]
#[command(about = "Ultimate tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(long, global = true, default_value = "strictly_ultimate.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a two-player game on this terminal
    Play,

    /// Replay a move script and print the resulting position
    Replay {
        /// Script file, one "field spot" move per line
        path: PathBuf,

        /// Print the final state as JSON instead of a board
        #[arg(long)]
        json: bool,
    },

    /// Print the JSON Schema of a move outcome
    Schema,
}
