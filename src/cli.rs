//! Command-line interface for the chess autopilot.

use clap::Parser;
use std::path::PathBuf;

/// Chess Autopilot - turn-synchronization pilot for an automated chess client
#[derive(Parser, Debug)]
#[command(name = "chess_autopilot")]
#[command(about = "Plays a live chess game from an external decision service", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Display name of the local player (overrides the config file).
    #[arg(short, long)]
    pub name: Option<String>,

    /// Decision service endpoint (overrides the config file).
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Play random legal moves instead of consulting the decision service.
    #[arg(long)]
    pub random: bool,
}
