//! Chess Autopilot - replay driver
//!
//! Wires the synchronization controller to a scripted board and drives
//! its event loop end to end, standing in for the host page that would
//! fire move events in live play.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use chess_autopilot::{
    GameBoard, MoveSource, PilotConfig, RandomMoveSource, RemoteMoveSource, ScriptedBoard,
    SyncController,
};
use clap::Parser;
use cli::Cli;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Scholar's mate: White mates on move four.
const REPLAY_LINE: &str = "e2e4 e7e5 f1c4 b8c6 d1h5 g8f6 h5f7";

/// Plies to process before declaring the replay stuck.
const REPLAY_EVENT_BUDGET: u32 = 64;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    run_replay(config).await
}

/// Builds the effective configuration from the config file and CLI overrides.
fn resolve_config(cli: &Cli) -> Result<PilotConfig> {
    let mut config = match &cli.config {
        Some(path) => PilotConfig::from_file(path)?,
        None => {
            let name = cli.name.clone().context(
                "local player name required: pass --name or a config file with local_name",
            )?;
            PilotConfig::new(name)
        }
    };

    if let Some(name) = &cli.name {
        config.set_local_name(name.clone());
    }
    if let Some(endpoint) = &cli.endpoint {
        config.set_endpoint(endpoint.clone());
    }
    if cli.random {
        config.set_random_moves(true);
    }

    Ok(config)
}

/// Picks the active move source from the configuration.
fn build_source(config: &PilotConfig) -> Result<Box<dyn MoveSource>> {
    if *config.random_moves() {
        info!("Playing random moves");
        return Ok(Box::new(RandomMoveSource::new()));
    }

    info!(endpoint = %config.endpoint(), "Playing moves from the decision service");
    let source = RemoteMoveSource::with_timeout(
        config.endpoint().clone(),
        Duration::from_secs(*config.request_timeout_secs()),
    )?;
    Ok(Box::new(source))
}

/// Replays the scripted line through the controller.
///
/// The local side plays White from the bottom seat; the opponent's
/// plies come straight from the script. Every apply is followed by a
/// move event, exactly as the host page would fire them.
async fn run_replay(config: PilotConfig) -> Result<()> {
    let source = build_source(&config)?;
    let board = ScriptedBoard::from_codes(REPLAY_LINE, "1-0")?
        .with_bottom_name(config.local_name().clone());

    let mut controller = SyncController::new(board, source, config.local_name().clone());
    controller.init().await?;

    let mut budget = REPLAY_EVENT_BUDGET;
    loop {
        if controller.host().is_game_over() {
            // The event announcing the final ply.
            controller.handle_move_event().await?;
            break;
        }

        budget -= 1;
        if budget == 0 {
            anyhow::bail!("replay stalled: no progress after {REPLAY_EVENT_BUDGET} events");
        }

        if Some(controller.host().turn()) == controller.color() {
            controller.handle_move_event().await?;
            continue;
        }

        let Some(reply) = controller.host().legal_moves().first().copied() else {
            break;
        };
        controller.host_mut().apply(&reply)?;
        info!(mv = %reply, "Opponent replied");
        controller.handle_move_event().await?;
    }

    info!(
        plies = controller.host().history().len(),
        "Replay finished"
    );
    Ok(())
}
