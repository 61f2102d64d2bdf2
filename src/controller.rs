//! The turn-synchronization state machine.

use crate::board::{GameBoard, SeatView};
use crate::lifecycle::GameLifecycle;
use crate::moves::{Color, Outcome};
use crate::resolver::{ResolutionError, resolve_color};
use crate::sources::{MoveRequest, MoveSource, SourceError};
use derive_more::{Display, Error, From};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, instrument, warn};

/// Interval between settle-loop probes after a mode change.
const SETTLE_INTERVAL: Duration = Duration::from_millis(100);
/// Probes before giving up on a mode change and waiting for the next one.
const SETTLE_ATTEMPTS: u32 = 10;

/// Where the controller currently is in the synchronization cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Waiting for a relevant move event.
    Idle,
    /// A move request is in flight.
    AwaitingMove,
    /// The game ended; terminal until a new game starts.
    GameEnded,
    /// Waiting for the mode-change signal that a new game has begun.
    AwaitingRestart,
}

/// Controller failure surfaced to the caller.
///
/// Board rejections are not represented here: a rejected move is
/// discarded without retry rather than propagated.
#[derive(Debug, Display, Error, From)]
pub enum ControllerError {
    /// The playing color could not be resolved.
    #[display("{_0}")]
    Resolution(ResolutionError),
    /// The move source failed after exhausting its retries.
    #[display("{_0}")]
    Source(SourceError),
}

/// Reacts to the host's move and mode-change events, requests moves
/// from the active source on the local side's turn, and applies them.
///
/// All work runs on one logical thread in response to the host's
/// callbacks; an applied move triggers the host's next move event,
/// closing the loop without explicit iteration.
pub struct SyncController<H> {
    host: H,
    source: Box<dyn MoveSource>,
    lifecycle: GameLifecycle,
    local_name: String,
    color: Option<Color>,
    state: ControllerState,
    settle_interval: Duration,
    settle_attempts: u32,
}

impl<H> SyncController<H>
where
    H: GameBoard + SeatView,
{
    /// Creates a controller for `host` playing moves from `source`.
    ///
    /// `local_name` is the display name of the account this process
    /// plays for; it must match what the seat view reports.
    pub fn new(host: H, source: Box<dyn MoveSource>, local_name: impl Into<String>) -> Self {
        Self {
            host,
            source,
            lifecycle: GameLifecycle::new(),
            local_name: local_name.into(),
            color: None,
            state: ControllerState::Idle,
            settle_interval: SETTLE_INTERVAL,
            settle_attempts: SETTLE_ATTEMPTS,
        }
    }

    /// Overrides the mode-change settle policy.
    pub fn with_settle(mut self, interval: Duration, attempts: u32) -> Self {
        self.settle_interval = interval;
        self.settle_attempts = attempts.max(1);
        self
    }

    /// Current state-machine state.
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// The resolved local color, once a game has started.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// The lifecycle tracker.
    pub fn lifecycle(&self) -> &GameLifecycle {
        &self.lifecycle
    }

    /// The host collaborator.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host collaborator.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Startup entry point.
    ///
    /// If no selection overlay is showing, the game is already set up
    /// and play starts immediately; otherwise the restart listener is
    /// armed and the controller waits for a mode change. A missing
    /// identity signal is fatal here.
    #[instrument(skip(self), fields(source = self.source.name()))]
    pub async fn init(&mut self) -> Result<(), ControllerError> {
        if self.host.overlay_present() {
            info!("Selection overlay showing, waiting for a game to start");
            self.lifecycle.arm_listener();
            self.state = ControllerState::AwaitingRestart;
            return Ok(());
        }
        self.begin_game().await
    }

    /// Handles the host's move event, fired once per ply.
    ///
    /// Most events are informational (the opponent moved, or our own
    /// applied move echoed back); the controller acts only when the
    /// game ended or it is now the local side's turn.
    pub async fn handle_move_event(&mut self) -> Result<(), ControllerError> {
        if self.host.is_game_over() {
            self.finish_game();
            return Ok(());
        }

        let Some(color) = self.color else {
            return Ok(());
        };
        if self.host.turn() != color {
            return Ok(());
        }

        let request = if self.lifecycle.just_ended() {
            self.lifecycle.mark_game_started();
            debug!("Fresh game, sending position snapshot");
            MoveRequest::opening(self.host.fen(), self.host.legal_moves())
        } else {
            match self.host.last_move() {
                Some(previous) => MoveRequest::reply(previous, self.host.legal_moves()),
                None => {
                    // Duplicate event from the host: mid-game but no ply
                    // on record. Acting here would double-process.
                    debug!("Spurious move event, ignoring");
                    return Ok(());
                }
            }
        };

        self.state = ControllerState::AwaitingMove;
        let chosen = match self.source.next_move(&request).await {
            Ok(mv) => mv,
            Err(e) => {
                self.state = ControllerState::Idle;
                error!(source = self.source.name(), error = %e, "Move source failed");
                return Err(e.into());
            }
        };

        if self.host.is_game_over() {
            warn!(mv = %chosen, "Game ended while the request was in flight, discarding reply");
            self.finish_game();
            return Ok(());
        }

        match self.host.apply(&chosen) {
            Ok(()) => {
                info!(mv = %chosen, source = self.source.name(), "Applied move");
                self.state = ControllerState::Idle;
            }
            Err(e) => {
                warn!(error = %e, "Board rejected move, discarding");
                self.state = ControllerState::Idle;
            }
        }

        Ok(())
    }

    /// Handles the host's mode-change event.
    ///
    /// Observed only while waiting for a restart with the listener
    /// armed. Selection screens linger briefly after the mode flips,
    /// so the live-board check is polled a bounded number of times;
    /// if it never holds, the controller stays put and the next
    /// mode-change event tries again.
    pub async fn handle_mode_change(&mut self) -> Result<(), ControllerError> {
        if self.state != ControllerState::AwaitingRestart || !self.lifecycle.listener_armed() {
            return Ok(());
        }

        if !self.wait_for_live_board().await {
            warn!("Board did not become live after mode change, still waiting");
            return Ok(());
        }

        self.lifecycle.disarm_listener();
        self.begin_game().await
    }

    /// Forces resynchronization after the decision service was reset
    /// underneath us mid-game.
    ///
    /// Re-enters move handling directly, bypassing the restart
    /// listener; the next request carries a full position snapshot so
    /// the service can rebuild its board.
    #[instrument(skip(self))]
    pub async fn reconnect(&mut self) -> Result<(), ControllerError> {
        info!("Resynchronizing with restarted decision service");
        self.lifecycle.mark_game_over();
        self.state = ControllerState::Idle;
        self.handle_move_event().await
    }

    /// Starts play on a freshly set-up board: resolve the local color
    /// and process a synthetic move event, which covers the case where
    /// it is already the local side's move.
    async fn begin_game(&mut self) -> Result<(), ControllerError> {
        let color = self.resolve_local_color()?;
        info!(color = %color, "New game");
        self.color = Some(color);
        self.state = ControllerState::Idle;
        self.handle_move_event().await
    }

    fn resolve_local_color(&self) -> Result<Color, ResolutionError> {
        let bottom_name = self
            .host
            .bottom_player_name()
            .ok_or_else(|| ResolutionError::new("bottom player panel has no name"))?;
        Ok(resolve_color(
            &self.local_name,
            self.host.flipped(),
            &bottom_name,
        ))
    }

    /// Records game end, derives the outcome once, and arms the
    /// restart listener exactly once.
    fn finish_game(&mut self) {
        self.lifecycle.mark_game_over();

        if self.state != ControllerState::AwaitingRestart {
            self.state = ControllerState::GameEnded;
            let result = self.host.result();
            if let Some(color) = self.color {
                let outcome = Outcome::from_result(&result, color);
                info!(result = %result, outcome = %outcome, "Game over");
            } else {
                info!(result = %result, "Game over");
            }
        }

        if !self.lifecycle.listener_armed() {
            self.lifecycle.arm_listener();
            self.state = ControllerState::AwaitingRestart;
        }
    }

    /// Polls until the board is live (game running, no overlay) or the
    /// attempt budget runs out.
    async fn wait_for_live_board(&self) -> bool {
        for attempt in 1..=self.settle_attempts {
            sleep(self.settle_interval).await;
            if !self.host.is_game_over() && !self.host.overlay_present() {
                debug!(attempt, "Board is live");
                return true;
            }
        }
        false
    }
}
