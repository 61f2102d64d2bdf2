//! Collaborator traits for the host board and its surrounding page.

use crate::moves::{Color, Move};
use derive_more::{Display, Error};

/// The board rejected a move.
///
/// Raised when the host considers a move illegal or stale. The
/// controller discards the rejected move without retrying.
#[derive(Debug, Clone, Display, Error)]
#[display("board rejected move {code}: {reason}")]
pub struct ApplyError {
    /// Serialized code of the rejected move.
    pub code: String,
    /// Why the board refused it.
    pub reason: String,
}

impl ApplyError {
    /// Creates a new rejection for `mv`.
    pub fn new(mv: &Move, reason: impl Into<String>) -> Self {
        Self {
            code: mv.to_string(),
            reason: reason.into(),
        }
    }
}

/// The live game as exposed by the host.
///
/// The host fires a move event for every ply, including the moves this
/// process applies itself; the controller is called back through
/// [`SyncController::handle_move_event`](crate::SyncController::handle_move_event).
pub trait GameBoard {
    /// The most recently played move, if any ply has been played.
    fn last_move(&self) -> Option<Move>;

    /// Legal moves in the current position.
    fn legal_moves(&self) -> Vec<Move>;

    /// Which color moves next.
    fn turn(&self) -> Color;

    /// Whether the game has ended.
    fn is_game_over(&self) -> bool;

    /// Raw result string, e.g. `1-0`, `0-1`, or `1/2-1/2`.
    fn result(&self) -> String;

    /// Full position snapshot sufficient to resume play without history.
    fn fen(&self) -> String;

    /// Whether the board is drawn with Black at the bottom.
    fn flipped(&self) -> bool;

    /// Plays `mv` on the board.
    fn apply(&mut self, mv: &Move) -> Result<(), ApplyError>;
}

/// Read-only view of the page around the board.
pub trait SeatView {
    /// Display name shown in the bottom player panel, when visible.
    fn bottom_player_name(&self) -> Option<String>;

    /// Whether a game-mode or matchmaking overlay is covering the board.
    fn overlay_present(&self) -> bool;
}
