//! Move source trait and implementations.

mod random;
mod remote;

pub use random::RandomMoveSource;
pub use remote::RemoteMoveSource;

use crate::moves::Move;
use derive_more::{Display, Error};

/// Context sent along with a move request.
///
/// Carries either the previous move or a full position snapshot, never
/// both: the snapshot is sent only on the first request of a freshly
/// started game. The current legal-move set rides along for sources
/// that pick locally instead of asking the decision service.
#[derive(Debug, Clone, Default)]
pub struct MoveRequest {
    previous: Option<Move>,
    position: Option<String>,
    legal: Vec<Move>,
}

impl MoveRequest {
    /// Request for the first move of a freshly started game, carrying
    /// a full position snapshot.
    pub fn opening(position: String, legal: Vec<Move>) -> Self {
        Self {
            previous: None,
            position: Some(position),
            legal,
        }
    }

    /// Request for a reply to the opponent's last move.
    pub fn reply(previous: Move, legal: Vec<Move>) -> Self {
        Self {
            previous: Some(previous),
            position: None,
            legal,
        }
    }

    /// The opponent's last move, when this is a reply request.
    pub fn previous(&self) -> Option<&Move> {
        self.previous.as_ref()
    }

    /// The position snapshot, when this is an opening request.
    pub fn position(&self) -> Option<&str> {
        self.position.as_deref()
    }

    /// Legal moves in the current position.
    pub fn legal(&self) -> &[Move] {
        &self.legal
    }
}

/// Errors produced while obtaining a move.
#[derive(Debug, Display, Error)]
pub enum SourceError {
    /// The decision endpoint could not be reached or timed out.
    #[display("decision endpoint unreachable: {_0}")]
    Transport(#[error(source)] reqwest::Error),
    /// The decision endpoint answered with something other than a move code.
    #[display("unusable reply from decision endpoint: {_0}")]
    Protocol(#[error(not(source))] String),
    /// No legal moves were available to pick from.
    #[display("no legal moves available")]
    Exhausted,
}

/// A source of moves for the local side.
#[async_trait::async_trait]
pub trait MoveSource: Send {
    /// Produces the next move for the position described by `request`.
    async fn next_move(&mut self, request: &MoveRequest) -> Result<Move, SourceError>;

    /// Short name used in logs.
    fn name(&self) -> &str;
}
