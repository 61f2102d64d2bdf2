//! Remote decision service client.

use super::{MoveRequest, MoveSource, SourceError};
use crate::moves::Move;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// How long a single request may stay in flight.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// Attempts before a failure is surfaced to the caller.
const ATTEMPTS: u32 = 3;
/// Delay before the first retry; doubles on each subsequent one.
const INITIAL_BACKOFF: Duration = Duration::from_millis(500);

/// Asks an external decision service for the next move.
///
/// Sends `GET <endpoint>?prev_move=<code>` for a reply request,
/// `GET <endpoint>?fen_str=<fen>` for an opening request, or a bare
/// `GET <endpoint>` when the request carries neither. The response body
/// is plain text containing exactly one move code.
pub struct RemoteMoveSource {
    endpoint: String,
    client: reqwest::Client,
    attempts: u32,
    backoff: Duration,
}

impl RemoteMoveSource {
    /// Creates a client for the decision service at `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, SourceError> {
        Self::with_timeout(endpoint, REQUEST_TIMEOUT)
    }

    /// Creates a client with a custom request timeout.
    pub fn with_timeout(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(SourceError::Transport)?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
            attempts: ATTEMPTS,
            backoff: INITIAL_BACKOFF,
        })
    }

    /// Overrides the retry policy.
    pub fn with_retries(mut self, attempts: u32, backoff: Duration) -> Self {
        self.attempts = attempts.max(1);
        self.backoff = backoff;
        self
    }

    async fn fetch_once(&self, request: &MoveRequest) -> Result<Move, SourceError> {
        let mut http = self.client.get(&self.endpoint);
        if let Some(fen) = request.position() {
            http = http.query(&[("fen_str", fen)]);
        } else if let Some(prev) = request.previous() {
            http = http.query(&[("prev_move", prev.to_string().as_str())]);
        }

        let response = http.send().await.map_err(SourceError::Transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Protocol(format!("HTTP {status}")));
        }

        let body = response.text().await.map_err(SourceError::Transport)?;
        let code = body.trim();
        if code.is_empty() {
            return Err(SourceError::Protocol("empty response body".to_string()));
        }

        code.parse::<Move>()
            .map_err(|e| SourceError::Protocol(format!("{e} in body {code:?}")))
    }
}

#[async_trait::async_trait]
impl MoveSource for RemoteMoveSource {
    async fn next_move(&mut self, request: &MoveRequest) -> Result<Move, SourceError> {
        debug!(
            prev_move = ?request.previous().map(Move::to_string),
            snapshot = request.position().is_some(),
            "Requesting move from decision service"
        );

        let mut backoff = self.backoff;
        let mut attempt = 1;
        loop {
            match self.fetch_once(request).await {
                Ok(mv) => {
                    info!(mv = %mv, attempt, "Decision service answered");
                    return Ok(mv);
                }
                Err(e) if attempt < self.attempts => {
                    warn!(error = %e, attempt, "Decision request failed, retrying");
                    sleep(backoff).await;
                    backoff *= 2;
                    attempt += 1;
                }
                Err(e) => {
                    warn!(error = %e, attempt, "Decision request failed, giving up");
                    return Err(e);
                }
            }
        }
    }

    fn name(&self) -> &str {
        "remote"
    }
}
