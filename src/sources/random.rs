//! Uniformly random move source with an artificial think delay.

use super::{MoveRequest, MoveSource, SourceError};
use crate::moves::Move;
use rand::prelude::*;
use std::time::Duration;
use tracing::debug;

/// How long the random source pretends to think before answering.
const THINK_DELAY: Duration = Duration::from_secs(3);

/// Picks uniformly at random from the request's legal-move set.
///
/// Ignores the previous move and position snapshot entirely; the delay
/// emulates thinking time so the host does not see instant replies.
pub struct RandomMoveSource {
    rng: StdRng,
    delay: Duration,
}

impl RandomMoveSource {
    /// Creates a source seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            delay: THINK_DELAY,
        }
    }

    /// Creates a deterministic source for reproducible behavior.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            delay: THINK_DELAY,
        }
    }

    /// Overrides the think delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for RandomMoveSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl MoveSource for RandomMoveSource {
    async fn next_move(&mut self, request: &MoveRequest) -> Result<Move, SourceError> {
        tokio::time::sleep(self.delay).await;

        let mv = request
            .legal()
            .choose(&mut self.rng)
            .copied()
            .ok_or(SourceError::Exhausted)?;

        debug!(mv = %mv, candidates = request.legal().len(), "Picked random move");
        Ok(mv)
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legal_set() -> Vec<Move> {
        ["e2e4", "d2d4", "g1f3"]
            .iter()
            .map(|code| code.parse().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_pick_is_member_of_legal_set() {
        let legal = legal_set();
        let mut source = RandomMoveSource::seeded(7).with_delay(Duration::ZERO);

        for _ in 0..32 {
            let request = MoveRequest::reply("e7e5".parse().unwrap(), legal.clone());
            let mv = source.next_move(&request).await.unwrap();
            assert!(legal.contains(&mv));
        }
    }

    #[tokio::test]
    async fn test_empty_legal_set_is_an_error() {
        let mut source = RandomMoveSource::seeded(7).with_delay(Duration::ZERO);
        let request = MoveRequest::opening("8/8/8/8/8/8/8/8 w - - 0 1".to_string(), Vec::new());
        assert!(matches!(
            source.next_move(&request).await,
            Err(SourceError::Exhausted)
        ));
    }
}
