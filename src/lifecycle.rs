//! Process-wide game lifecycle state, mutated only by the controller.

/// Records whether a game is running, whether it just ended, and
/// whether the restart listener is armed.
///
/// Owned by one [`SyncController`](crate::SyncController) instance;
/// there is no persistence, the state resets with the process.
#[derive(Debug, Clone)]
pub struct GameLifecycle {
    in_progress: bool,
    just_ended: bool,
    listener_armed: bool,
}

impl Default for GameLifecycle {
    /// Starts as if a previous game had just ended, so the first move
    /// request of the process carries a full position snapshot.
    fn default() -> Self {
        Self {
            in_progress: false,
            just_ended: true,
            listener_armed: false,
        }
    }
}

impl GameLifecycle {
    /// Creates the initial lifecycle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a game is currently in progress.
    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    /// Whether the last observed game has ended and no new one started.
    pub fn just_ended(&self) -> bool {
        self.just_ended
    }

    /// Whether the restart listener is currently armed.
    pub fn listener_armed(&self) -> bool {
        self.listener_armed
    }

    /// Records that play has started.
    pub fn mark_game_started(&mut self) {
        self.in_progress = true;
        self.just_ended = false;
    }

    /// Records that the game has ended.
    pub fn mark_game_over(&mut self) {
        self.in_progress = false;
        self.just_ended = true;
    }

    /// Arms the restart listener.
    pub fn arm_listener(&mut self) {
        self.listener_armed = true;
    }

    /// Disarms the restart listener.
    pub fn disarm_listener(&mut self) {
        self.listener_armed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_reads_as_freshly_ended() {
        let lifecycle = GameLifecycle::new();
        assert!(!lifecycle.in_progress());
        assert!(lifecycle.just_ended());
        assert!(!lifecycle.listener_armed());
    }

    #[test]
    fn test_start_and_finish_flip_both_flags() {
        let mut lifecycle = GameLifecycle::new();

        lifecycle.mark_game_started();
        assert!(lifecycle.in_progress());
        assert!(!lifecycle.just_ended());

        lifecycle.mark_game_over();
        assert!(!lifecycle.in_progress());
        assert!(lifecycle.just_ended());
    }

    #[test]
    fn test_listener_toggles_independently() {
        let mut lifecycle = GameLifecycle::new();
        lifecycle.arm_listener();
        lifecycle.mark_game_started();
        assert!(lifecycle.listener_armed());
        lifecycle.disarm_listener();
        assert!(!lifecycle.listener_armed());
    }
}
