//! Shared test doubles for controller tests.

use chess_autopilot::{
    ApplyError, Color, GameBoard, Move, MoveRequest, MoveSource, SeatView, SourceError,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Interior state of [`MockHost`], shared with the test body so the
/// board can change while the controller owns it.
#[derive(Debug, Clone)]
pub struct HostState {
    pub last_move: Option<Move>,
    pub legal: Vec<Move>,
    pub turn: Color,
    pub game_over: bool,
    pub result: String,
    pub fen: String,
    pub flipped: bool,
    pub bottom_name: Option<String>,
    pub overlay: bool,
    pub reject_moves: bool,
    pub applied: Vec<Move>,
}

impl Default for HostState {
    fn default() -> Self {
        Self {
            last_move: None,
            legal: vec![mv("e2e4")],
            turn: Color::White,
            game_over: false,
            result: "*".to_string(),
            fen: "fen-snapshot".to_string(),
            flipped: false,
            bottom_name: Some("alice".to_string()),
            overlay: false,
            reject_moves: false,
            applied: Vec::new(),
        }
    }
}

/// Host double backed by shared state.
#[derive(Clone, Default)]
pub struct MockHost {
    state: Arc<Mutex<HostState>>,
}

impl MockHost {
    pub fn new(state: HostState) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Handle for mutating the host from outside the controller.
    pub fn handle(&self) -> Arc<Mutex<HostState>> {
        Arc::clone(&self.state)
    }
}

impl GameBoard for MockHost {
    fn last_move(&self) -> Option<Move> {
        self.state.lock().unwrap().last_move
    }

    fn legal_moves(&self) -> Vec<Move> {
        self.state.lock().unwrap().legal.clone()
    }

    fn turn(&self) -> Color {
        self.state.lock().unwrap().turn
    }

    fn is_game_over(&self) -> bool {
        self.state.lock().unwrap().game_over
    }

    fn result(&self) -> String {
        self.state.lock().unwrap().result.clone()
    }

    fn fen(&self) -> String {
        self.state.lock().unwrap().fen.clone()
    }

    fn flipped(&self) -> bool {
        self.state.lock().unwrap().flipped
    }

    fn apply(&mut self, applied: &Move) -> Result<(), ApplyError> {
        let mut state = self.state.lock().unwrap();
        if state.reject_moves {
            return Err(ApplyError::new(applied, "rejected by test"));
        }
        state.applied.push(*applied);
        state.last_move = Some(*applied);
        state.turn = state.turn.opponent();
        Ok(())
    }
}

impl SeatView for MockHost {
    fn bottom_player_name(&self) -> Option<String> {
        self.state.lock().unwrap().bottom_name.clone()
    }

    fn overlay_present(&self) -> bool {
        self.state.lock().unwrap().overlay
    }
}

/// Move source double that records every request and replays queued answers.
pub struct RecordingSource {
    requests: Arc<Mutex<Vec<MoveRequest>>>,
    replies: VecDeque<Move>,
    end_game_handle: Option<Arc<Mutex<HostState>>>,
}

impl RecordingSource {
    pub fn new(replies: &[&str]) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            replies: replies.iter().map(|code| mv(code)).collect(),
            end_game_handle: None,
        }
    }

    /// Handle for inspecting the requests the controller sent.
    pub fn requests(&self) -> Arc<Mutex<Vec<MoveRequest>>> {
        Arc::clone(&self.requests)
    }

    /// Ends the game on `host` right before replying, emulating a game
    /// that finishes while the request is in flight.
    pub fn end_game_before_reply(mut self, host: Arc<Mutex<HostState>>) -> Self {
        self.end_game_handle = Some(host);
        self
    }
}

#[async_trait::async_trait]
impl MoveSource for RecordingSource {
    async fn next_move(&mut self, request: &MoveRequest) -> Result<Move, SourceError> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(host) = &self.end_game_handle {
            let mut state = host.lock().unwrap();
            state.game_over = true;
            state.result = "0-1".to_string();
        }
        self.replies.pop_front().ok_or(SourceError::Exhausted)
    }

    fn name(&self) -> &str {
        "recording"
    }
}

/// Parses a move code, panicking on bad test input.
pub fn mv(code: &str) -> Move {
    code.parse().unwrap()
}
