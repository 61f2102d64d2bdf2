//! In-memory board that replays a scripted line of play.

use crate::board::{ApplyError, GameBoard, SeatView};
use crate::moves::{Color, Move, ParseMoveError};

/// Standard starting position.
const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A host double that walks through a fixed game.
///
/// The scripted line doubles as the legal-move set: at every ply the
/// only legal move is the next one in the script, so no rules engine
/// is needed. The game is over once the line is exhausted. Used by the
/// demo binary to drive the controller end to end.
#[derive(Debug, Clone)]
pub struct ScriptedBoard {
    line: Vec<Move>,
    history: Vec<Move>,
    result: String,
    start_position: String,
    flipped: bool,
    bottom_name: Option<String>,
    overlay: bool,
}

impl ScriptedBoard {
    /// Creates a board that replays `line` and reports `result` at the end.
    pub fn new(line: Vec<Move>, result: impl Into<String>) -> Self {
        Self {
            line,
            history: Vec::new(),
            result: result.into(),
            start_position: START_FEN.to_string(),
            flipped: false,
            bottom_name: None,
            overlay: false,
        }
    }

    /// Parses a space-separated list of move codes into a board.
    pub fn from_codes(codes: &str, result: impl Into<String>) -> Result<Self, ParseMoveError> {
        let line = codes
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Move>, _>>()?;
        Ok(Self::new(line, result))
    }

    /// Sets the name shown in the bottom player panel.
    pub fn with_bottom_name(mut self, name: impl Into<String>) -> Self {
        self.bottom_name = Some(name.into());
        self
    }

    /// Flips the board orientation.
    pub fn with_flipped(mut self, flipped: bool) -> Self {
        self.flipped = flipped;
        self
    }

    /// Shows or hides the selection overlay.
    pub fn set_overlay(&mut self, present: bool) {
        self.overlay = present;
    }

    /// Moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}

impl GameBoard for ScriptedBoard {
    fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    fn legal_moves(&self) -> Vec<Move> {
        match self.line.get(self.history.len()) {
            Some(mv) => vec![*mv],
            None => Vec::new(),
        }
    }

    fn turn(&self) -> Color {
        if self.history.len() % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    fn is_game_over(&self) -> bool {
        self.history.len() >= self.line.len()
    }

    fn result(&self) -> String {
        if self.is_game_over() {
            self.result.clone()
        } else {
            "*".to_string()
        }
    }

    fn fen(&self) -> String {
        self.start_position.clone()
    }

    fn flipped(&self) -> bool {
        self.flipped
    }

    fn apply(&mut self, mv: &Move) -> Result<(), ApplyError> {
        if self.is_game_over() {
            return Err(ApplyError::new(mv, "game is over"));
        }
        self.history.push(*mv);
        Ok(())
    }
}

impl SeatView for ScriptedBoard {
    fn bottom_player_name(&self) -> Option<String> {
        self.bottom_name.clone()
    }

    fn overlay_present(&self) -> bool {
        self.overlay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_walks_the_line() {
        let mut board = ScriptedBoard::from_codes("e2e4 e7e5", "1/2-1/2").unwrap();
        assert_eq!(board.turn(), Color::White);
        assert!(!board.is_game_over());
        assert_eq!(board.result(), "*");

        let first = board.legal_moves()[0];
        board.apply(&first).unwrap();
        assert_eq!(board.turn(), Color::Black);
        assert_eq!(board.last_move(), Some(first));

        let second = board.legal_moves()[0];
        board.apply(&second).unwrap();
        assert!(board.is_game_over());
        assert_eq!(board.result(), "1/2-1/2");
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn test_apply_after_end_is_rejected() {
        let mut board = ScriptedBoard::from_codes("e2e4", "1-0").unwrap();
        let mv = board.legal_moves()[0];
        board.apply(&mv).unwrap();
        assert!(board.apply(&mv).is_err());
    }
}
