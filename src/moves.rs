//! Move, square, color, and outcome types with the wire codec.

use derive_more::{Display, Error};
use std::fmt;
use std::str::FromStr;
use strum::EnumString;

/// Error parsing a square or move code.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseMoveError {
    /// Code is not 4 or 5 ASCII characters.
    #[display("move code must be 4 or 5 characters, got {_0}")]
    Length(#[error(not(source))] usize),
    /// A coordinate is outside a1..h8.
    #[display("bad square {_0:?} in move code")]
    BadSquare(#[error(not(source))] String),
    /// The promotion letter is not one of q, r, b, n.
    #[display("bad promotion letter {_0:?}")]
    BadPromotion(#[error(not(source))] char),
    /// Origin and destination are the same square.
    #[display("degenerate move code {_0:?}")]
    NullMove(#[error(not(source))] String),
}

/// A board coordinate such as `e4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// File letter, `a` through `h`.
    pub fn file(&self) -> char {
        self.file as char
    }

    /// Rank digit, `1` through `8`.
    pub fn rank(&self) -> char {
        self.rank as char
    }
}

impl FromStr for Square {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        match bytes {
            [file @ b'a'..=b'h', rank @ b'1'..=b'8'] => Ok(Self {
                file: *file,
                rank: *rank,
            }),
            _ => Err(ParseMoveError::BadSquare(s.to_string())),
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/// Piece a pawn may promote to, identified by its code letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, strum::Display)]
pub enum PieceKind {
    /// Queen (`q`).
    #[strum(serialize = "q")]
    Queen,
    /// Rook (`r`).
    #[strum(serialize = "r")]
    Rook,
    /// Bishop (`b`).
    #[strum(serialize = "b")]
    Bishop,
    /// Knight (`n`).
    #[strum(serialize = "n")]
    Knight,
}

/// A single move, serialized as `fromto[promotion]` (4 or 5 characters).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// Origin square.
    pub from: Square,
    /// Destination square.
    pub to: Square,
    /// Promotion piece, present only on promoting pawn moves.
    pub promotion: Option<PieceKind>,
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        if !code.is_ascii() || !(code.len() == 4 || code.len() == 5) {
            return Err(ParseMoveError::Length(code.chars().count()));
        }

        let from: Square = code[0..2].parse()?;
        let to: Square = code[2..4].parse()?;
        if from == to {
            return Err(ParseMoveError::NullMove(code.to_string()));
        }

        let promotion = match code[4..].chars().next() {
            Some(letter) => Some(
                code[4..]
                    .parse::<PieceKind>()
                    .map_err(|_| ParseMoveError::BadPromotion(letter))?,
            ),
            None => None,
        };

        Ok(Self {
            from,
            to,
            promotion,
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{kind}")?;
        }
        Ok(())
    }
}

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Color {
    /// The white pieces.
    White,
    /// The black pieces.
    Black,
}

impl Color {
    /// Turn identifier as reported by the board (1 = White, 2 = Black).
    pub fn turn_index(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 2,
        }
    }

    /// The other side.
    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// How a finished game went for the local participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Outcome {
    /// The local side won.
    LocalWin,
    /// The local side lost.
    LocalLoss,
    /// Drawn game.
    Draw,
}

impl Outcome {
    /// Derives the outcome from the board's result string and the local color.
    ///
    /// `"1-0"` means White won and `"0-1"` means Black won; any other
    /// result string counts as a draw.
    pub fn from_result(result: &str, local: Color) -> Self {
        let winner = match result {
            "1-0" => Some(Color::White),
            "0-1" => Some(Color::Black),
            _ => None,
        };

        match winner {
            None => Outcome::Draw,
            Some(color) if color == local => Outcome::LocalWin,
            Some(_) => Outcome::LocalLoss,
        }
    }
}
