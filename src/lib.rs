//! Turn synchronization for an automated chess-playing client.
//!
//! Watches a live game's move stream, decides whose turn it is, and on
//! the local side's turn obtains a move from a pluggable source and
//! applies it to the board.
//!
//! # Architecture
//!
//! - **Controller**: event-driven state machine reacting to the host's
//!   move and mode-change events
//! - **Sources**: where moves come from (uniform random, or a remote
//!   decision service over HTTP)
//! - **Resolver**: derives the local playing color from seat identity
//!   and board orientation
//! - **Lifecycle**: tracks game start/end and the restart listener
//!
//! # Example
//!
//! ```no_run
//! use chess_autopilot::{RandomMoveSource, ScriptedBoard, SyncController};
//!
//! # async fn example() -> Result<(), chess_autopilot::ControllerError> {
//! let board = ScriptedBoard::from_codes("e2e4 e7e5", "1/2-1/2")
//!     .expect("valid line")
//!     .with_bottom_name("alice");
//!
//! let mut controller =
//!     SyncController::new(board, Box::new(RandomMoveSource::new()), "alice");
//! controller.init().await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod config;
mod controller;
mod lifecycle;
mod moves;
mod replay;
mod resolver;
mod sources;

// Crate-level exports - Collaborator traits
pub use board::{ApplyError, GameBoard, SeatView};

// Crate-level exports - Configuration
pub use config::{ConfigError, PilotConfig};

// Crate-level exports - Controller
pub use controller::{ControllerError, ControllerState, SyncController};

// Crate-level exports - Lifecycle tracking
pub use lifecycle::GameLifecycle;

// Crate-level exports - Move and game data types
pub use moves::{Color, Move, Outcome, ParseMoveError, PieceKind, Square};

// Crate-level exports - Scripted replay board
pub use replay::ScriptedBoard;

// Crate-level exports - Color resolution
pub use resolver::{ResolutionError, resolve_color};

// Crate-level exports - Move sources
pub use sources::{MoveRequest, MoveSource, RandomMoveSource, RemoteMoveSource, SourceError};
