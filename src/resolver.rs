//! Derives which color the local participant is playing.

use crate::moves::Color;
use derive_more::{Display, Error};
use tracing::debug;

/// The playing color could not be determined.
#[derive(Debug, Clone, Display, Error)]
#[display("cannot resolve playing color: {message}")]
pub struct ResolutionError {
    /// What signal was missing.
    pub message: String,
}

impl ResolutionError {
    /// Creates a new resolution error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Resolves the local participant's color from seat identity and orientation.
///
/// The local side sits at the bottom of an unflipped board. So the
/// local participant plays White when the bottom panel shows their own
/// name on an unflipped board, or someone else's name on a flipped one;
/// otherwise Black.
pub fn resolve_color(local_name: &str, flipped: bool, bottom_name: &str) -> Color {
    let color = if (bottom_name == local_name) != flipped {
        Color::White
    } else {
        Color::Black
    };
    debug!(bottom_name = %bottom_name, flipped, color = %color, "Resolved playing color");
    color
}
