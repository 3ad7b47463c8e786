//! Error taxonomy for board construction and play.
//!
//! The board validates inputs at its own boundary; the search engine assumes
//! its transform callback only yields legal moves and does not re-validate.

use thiserror::Error;

/// Errors surfaced by the board-state API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Invalid construction parameters (zero extents, empty offensive player).
    #[error("invalid configuration: {reason}")]
    Configuration { reason: &'static str },

    /// Move outside the board or onto an occupied cell.
    #[error("invalid move at ({row}, {col}): {reason}")]
    InvalidMove {
        row: u16,
        col: u16,
        reason: &'static str,
    },

    /// Move attempted after the game has finished.
    #[error("game has already finished")]
    GameOver,

    /// Retract with no moves played.
    #[error("no moves to retract")]
    EmptyHistory,
}
