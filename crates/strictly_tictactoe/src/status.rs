//! Derived game status.

use super::Player;
use super::rules::WinningLine;
use serde::{Deserialize, Serialize};

/// Status of the active snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// A line is complete.
    Won(WinningLine),
    /// Board is full with no line.
    Draw,
    /// Game continues with `next` to move.
    InProgress {
        /// Player whose mark the next move places.
        next: Player,
    },
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(line) => Some(*line.player()),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        match self {
            GameStatus::Won(line) => Some(line),
            _ => None,
        }
    }

    /// Returns true if no further move can be played from this snapshot.
    pub fn is_finished(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Won(line) => write!(f, "Winner: {}", line.player()),
            GameStatus::Draw => write!(f, "Draw"),
            GameStatus::InProgress { next } => write!(f, "Next player: {}", next),
        }
    }
}
