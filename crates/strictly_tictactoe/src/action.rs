//! First-class action types for tic-tac-toe.
//!
//! A move that cannot be played is an expected outcome of user input, not a
//! fault, so placement reports it through [`MoveOutcome`] instead of an error.

use super::{Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a move was not played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveRejection {
    /// The active snapshot already has a winning line.
    #[display("Game is already over")]
    GameOver,

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
}

/// Result of asking a timeline to place a mark.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was played and appended to history.
    Accepted(Move),
    /// The move was ignored; the timeline is unchanged.
    Rejected(MoveRejection),
}

impl MoveOutcome {
    /// Returns true if the move was played.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted(_))
    }

    /// Returns the rejection reason, if the move was ignored.
    pub fn rejection(&self) -> Option<MoveRejection> {
        match self {
            MoveOutcome::Accepted(_) => None,
            MoveOutcome::Rejected(reason) => Some(*reason),
        }
    }
}
