//! Timeline error types.

use super::action::MoveRejection;
use derive_more::{Display, Error};

/// Caller contract violations reported by a [`Timeline`](crate::Timeline).
///
/// Rejected moves are not errors; see [`MoveOutcome`](crate::MoveOutcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum TimelineError {
    /// Step is not an index into history.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    OutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },

    /// Cell index is outside 0-8.
    #[display("Cell {} is not on the board (must be 0-8)", _0)]
    InvalidCell(#[error(not(source))] usize),

    /// A replayed move was rejected.
    #[display("Move {} rejected: {}", index, reason)]
    Rejected {
        /// Zero-based index of the move in the replayed sequence.
        index: usize,
        /// Why the move was rejected.
        #[error(not(source))]
        reason: MoveRejection,
    },

    /// A snapshot does not follow from its predecessor by a single move.
    #[display("Snapshot {} does not follow from the previous one", step)]
    Inconsistent {
        /// Index of the offending snapshot.
        step: usize,
    },
}
