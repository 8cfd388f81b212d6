//! Empty origin invariant: history starts from the empty board.

use super::super::{Board, Timeline};
use super::Invariant;

/// Invariant: the first snapshot is the all-empty board.
pub struct EmptyOriginInvariant;

impl Invariant<Timeline> for EmptyOriginInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline.history().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}
