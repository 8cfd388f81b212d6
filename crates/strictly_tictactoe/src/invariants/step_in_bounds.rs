//! Step pointer invariant: the active step indexes history.

use super::super::Timeline;
use super::Invariant;

/// Invariant: the step pointer is a valid index into history.
pub struct StepInBoundsInvariant;

impl Invariant<Timeline> for StepInBoundsInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline.step() < timeline.history_len()
    }

    fn description() -> &'static str {
        "Step pointer indexes a stored snapshot"
    }
}
