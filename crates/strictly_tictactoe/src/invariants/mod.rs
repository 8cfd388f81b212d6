//! First-class invariants for a tic-tac-toe timeline.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. They are testable independently and checked in debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for triples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod empty_origin;
pub mod single_mark;
pub mod step_in_bounds;

pub use empty_origin::EmptyOriginInvariant;
pub use single_mark::SingleMarkInvariant;
pub use step_in_bounds::StepInBoundsInvariant;

/// All timeline invariants as a composable set.
pub type TimelineInvariants = (
    EmptyOriginInvariant,
    SingleMarkInvariant,
    StepInBoundsInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Player, Position, Square, Timeline};

    #[test]
    fn test_invariant_set_holds_for_new_timeline() {
        let timeline = Timeline::new();
        assert!(TimelineInvariants::check_all(&timeline).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_jumps() {
        let mut timeline =
            Timeline::replay(&[Position::TopLeft, Position::Center, Position::TopRight])
                .expect("legal moves");
        assert!(TimelineInvariants::check_all(&timeline).is_ok());

        timeline.jump_to(1).expect("step in range");
        assert!(TimelineInvariants::check_all(&timeline).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut timeline = Timeline::new();
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::O));
        timeline.history[0] = board;
        timeline.step = 3;

        let violations = TimelineInvariants::check_all(&timeline).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}
