//! Contract-based validation for timeline moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::MoveRejection;
use super::invariants::{InvariantSet, InvariantViolation, TimelineInvariants};
use super::rules::check_winner;
use super::{Position, Timeline};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveRejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), InvariantViolation>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The active snapshot has no winning line.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects moves on a won snapshot.
    #[instrument(skip(timeline))]
    pub fn check(timeline: &Timeline) -> Result<(), MoveRejection> {
        match check_winner(timeline.current_board()) {
            Some(_) => Err(MoveRejection::GameOver),
            None => Ok(()),
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto an occupied square.
    #[instrument(skip(timeline))]
    pub fn check(pos: Position, timeline: &Timeline) -> Result<(), MoveRejection> {
        if timeline.current_board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveRejection::SquareOccupied(pos))
        }
    }
}

/// Composite precondition, checked in order: game not over, then square empty.
///
/// A full board without a winner fails on the square check, since every
/// square is taken.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(timeline))]
    pub fn check(pos: Position, timeline: &Timeline) -> Result<(), MoveRejection> {
        GameNotOver::check(timeline)?;
        SquareIsEmpty::check(pos, timeline)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark on a timeline.
///
/// Preconditions:
/// - Active snapshot is not won
/// - Square is empty
///
/// Postconditions:
/// - Snapshots up to the old step are untouched
/// - Exactly one snapshot was appended after them, and it is active
/// - All [`TimelineInvariants`] hold
pub struct MoveContract;

impl Contract<Timeline, Position> for MoveContract {
    fn pre(timeline: &Timeline, pos: &Position) -> Result<(), MoveRejection> {
        LegalMove::check(*pos, timeline)
    }

    fn post(before: &Timeline, after: &Timeline) -> Result<(), InvariantViolation> {
        let kept = &before.history()[..=before.step()];
        if !after.history().starts_with(kept) {
            return Err(InvariantViolation::new(
                "Snapshots up to the active step are unchanged",
            ));
        }

        if after.history_len() != kept.len() + 1 || after.step() != kept.len() {
            return Err(InvariantViolation::new(
                "One snapshot is appended and becomes active",
            ));
        }

        TimelineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            InvariantViolation::new(descriptions)
        })
    }
}

/// Asserts the move postconditions (panics on violation in debug builds).
#[instrument(skip_all)]
pub fn assert_postconditions(before: &Timeline, after: &Timeline) {
    if let Err(violation) = MoveContract::post(before, after) {
        warn!(%violation, "Move postcondition failed");
        debug_assert!(false, "{violation}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};

    #[test]
    fn test_precondition_empty_square() {
        let timeline = Timeline::new();
        assert!(MoveContract::pre(&timeline, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let timeline = Timeline::replay(&[Position::Center]).expect("legal move");
        assert_eq!(
            MoveContract::pre(&timeline, &Position::Center),
            Err(MoveRejection::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_game_over_checked_before_occupancy() {
        let timeline = Timeline::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::MiddleRight,
            Position::TopRight,
        ])
        .expect("legal moves");

        // Occupied and game over: game over wins.
        assert_eq!(
            MoveContract::pre(&timeline, &Position::TopLeft),
            Err(MoveRejection::GameOver)
        );
        assert_eq!(
            MoveContract::pre(&timeline, &Position::BottomLeft),
            Err(MoveRejection::GameOver)
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Timeline::replay(&[Position::Center]).expect("legal move");
        let mut after = before.clone();
        assert!(after.place(Position::TopLeft).is_accepted());
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_holds_after_branch() {
        let mut before =
            Timeline::replay(&[Position::Center, Position::TopLeft, Position::BottomLeft])
                .expect("legal moves");
        before.jump_to(1).expect("step in range");

        let mut after = before.clone();
        assert!(after.place(Position::TopRight).is_accepted());
        assert_eq!(after.history_len(), 3);
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_rewritten_past() {
        let before = Timeline::replay(&[Position::Center]).expect("legal move");
        let mut after = before.clone();
        assert!(after.place(Position::TopLeft).is_accepted());
        after.history[1].set(Position::BottomRight, Square::Occupied(Player::O));

        assert!(MoveContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_stale_step() {
        let before = Timeline::new();
        let mut after = before.clone();
        assert!(after.place(Position::Center).is_accepted());
        after.step = 0;

        assert!(MoveContract::post(&before, &after).is_err());
    }
}
