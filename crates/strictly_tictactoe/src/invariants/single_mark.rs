//! Single mark invariant: each snapshot adds exactly one mark.

use super::super::{Player, Square, Timeline};
use super::Invariant;

/// Invariant: every snapshot follows its predecessor by one move.
///
/// Exactly one square changes, from empty to the mark of the player whose
/// turn it was. X places on even steps, O on odd steps.
pub struct SingleMarkInvariant;

impl Invariant<Timeline> for SingleMarkInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline
            .history()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| {
                let [previous, next] = pair else {
                    return false;
                };
                next.changed_square(previous).is_some_and(|pos| {
                    previous.is_empty(pos)
                        && next.get(pos) == Square::Occupied(Player::on_step(step))
                })
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark for the player on turn"
    }
}
