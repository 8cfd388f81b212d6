//! Property-based tests for the timeline.
//!
//! Random click sequences mix legal moves, rejected moves and jumps; the
//! timeline invariants must hold after every step.

use proptest::prelude::*;
use strictly_tictactoe::invariants::{InvariantSet, TimelineInvariants};
use strictly_tictactoe::{Board, Player, Square, Timeline};

#[derive(Debug, Clone)]
enum Action {
    Place(usize),
    Jump(usize),
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => (0usize..9).prop_map(Action::Place),
        1 => (0usize..12).prop_map(Action::Jump),
    ]
}

fn apply(timeline: &mut Timeline, action: &Action) {
    match action {
        Action::Place(index) => {
            let _ = timeline.place_index(*index);
        }
        Action::Jump(step) => {
            let _ = timeline.jump_to(*step);
        }
    }
}

proptest! {
    #[test]
    fn prop_invariants_hold_for_any_sequence(actions in prop::collection::vec(arb_action(), 0..40)) {
        let mut timeline = Timeline::new();
        for action in &actions {
            apply(&mut timeline, action);
            prop_assert!(TimelineInvariants::check_all(&timeline).is_ok());
        }
    }

    #[test]
    fn prop_consecutive_snapshots_differ_by_one_mark(actions in prop::collection::vec(arb_action(), 0..40)) {
        let mut timeline = Timeline::new();
        for action in &actions {
            apply(&mut timeline, action);
        }

        prop_assert_eq!(&timeline.history()[0], &Board::new());
        for (step, pair) in timeline.history().windows(2).enumerate() {
            let Some(pos) = pair[1].changed_square(&pair[0]) else {
                return Err(TestCaseError::fail(format!("snapshot {} changes more than one square", step + 1)));
            };
            prop_assert_eq!(pair[1].get(pos), Square::Occupied(Player::on_step(step)));
            prop_assert_eq!(pair[1].occupied_count(), pair[0].occupied_count() + 1);
        }
    }

    #[test]
    fn prop_jump_changes_only_step(
        actions in prop::collection::vec(arb_action(), 0..30),
        target in 0usize..12,
    ) {
        let mut timeline = Timeline::new();
        for action in &actions {
            apply(&mut timeline, action);
        }

        let history = timeline.history().to_vec();
        let step = timeline.step();
        match timeline.jump_to(target) {
            Ok(()) => {
                prop_assert_eq!(timeline.step(), target);
                let expected = if target % 2 == 0 { Player::X } else { Player::O };
                prop_assert_eq!(timeline.to_move(), expected);
            }
            Err(_) => {
                prop_assert!(target >= history.len());
                prop_assert_eq!(timeline.step(), step);
            }
        }
        prop_assert_eq!(timeline.history(), history.as_slice());
    }

    #[test]
    fn prop_rejected_move_leaves_state_unchanged(
        actions in prop::collection::vec(arb_action(), 0..30),
        index in 0usize..9,
    ) {
        let mut timeline = Timeline::new();
        for action in &actions {
            apply(&mut timeline, action);
        }

        let before = timeline.clone();
        let outcome = timeline.place_index(index);
        if let Ok(outcome) = outcome
            && !outcome.is_accepted()
        {
            prop_assert_eq!(timeline, before);
        }
    }
}
