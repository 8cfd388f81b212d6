//! End-to-end scenarios for the time-travel timeline.

use strictly_tictactoe::{
    GameStatus, MoveDescription, MoveOutcome, MoveRejection, Player, Position, Timeline,
    TimelineError,
};

fn play_indices(timeline: &mut Timeline, indices: &[usize]) {
    for index in indices {
        let outcome = timeline.place_index(*index).expect("index on board");
        assert!(outcome.is_accepted(), "move at {index} should be accepted");
    }
}

#[test]
fn test_x_wins_top_row_then_board_is_locked() {
    let mut timeline = Timeline::new();
    play_indices(&mut timeline, &[0, 4, 1, 5, 2]);

    let status = timeline.status();
    assert_eq!(status.winner(), Some(Player::X));
    assert_eq!(status.winning_line().map(|l| l.indices()), Some([0, 1, 2]));
    assert_eq!(status.to_string(), "Winner: X");

    let before = timeline.clone();
    let outcome = timeline.place_index(3).expect("index on board");
    assert_eq!(outcome, MoveOutcome::Rejected(MoveRejection::GameOver));
    assert_eq!(timeline.history_len(), 6);
    assert_eq!(timeline, before);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut timeline = Timeline::new();
    let order = [0, 1, 2, 4, 3, 5, 7, 6, 8];

    for (played, index) in order.iter().enumerate() {
        assert!(
            timeline.status().winning_line().is_none(),
            "no line after {played} moves"
        );
        play_indices(&mut timeline, &[*index]);
    }

    assert_eq!(timeline.step(), 9);
    assert_eq!(timeline.status(), GameStatus::Draw);
    assert_eq!(timeline.status().to_string(), "Draw");
    assert!(timeline.is_finished());

    // Every square is taken, so any further move is rejected as occupied.
    let outcome = timeline.place(Position::Center);
    assert_eq!(outcome.rejection(), Some(MoveRejection::SquareOccupied(Position::Center)));
}

#[test]
fn test_branching_discards_alternate_future() {
    let mut timeline = Timeline::new();
    play_indices(&mut timeline, &[0, 4, 1, 5, 8]);
    assert_eq!(timeline.history_len(), 6);

    timeline.jump_to(2).expect("step in range");
    assert_eq!(timeline.history_len(), 6);

    play_indices(&mut timeline, &[6]);
    assert_eq!(timeline.history_len(), 4);
    assert_eq!(timeline.step(), 3);
    assert_eq!(
        timeline.describe_move(3).expect("step in range"),
        MoveDescription::Move {
            step: 3,
            position: Position::BottomLeft
        }
    );
}

#[test]
fn test_next_player_follows_step_parity() {
    let mut timeline = Timeline::new();
    play_indices(&mut timeline, &[0, 4, 1, 5, 8]);

    for step in 0..timeline.history_len() {
        timeline.jump_to(step).expect("step in range");
        let expected = if step % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(timeline.to_move(), expected);
        assert_eq!(timeline.status(), GameStatus::InProgress { next: expected });
    }
}

#[test]
fn test_jump_out_of_range_is_an_error() {
    let mut timeline = Timeline::new();
    let err = timeline.jump_to(1).unwrap_err();
    assert_eq!(err, TimelineError::OutOfRange { step: 1, len: 1 });
    assert_eq!(err.to_string(), "Step 1 is out of range (history has 1 entries)");
}

#[test]
fn test_move_list_descriptions() {
    let mut timeline = Timeline::new();
    play_indices(&mut timeline, &[4, 0, 7]);

    let described: Vec<String> = (0..timeline.history_len())
        .map(|step| timeline.describe_move(step).expect("step in range").to_string())
        .collect();
    assert_eq!(described, vec!["game start", "(2, 2)", "(1, 1)", "(2, 3)"]);
}

#[test]
fn test_serialized_timeline_round_trips_through_validation() {
    let mut timeline = Timeline::new();
    play_indices(&mut timeline, &[4, 0, 7]);
    timeline.jump_to(1).expect("step in range");

    let json = serde_json::to_string(&timeline).expect("serializes");
    let restored: Timeline = serde_json::from_str(&json).expect("valid timeline");
    assert_eq!(restored, timeline);
}

#[test]
fn test_deserialize_rejects_tampered_history() {
    let mut timeline = Timeline::new();
    play_indices(&mut timeline, &[4, 0]);

    let mut value = serde_json::to_value(&timeline).expect("serializes");
    // Flip O's mark in the last snapshot to X.
    value["history"][2]["squares"][0] = serde_json::json!({ "Occupied": "X" });
    assert!(serde_json::from_value::<Timeline>(value).is_err());

    let mut value = serde_json::to_value(&timeline).expect("serializes");
    value["step"] = serde_json::json!(7);
    assert!(serde_json::from_value::<Timeline>(value).is_err());
}
