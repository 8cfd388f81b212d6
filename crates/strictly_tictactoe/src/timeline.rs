//! Tic-tac-toe game with full history and time travel.
//!
//! A [`Timeline`] stores every board snapshot since the empty board and a
//! pointer to the snapshot being viewed. Jumping moves the pointer only.
//! Placing a mark from a past snapshot discards every snapshot after it
//! before appending the new one, so history never branches.

use super::action::{Move, MoveOutcome};
use super::contracts::{Contract, MoveContract};
use super::error::TimelineError;
use super::rules::{check_winner, is_full};
use super::status::GameStatus;
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Board history with a movable step pointer.
///
/// The player to move is derived from the step pointer, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TimelineRepr")]
pub struct Timeline {
    pub(crate) history: Vec<Board>,
    pub(crate) step: usize,
}

impl Timeline {
    /// Creates a timeline holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            step: 0,
        }
    }

    /// Builds a timeline by playing `positions` in order from the empty board.
    ///
    /// # Errors
    ///
    /// Returns [`TimelineError::Rejected`] for the first position that cannot
    /// be played.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<Self, TimelineError> {
        let mut timeline = Self::new();
        for (index, pos) in positions.iter().enumerate() {
            if let MoveOutcome::Rejected(reason) = timeline.place(*pos) {
                return Err(TimelineError::Rejected { index, reason });
            }
        }
        Ok(timeline)
    }

    /// Places the current player's mark on the active snapshot.
    ///
    /// A move onto a won snapshot or an occupied square is ignored and
    /// reported as [`MoveOutcome::Rejected`]. An accepted move truncates
    /// history after the active step, appends the new snapshot and makes it
    /// active.
    #[instrument(skip(self), fields(step = self.step, player = %self.to_move()))]
    pub fn place(&mut self, pos: Position) -> MoveOutcome {
        if let Err(reason) = MoveContract::pre(self, &pos) {
            debug!(%reason, "Move rejected");
            return MoveOutcome::Rejected(reason);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.to_move();
        let mut board = self.current_board().clone();
        board.set(pos, Square::Occupied(player));

        let discarded = self.history.len() - self.step - 1;
        if discarded > 0 {
            debug!(discarded, "Discarding snapshots after active step");
        }
        self.history.truncate(self.step + 1);
        self.history.push(board);
        self.step = self.history.len() - 1;

        #[cfg(debug_assertions)]
        super::contracts::assert_postconditions(&before, self);

        MoveOutcome::Accepted(Move::new(player, pos))
    }

    /// Places a mark by board index (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`TimelineError::InvalidCell`] if `index` is not on the board.
    #[instrument(skip(self))]
    pub fn place_index(&mut self, index: usize) -> Result<MoveOutcome, TimelineError> {
        let pos = Position::from_index(index).ok_or(TimelineError::InvalidCell(index))?;
        Ok(self.place(pos))
    }

    /// Makes `step` the active snapshot. History is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TimelineError::OutOfRange`] if `step` is not a stored step.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), TimelineError> {
        self.check_step(step)?;
        self.step = step;
        Ok(())
    }

    /// Status of the active snapshot.
    #[instrument(skip(self))]
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        if let Some(line) = check_winner(board) {
            GameStatus::Won(line)
        } else if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: self.to_move(),
            }
        }
    }

    /// Describes the move that produced snapshot `step`.
    ///
    /// # Errors
    ///
    /// Returns [`TimelineError::OutOfRange`] if `step` is not a stored step.
    #[instrument(skip(self))]
    pub fn describe_move(&self, step: usize) -> Result<MoveDescription, TimelineError> {
        self.check_step(step)?;
        if step == 0 {
            return Ok(MoveDescription::Start);
        }

        let position = self.history[step]
            .changed_square(&self.history[step - 1])
            .ok_or(TimelineError::Inconsistent { step })?;
        Ok(MoveDescription::Move { step, position })
    }

    /// The active snapshot.
    pub fn current_board(&self) -> &Board {
        &self.history[self.step]
    }

    /// The snapshot at `step`, if stored.
    pub fn board_at(&self, step: usize) -> Option<&Board> {
        self.history.get(step)
    }

    /// All stored snapshots, starting with the empty board.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Number of stored snapshots.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Index of the active snapshot.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Player whose mark the next move places.
    pub fn to_move(&self) -> Player {
        Player::on_step(self.step)
    }

    /// Returns true if the active snapshot is won or drawn.
    pub fn is_finished(&self) -> bool {
        self.status().is_finished()
    }

    /// Moves that produced the stored snapshots, in order.
    ///
    /// Includes moves after the active step.
    #[instrument(skip(self))]
    pub fn moves(&self) -> Vec<Move> {
        self.history
            .windows(2)
            .enumerate()
            .filter_map(|(step, pair)| {
                pair[1]
                    .changed_square(&pair[0])
                    .map(|pos| Move::new(Player::on_step(step), pos))
            })
            .collect()
    }

    fn check_step(&self, step: usize) -> Result<(), TimelineError> {
        if step < self.history.len() {
            Ok(())
        } else {
            Err(TimelineError::OutOfRange {
                step,
                len: self.history.len(),
            })
        }
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialized form of a [`Timeline`], validated on the way in.
#[derive(Debug, Deserialize)]
struct TimelineRepr {
    history: Vec<Board>,
    step: usize,
}

impl TryFrom<TimelineRepr> for Timeline {
    type Error = TimelineError;

    #[instrument(skip_all, fields(len = repr.history.len(), step = repr.step))]
    fn try_from(repr: TimelineRepr) -> Result<Self, Self::Error> {
        if repr.history.first() != Some(&Board::new()) {
            return Err(TimelineError::Inconsistent { step: 0 });
        }

        let mut timeline = Self::new();
        for (index, pair) in repr.history.windows(2).enumerate() {
            let step = index + 1;
            let pos = pair[1]
                .changed_square(&pair[0])
                .ok_or(TimelineError::Inconsistent { step })?;
            if let MoveOutcome::Rejected(reason) = timeline.place(pos) {
                return Err(TimelineError::Rejected { index, reason });
            }
            if timeline.current_board() != &pair[1] {
                return Err(TimelineError::Inconsistent { step });
            }
        }

        timeline.jump_to(repr.step)?;
        Ok(timeline)
    }
}

/// Description of one history entry, for move lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveDescription {
    /// The empty board at step 0.
    Start,
    /// The mark placed to reach `step`.
    Move {
        /// History index of the resulting snapshot.
        step: usize,
        /// Square that was marked.
        position: Position,
    },
}

impl MoveDescription {
    /// 1-based `(column, row)` of the marked square, `None` for the start.
    pub fn coordinates(&self) -> Option<(usize, usize)> {
        match self {
            MoveDescription::Start => None,
            MoveDescription::Move { position, .. } => Some((position.column(), position.row())),
        }
    }
}

impl std::fmt::Display for MoveDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveDescription::Start => write!(f, "game start"),
            MoveDescription::Move { position, .. } => {
                write!(f, "({}, {})", position.column(), position.row())
            }
        }
    }
}
