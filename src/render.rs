//! Plain-text rendering of a timeline.
//!
//! Empty squares show their 1-9 cell number, squares on a winning line are
//! bracketed, and the move list marks the active step.

use strictly_tictactoe::{
    Board, GameStatus, MoveDescription, Position, Timeline, TimelineError, WinningLine,
};
use tracing::instrument;

const ROW_SEPARATOR: &str = "---+---+---";

/// Renders the board as a 3x3 grid.
#[instrument(skip_all)]
pub fn render_board(board: &Board, winning: Option<&WinningLine>) -> String {
    let separator = format!("\n{ROW_SEPARATOR}\n");
    Position::ALL
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|pos| render_square(board, *pos, winning))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join(separator.as_str())
}

fn render_square(board: &Board, pos: Position, winning: Option<&WinningLine>) -> String {
    let symbol = match board.get(pos).player() {
        Some(player) => player.to_string(),
        None => (pos.to_index() + 1).to_string(),
    };
    if winning.is_some_and(|line| line.contains(pos)) {
        format!("[{symbol}]")
    } else {
        format!(" {symbol} ")
    }
}

/// Renders the status line.
pub fn render_status(status: &GameStatus) -> String {
    status.to_string()
}

/// Renders one move list entry.
pub fn render_move_entry(description: &MoveDescription) -> String {
    match description {
        MoveDescription::Start => "Go to game start".to_string(),
        MoveDescription::Move { step, .. } => format!("Go to move #{step} at {description}"),
    }
}

/// Renders the move list, one line per stored step, marking the active one.
///
/// # Errors
///
/// Propagates [`TimelineError`] if a stored step cannot be described.
#[instrument(skip_all, fields(len = timeline.history_len(), step = timeline.step()))]
pub fn render_move_list(timeline: &Timeline) -> Result<String, TimelineError> {
    let lines = (0..timeline.history_len())
        .map(|step| -> Result<String, TimelineError> {
            let description = timeline.describe_move(step)?;
            let marker = if step == timeline.step() { '>' } else { ' ' };
            Ok(format!("{marker} {}", render_move_entry(&description)))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines.join("\n"))
}

/// Renders board, status line and move list.
///
/// # Errors
///
/// Propagates [`TimelineError`] from [`render_move_list`].
#[instrument(skip_all)]
pub fn render_timeline(timeline: &Timeline) -> Result<String, TimelineError> {
    let status = timeline.status();
    Ok(format!(
        "{}\n\n{}\n\n{}",
        render_board(timeline.current_board(), status.winning_line()),
        render_status(&status),
        render_move_list(timeline)?
    ))
}
