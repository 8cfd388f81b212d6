//! Strictly Timetravel - terminal front end for time-travel tic-tac-toe.
//!
//! The game logic lives in [`strictly_tictactoe`]; this crate owns one
//! [`Timeline`](strictly_tictactoe::Timeline) per session, forwards typed
//! commands to it and renders the result as plain text.
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::{Command, Reply, Session};
//! use strictly_tictactoe::Position;
//!
//! let mut session = Session::new();
//! assert!(matches!(session.execute(Command::Place(Position::Center)), Reply::Show(_)));
//! assert_eq!(session.timeline().history_len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod render;
mod session;

// Crate-level exports - Rendering
pub use render::{render_board, render_move_entry, render_move_list, render_status, render_timeline};

// Crate-level exports - Session
pub use session::{Command, CommandError, HELP, Reply, Session};
