//! Pure tic-tac-toe game logic with move history and time travel.
//!
//! The [`Timeline`] owns every board snapshot since the empty board and a
//! step pointer into them. Callers place marks, jump between steps, and read
//! the derived [`GameStatus`] and move descriptions for rendering.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameStatus, Player, Position, Timeline};
//!
//! let mut game = Timeline::new();
//! for pos in [
//!     Position::TopLeft,
//!     Position::Center,
//!     Position::TopCenter,
//!     Position::MiddleRight,
//!     Position::TopRight,
//! ] {
//!     assert!(game.place(pos).is_accepted());
//! }
//! assert_eq!(game.status().winner(), Some(Player::X));
//!
//! // Travel back and play a different line; the old future is discarded.
//! game.jump_to(2).unwrap();
//! assert!(game.place(Position::BottomLeft).is_accepted());
//! assert_eq!(game.history_len(), 4);
//! assert!(matches!(game.status(), GameStatus::InProgress { next: Player::O }));
//! ```

#![warn(missing_docs)]

mod action;
pub mod contracts;
mod error;
pub mod invariants;
mod position;
pub mod rules;
mod status;
mod timeline;
mod types;

pub use action::{Move, MoveOutcome, MoveRejection};
pub use error::TimelineError;
pub use position::Position;
pub use rules::{WinningLine, check_winner};
pub use status::GameStatus;
pub use timeline::{MoveDescription, Timeline};
pub use types::{Board, Player, Square};
