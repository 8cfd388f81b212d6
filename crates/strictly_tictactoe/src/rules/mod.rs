//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a single board
//! snapshot. Rules never look at history, so any snapshot a timeline
//! stores can be judged on its own.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinningLine, check_winner};
