//! Command-line interface for strictly_timetravel.

use clap::{Parser, Subcommand};
use strictly_tictactoe::Position;

/// Strictly Timetravel - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_timetravel")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play,

    /// Replay a sequence of moves and print the result
    Replay {
        /// Cells to play in order, 1-9 or labels, comma separated
        #[arg(long, value_delimiter = ',', value_parser = parse_position)]
        moves: Vec<Position>,

        /// Step to view after replaying (defaults to the last move)
        #[arg(long)]
        step: Option<usize>,

        /// Print the timeline as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Continue with an interactive session after replaying
        #[arg(long, conflicts_with = "json")]
        interactive: bool,
    },
}

fn parse_position(s: &str) -> Result<Position, String> {
    Position::from_label_or_number(s).ok_or_else(|| format!("'{s}' is not a cell (use 1-9)"))
}
