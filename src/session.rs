//! Line-oriented play session over a single timeline.

use crate::render::{render_board, render_move_list, render_status, render_timeline};
use derive_more::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;
use strictly_tictactoe::{MoveOutcome, Position, Timeline};
use tracing::{debug, info, instrument};

/// Help text listing the session commands.
pub const HELP: &str = "\
Commands:
  <cell> | move <cell>   place a mark on cell 1-9 (or a label like 'center')
  jump <step>            view the board after <step> moves (0 = game start)
  board                  show the board and status
  history                show the move list
  help                   show this help
  quit                   leave the session";

/// A command typed into the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the current player's mark.
    Place(Position),
    /// Make a stored step active.
    Jump(usize),
    /// Show the board and status.
    Board,
    /// Show the move list.
    History,
    /// Show the help text.
    Help,
    /// End the session.
    Quit,
}

/// Error parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CommandError {
    /// The line was empty.
    #[display("Empty command")]
    Empty,

    /// The first word is not a command.
    #[display("Unknown command '{}'", _0)]
    Unknown(String),

    /// A command is missing its argument.
    #[display("'{}' needs an argument", _0)]
    MissingArgument(&'static str),

    /// The cell is neither 1-9 nor a position label.
    #[display("'{}' is not a cell (use 1-9 or a label like 'center')", _0)]
    InvalidCell(String),

    /// The step is not a number.
    #[display("'{}' is not a step number", _0)]
    InvalidStep(String),
}

impl std::error::Error for CommandError {}

impl FromStr for Command {
    type Err = CommandError;

    #[instrument]
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let argument = |name: &'static str| {
            if rest.is_empty() {
                Err(CommandError::MissingArgument(name))
            } else {
                Ok(rest)
            }
        };

        match word.to_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "move" | "m" => parse_cell(argument("move")?).map(Command::Place),
            "jump" | "j" => {
                let step = argument("jump")?;
                step.parse()
                    .map(Command::Jump)
                    .map_err(|_| CommandError::InvalidStep(step.to_string()))
            }
            "board" | "b" => Ok(Command::Board),
            "history" | "h" => Ok(Command::History),
            "help" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            _ => match parse_cell(line) {
                Ok(pos) => Ok(Command::Place(pos)),
                Err(e) if parse_cell(word).is_ok() => Err(e),
                Err(_) => Err(CommandError::Unknown(word.to_string())),
            },
        }
    }
}

fn parse_cell(s: &str) -> Result<Position, CommandError> {
    Position::from_label_or_number(s).ok_or_else(|| CommandError::InvalidCell(s.to_string()))
}

/// What the session prints after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to show; the session continues.
    Show(String),
    /// The session ends.
    Quit,
}

/// An interactive session owning one timeline.
#[derive(Debug, Clone, Default)]
pub struct Session {
    timeline: Timeline,
}

impl Session {
    /// Creates a session with a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session continuing an existing timeline.
    #[instrument(skip(timeline))]
    pub fn with_timeline(timeline: Timeline) -> Self {
        Self { timeline }
    }

    /// The timeline being played.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Applies one command to the timeline.
    #[instrument(skip(self), fields(step = self.timeline.step()))]
    pub fn execute(&mut self, command: Command) -> Reply {
        match command {
            Command::Place(pos) => match self.timeline.place(pos) {
                MoveOutcome::Accepted(mov) => {
                    debug!(%mov, "Move played");
                    self.show_timeline(None)
                }
                MoveOutcome::Rejected(reason) => Reply::Show(format!("Ignored: {reason}")),
            },
            Command::Jump(step) => match self.timeline.jump_to(step) {
                Ok(()) => self.show_timeline(None),
                Err(e) => {
                    debug!(error = %e, "Jump refused");
                    Reply::Show(format!("Error: {e}"))
                }
            },
            Command::Board => {
                let status = self.timeline.status();
                Reply::Show(format!(
                    "{}\n\n{}",
                    render_board(self.timeline.current_board(), status.winning_line()),
                    render_status(&status)
                ))
            }
            Command::History => match render_move_list(&self.timeline) {
                Ok(list) => Reply::Show(list),
                Err(e) => Reply::Show(format!("Error: {e}")),
            },
            Command::Help => Reply::Show(HELP.to_string()),
            Command::Quit => Reply::Quit,
        }
    }

    fn show_timeline(&self, prefix: Option<&str>) -> Reply {
        let body = match render_timeline(&self.timeline) {
            Ok(text) => text,
            Err(e) => format!("Error: {e}"),
        };
        match prefix {
            Some(prefix) => Reply::Show(format!("{prefix}\n{body}")),
            None => Reply::Show(body),
        }
    }

    /// Reads commands from `input` until `quit` or end of input.
    ///
    /// Unparseable lines are reported and skipped; blank lines are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<()> {
        info!("Session started");
        if let Reply::Show(text) = self.show_timeline(Some("Type 'help' for commands.")) {
            writeln!(output, "{text}")?;
        }

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(command) => match self.execute(command) {
                    Reply::Show(text) => writeln!(output, "\n{text}")?,
                    Reply::Quit => break,
                },
                Err(e) => {
                    debug!(error = %e, "Unparseable command");
                    writeln!(output, "\n{e}. Type 'help' for commands.")?;
                }
            }
            output.flush()?;
        }

        info!(moves = self.timeline.history_len() - 1, "Session ended");
        Ok(())
    }
}
