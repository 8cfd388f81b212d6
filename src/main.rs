//! Strictly Timetravel - Unified CLI
//!
//! Plays tic-tac-toe in the terminal with a navigable move history.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strictly_tictactoe::{Position, Timeline};
use strictly_timetravel::{Session, render_timeline};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // stdout carries the board; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_session(Session::new()),
        Command::Replay {
            moves,
            step,
            json,
            interactive,
        } => run_replay(&moves, step, json, interactive),
    }
}

/// Runs an interactive session on stdin/stdout.
#[instrument(skip(session))]
fn run_session(mut session: Session) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session.run(stdin.lock(), stdout.lock())
}

/// Replays moves, then prints or continues playing.
#[instrument]
fn run_replay(moves: &[Position], step: Option<usize>, json: bool, interactive: bool) -> Result<()> {
    let mut timeline = Timeline::replay(moves)?;
    if let Some(step) = step {
        timeline.jump_to(step)?;
    }
    info!(
        moves = moves.len(),
        step = timeline.step(),
        "Replayed moves"
    );

    if interactive {
        return run_session(Session::with_timeline(timeline));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&timeline)?);
    } else {
        println!("{}", render_timeline(&timeline)?);
    }
    Ok(())
}
