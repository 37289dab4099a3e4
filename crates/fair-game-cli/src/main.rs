//! Fair Game console front end
//!
//! Validates the move list, then runs rounds on stdin/stdout until the
//! user enters "0" or input ends.

use clap::Parser;
use fair_game_cli::args::PlayArgs;
use fair_game_core::{GameError, MoveList, Session};
use std::io;
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    fair_game_cli::init_tracing();
    let args = PlayArgs::parse();

    let moves = match MoveList::new(args.moves) {
        Ok(moves) => moves,
        Err(err) => {
            error!(%err, "invalid move list");
            eprintln!("Invalid arguments. Please provide an odd number (at least 3) of non-repeating strings.");
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    info!(moves = moves.len(), "starting session");

    let mut session = Session::new(moves)
        .with_round_limit(args.rounds)
        .with_json_reveals(args.json);

    match session.run(io::stdin().lock(), io::stdout().lock()) {
        Ok(rounds) => {
            info!(rounds, "session finished");
            ExitCode::SUCCESS
        }
        Err(GameError::Crypto(err)) => {
            error!(%err, "aborting round");
            eprintln!("Cannot play fairly: {err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            error!(%err, "session failed");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
