//! Offline verifier for a revealed round.
//!
//! Exit status: 0 verified, 2 mismatch, 1 malformed input.

use clap::Parser;
use fair_game_cli::args::VerifyArgs;
use fair_game_core::{Commitment, GameError, HmacKey, RoundReveal};
use std::process::ExitCode;
use tracing::{error, info};

fn check(args: VerifyArgs) -> Result<bool, GameError> {
    if let Some(json) = args.reveal {
        let reveal: RoundReveal = serde_json::from_str(&json)?;
        return Ok(reveal.verify());
    }

    // clap guarantees all three are present without --reveal
    let (Some(key), Some(move_name), Some(digest)) = (args.key, args.move_name, args.digest)
    else {
        return Ok(false);
    };
    let key = HmacKey::from_hex(&key)?;
    let digest = Commitment::from_hex(&digest)?;
    Ok(digest.verify(&key, &move_name))
}

fn main() -> ExitCode {
    fair_game_cli::init_tracing();

    match check(VerifyArgs::parse()) {
        Ok(true) => {
            info!("commitment verified");
            println!("Verified: the digest matches the revealed key and move.");
            ExitCode::SUCCESS
        }
        Ok(false) => {
            info!("commitment mismatch");
            println!("MISMATCH: the digest does not match the revealed key and move.");
            ExitCode::from(2)
        }
        Err(err) => {
            error!(%err, "cannot verify");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
