//! Command-line arguments.

use clap::Parser;

/// Provably fair rock-paper-scissors with any odd number of moves
#[derive(Parser, Debug)]
#[command(name = "fair-game")]
#[command(about = "Play N-move rock-paper-scissors against a computer that commits first", long_about = None)]
#[command(version)]
pub struct PlayArgs {
    /// Move names, in beats-order (an odd number, at least 3, no repeats).
    ///
    /// Options go before the first move; every token after it is a move name.
    #[arg(allow_hyphen_values = true)]
    pub moves: Vec<String>,

    /// Also print each reveal as a JSON line
    #[arg(long)]
    pub json: bool,

    /// Stop after this many rounds
    #[arg(long)]
    pub rounds: Option<usize>,
}

/// Check a revealed round offline
#[derive(Parser, Debug)]
#[command(name = "fair-verify")]
#[command(about = "Recompute HMAC(key, move) and compare it with the announced digest", long_about = None)]
#[command(version)]
pub struct VerifyArgs {
    /// Revealed key (64 hex digits)
    #[arg(long, required_unless_present = "reveal")]
    pub key: Option<String>,

    /// Revealed computer move
    #[arg(long = "move", required_unless_present = "reveal")]
    pub move_name: Option<String>,

    /// Digest announced before the user moved
    #[arg(long, required_unless_present = "reveal")]
    pub digest: Option<String>,

    /// A JSON reveal line printed by `fair-game --json`
    #[arg(long, conflicts_with_all = ["key", "move_name", "digest"])]
    pub reveal: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_args() {
        let args = PlayArgs::try_parse_from(["fair-game", "--json", "Rock", "Paper", "Scissors"])
            .unwrap();

        assert_eq!(args.moves, vec!["Rock", "Paper", "Scissors"]);
        assert!(args.json);
        assert_eq!(args.rounds, None);
    }

    #[test]
    fn test_play_args_allow_empty_move_list() {
        // The move list is validated by the game, not by clap
        let args = PlayArgs::try_parse_from(["fair-game"]).unwrap();

        assert!(args.moves.is_empty());
    }

    #[test]
    fn test_play_args_round_limit() {
        let args = PlayArgs::try_parse_from(["fair-game", "--rounds", "2", "a", "b", "c"]).unwrap();

        assert_eq!(args.rounds, Some(2));
        assert_eq!(args.moves.len(), 3);
    }

    #[test]
    fn test_play_args_accept_hyphenated_moves() {
        let args = PlayArgs::try_parse_from(["fair-game", "-Rock", "Paper", "-Scissors"]).unwrap();

        assert_eq!(args.moves, vec!["-Rock", "Paper", "-Scissors"]);
        assert!(!args.json);
    }

    #[test]
    fn test_play_args_flags_before_hyphenated_moves() {
        let args = PlayArgs::try_parse_from(["fair-game", "--json", "-a", "b", "c"]).unwrap();

        assert!(args.json);
        assert_eq!(args.moves, vec!["-a", "b", "c"]);
    }

    #[test]
    fn test_verify_args_fields() {
        let args = VerifyArgs::try_parse_from([
            "fair-verify",
            "--key",
            "00",
            "--move",
            "Rock",
            "--digest",
            "11",
        ])
        .unwrap();

        assert_eq!(args.move_name.as_deref(), Some("Rock"));
        assert!(args.reveal.is_none());
    }

    #[test]
    fn test_verify_args_reveal_excludes_fields() {
        assert!(VerifyArgs::try_parse_from(["fair-verify", "--reveal", "{}"]).is_ok());
        assert!(
            VerifyArgs::try_parse_from(["fair-verify", "--reveal", "{}", "--key", "00"]).is_err()
        );
        assert!(VerifyArgs::try_parse_from(["fair-verify", "--key", "00"]).is_err());
    }
}
