//! Error types for the fair game.
//!
//! Configuration errors are fatal and stop the process before any round is
//! played. Input errors are recoverable and only cause a re-prompt. Crypto
//! errors abort the round instead of falling back to a weaker source.

use thiserror::Error;

/// Invalid move list supplied at startup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("at least 3 moves are required, got {0}")]
    TooFewMoves(usize),

    #[error("the number of moves must be odd, got {0}")]
    EvenMoveCount(usize),

    #[error("move names must not repeat: {0:?} appears more than once")]
    DuplicateMove(String),

    #[error("move names must not be empty")]
    EmptyMoveName,
}

/// Rejected interactive input
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid move. Please enter a valid number.")]
    NotANumber(String),

    #[error("Invalid move. Please try again.")]
    OutOfRange { got: i64, max: usize },
}

/// Failures of the key material or the random source behind it
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("random source failure: {0}")]
    RandomSource(#[from] rand::Error),

    #[error("key is not valid hex: {0}")]
    InvalidKeyHex(hex::FromHexError),

    #[error("key must be {} bytes, got {0}", crate::crypto::KEY_LEN)]
    InvalidKeyLength(usize),

    #[error("digest is not valid hex: {0}")]
    InvalidDigestHex(hex::FromHexError),

    #[error("digest must be {} bytes, got {0}", crate::crypto::DIGEST_LEN)]
    InvalidDigestLength(usize),
}

/// Top-level error for a game session
#[derive(Debug, Error)]
pub enum GameError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("input error: {0}")]
    Input(#[from] InputError),

    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_messages_match_prompt_wording() {
        assert_eq!(
            InputError::NotANumber("abc".to_string()).to_string(),
            "Invalid move. Please enter a valid number."
        );
        assert_eq!(
            InputError::OutOfRange { got: 9, max: 3 }.to_string(),
            "Invalid move. Please try again."
        );
    }

    #[test]
    fn test_config_error_wraps_into_game_error() {
        let err: GameError = ConfigError::EvenMoveCount(4).into();
        assert!(matches!(err, GameError::Config(ConfigError::EvenMoveCount(4))));
        assert_eq!(
            err.to_string(),
            "configuration error: the number of moves must be odd, got 4"
        );
    }

    #[test]
    fn test_key_length_message() {
        assert_eq!(
            CryptoError::InvalidKeyLength(3).to_string(),
            "key must be 32 bytes, got 3"
        );
    }
}
