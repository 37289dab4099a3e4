//! Fair Game Core Library
//!
//! This crate provides the fair-resolution protocol for an N-move
//! rock-paper-scissors game played against the computer: HMAC commitments
//! to the computer's move, circular win/lose/draw resolution, the help
//! table, and the round loop that ties them together.

pub mod crypto;
pub mod error;
pub mod games;
pub mod protocol;
pub mod session;

pub use crypto::{Commitment, HmacKey};
pub use error::{ConfigError, CryptoError, GameError, InputError};
pub use games::{resolve, MoveIndex, MoveList, MoveSelector, Relation, RelationTable};
pub use protocol::{CommitAnnouncement, Outcome, RoundId, RoundReveal};
pub use session::{Command, Round, Session};
