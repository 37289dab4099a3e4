//! Protocol types and messages.

mod messages;
mod types;

pub use messages::{CommitAnnouncement, RoundReveal};
pub use types::{Outcome, RoundId};
