//! Protocol messages.

use crate::crypto::{Commitment, HmacKey};
use crate::protocol::{Outcome, RoundId};
use serde::{Deserialize, Serialize};

/// Phase 1: shown before the user is prompted
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CommitAnnouncement {
    pub round_id: RoundId,
    pub commitment: Commitment,
}

/// Phase 2: shown once the user's move is locked in
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundReveal {
    pub round_id: RoundId,
    pub key: HmacKey,
    pub user_move: String,
    pub computer_move: String,
    pub outcome: Outcome,
    /// Digest printed before the user moved
    pub announced: Commitment,
    /// Digest recomputed over the revealed key and computer move
    pub commitment: Commitment,
}

impl RoundReveal {
    /// Check that the revealed key and computer move produce the announced digest
    pub fn verify(&self) -> bool {
        self.announced.verify(&self.key, &self.computer_move) && self.commitment == self.announced
    }

    /// Check the reveal against the announcement made for its round
    pub fn matches(&self, announcement: &CommitAnnouncement) -> bool {
        self.round_id == announcement.round_id
            && self.announced == announcement.commitment
            && self.verify()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (CommitAnnouncement, RoundReveal) {
        let key = HmacKey::generate().unwrap();
        let commitment = Commitment::new(&key, "Paper");
        let round_id = RoundId::new();
        let announcement = CommitAnnouncement {
            round_id,
            commitment,
        };
        let reveal = RoundReveal {
            round_id,
            key,
            user_move: "Rock".to_string(),
            computer_move: "Paper".to_string(),
            outcome: Outcome::UserWins,
            announced: commitment,
            commitment,
        };
        (announcement, reveal)
    }

    #[test]
    fn test_reveal_verifies() {
        let (announcement, reveal) = sample();

        assert!(reveal.verify());
        assert!(reveal.matches(&announcement));
    }

    #[test]
    fn test_altered_move_fails() {
        let (announcement, mut reveal) = sample();
        reveal.computer_move = "Scissors".to_string();

        assert!(!reveal.verify());
        assert!(!reveal.matches(&announcement));
    }

    #[test]
    fn test_switched_move_with_matching_digest_fails() {
        // Swapping the move and recomputing the digest cannot hide the announced one
        let (announcement, mut reveal) = sample();
        reveal.computer_move = "Scissors".to_string();
        reveal.commitment = Commitment::new(&reveal.key, "Scissors");

        assert!(reveal.commitment.verify(&reveal.key, &reveal.computer_move));
        assert!(!reveal.verify());
        assert!(!reveal.matches(&announcement));
    }

    #[test]
    fn test_wrong_round_fails() {
        let (mut announcement, reveal) = sample();
        announcement.round_id = RoundId::new();

        assert!(reveal.verify());
        assert!(!reveal.matches(&announcement));
    }

    #[test]
    fn test_reveal_json_roundtrip() {
        let (_, reveal) = sample();

        let json = serde_json::to_string(&reveal).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["key"], reveal.key.to_hex());
        assert_eq!(value["outcome"], "UserWins");
        assert_eq!(value["announced"], reveal.announced.to_string());

        let back: RoundReveal = serde_json::from_str(&json).unwrap();
        assert_eq!(back.key, reveal.key);
        assert!(back.verify());
    }
}
