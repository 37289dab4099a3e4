//! Cryptographic primitives for the fair game.
//!
//! This module provides:
//! - HmacKey, the per-round secret revealed after the user moves
//! - Commitment, the HMAC-SHA256 digest binding the computer's move to the key

mod commitment;
mod key;

pub use commitment::{Commitment, DIGEST_LEN};
pub use key::{HmacKey, KEY_LEN};

/// Hex (de)serialization for fixed 32-byte values.
pub(crate) mod hex_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8; 32], s: S) -> Result<S::Ok, S::Error> {
        hex::encode(bytes).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[u8; 32], D::Error> {
        let hex_str = String::deserialize(d)?;
        let bytes = hex::decode(&hex_str).map_err(serde::de::Error::custom)?;
        <[u8; 32]>::try_from(bytes.as_slice())
            .map_err(|_| serde::de::Error::custom("expected 32 bytes"))
    }
}
