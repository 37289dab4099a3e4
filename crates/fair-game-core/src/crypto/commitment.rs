//! HMAC commitment for the commit-reveal scheme.

use super::HmacKey;
use crate::error::CryptoError;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;

type HmacSha256 = Hmac<Sha256>;

/// Digest size in bytes
pub const DIGEST_LEN: usize = 32;

/// Commitment = HMAC-SHA256(key_hex, move_name)
///
/// The key enters the MAC as its hex text, exactly as displayed, so anyone
/// can recompute the digest with a stock HMAC tool after the reveal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Commitment(#[serde(with = "super::hex_serde")] [u8; DIGEST_LEN]);

impl Commitment {
    /// Bind a move name to the key
    pub fn new(key: &HmacKey, move_name: &str) -> Self {
        let mut mac = Self::mac(key);
        mac.update(move_name.as_bytes());
        Self(mac.finalize().into_bytes().into())
    }

    fn mac(key: &HmacKey) -> HmacSha256 {
        HmacSha256::new_from_slice(key.to_hex().as_bytes())
            .expect("HMAC accepts keys of any length")
    }

    /// Parse the 64-digit hex form shown to the user
    pub fn from_hex(text: &str) -> Result<Self, CryptoError> {
        let bytes = hex::decode(text.trim()).map_err(CryptoError::InvalidDigestHex)?;
        let bytes = <[u8; DIGEST_LEN]>::try_from(bytes.as_slice())
            .map_err(|_| CryptoError::InvalidDigestLength(bytes.len()))?;
        Ok(Self(bytes))
    }

    /// Verify that the given key and move name produce this commitment.
    ///
    /// The comparison runs in constant time.
    pub fn verify(&self, key: &HmacKey, move_name: &str) -> bool {
        let mut mac = Self::mac(key);
        mac.update(move_name.as_bytes());
        mac.verify_slice(&self.0).is_ok()
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
