//! Per-round secret key for the HMAC commitment.

use crate::error::CryptoError;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key size in bytes (256 bits)
pub const KEY_LEN: usize = 32;

/// Secret key for one round, revealed only after the user's move is locked in
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HmacKey(#[serde(with = "super::hex_serde")] [u8; KEY_LEN]);

impl HmacKey {
    /// Generate a fresh key from the operating system's random source
    pub fn generate() -> Result<Self, CryptoError> {
        Self::generate_with(&mut OsRng)
    }

    /// Generate a key from the given cryptographic source.
    ///
    /// A failing source is reported as [`CryptoError::RandomSource`]; there is
    /// no fallback to a weaker generator.
    pub fn generate_with<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, CryptoError> {
        let mut bytes = [0u8; KEY_LEN];
        rng.try_fill_bytes(&mut bytes)?;
        Ok(Self(bytes))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse the 64-digit hex form shown to the user
    pub fn from_hex(text: &str) -> Result<Self, CryptoError> {
        let bytes = hex::decode(text.trim()).map_err(CryptoError::InvalidKeyHex)?;
        let bytes = <[u8; KEY_LEN]>::try_from(bytes.as_slice())
            .map_err(|_| CryptoError::InvalidKeyLength(bytes.len()))?;
        Ok(Self(bytes))
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Lowercase hex form; this text is also the HMAC key material
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

// Never print key bytes through Debug: the key must stay hidden until reveal.
impl fmt::Debug for HmacKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HmacKey(<redacted>)")
    }
}

impl fmt::Display for HmacKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    struct FailingRng;

    impl RngCore for FailingRng {
        fn next_u32(&mut self) -> u32 {
            unreachable!("only try_fill_bytes is used")
        }

        fn next_u64(&mut self) -> u64 {
            unreachable!("only try_fill_bytes is used")
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            unreachable!("only try_fill_bytes is used")
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new("entropy source unavailable"))
        }
    }

    impl CryptoRng for FailingRng {}

    #[test]
    fn test_generated_keys_do_not_repeat() {
        let keys: HashSet<[u8; KEY_LEN]> = (0..10_000)
            .map(|_| *HmacKey::generate().unwrap().as_bytes())
            .collect();

        assert_eq!(keys.len(), 10_000);
    }

    #[test]
    fn test_key_hex_is_64_lowercase_digits() {
        let key = HmacKey::generate().unwrap();
        let text = key.to_hex();

        assert_eq!(text.len(), 64);
        assert!(text.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(key.to_string(), text);
    }

    #[test]
    fn test_hex_roundtrip() {
        let key = HmacKey::generate_with(&mut StdRng::seed_from_u64(7)).unwrap();
        let parsed = HmacKey::from_hex(&key.to_hex()).unwrap();

        assert_eq!(parsed, key);
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(matches!(
            HmacKey::from_hex("not hex"),
            Err(CryptoError::InvalidKeyHex(_))
        ));
        assert!(matches!(
            HmacKey::from_hex("abcd"),
            Err(CryptoError::InvalidKeyLength(2))
        ));
        assert!(matches!(
            HmacKey::from_hex(""),
            Err(CryptoError::InvalidKeyLength(0))
        ));
    }

    #[test]
    fn test_failing_source_is_an_error() {
        let result = HmacKey::generate_with(&mut FailingRng);

        assert!(matches!(result, Err(CryptoError::RandomSource(_))));
    }

    #[test]
    fn test_debug_hides_key() {
        let key = HmacKey::from_bytes([0xab; KEY_LEN]);

        assert!(!format!("{:?}", key).contains("ab"));
    }
}
