use std::fmt;

use rand::rngs::OsRng;
use rand::RngCore;

/// Key length in bytes; matches the SHA-512 block-input convention used for
/// the keyed digest.
pub const SECRET_KEY_LEN: usize = 64;

/// Process-owned secret key material for token digests.
///
/// Generated once at process start from the operating system entropy source,
/// then shared read-only for the life of the process. The type has no serde
/// support and a redacted `Debug` impl so the bytes cannot leak through logs
/// or serialization by accident.
pub struct SecretKey([u8; SECRET_KEY_LEN]);

impl SecretKey {
    /// Generate fresh key material from OS entropy.
    pub fn generate() -> Self {
        let mut bytes = [0u8; SECRET_KEY_LEN];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Construct from fixed bytes.
    ///
    /// Intended for tests and for deployments that provision key material
    /// externally.
    pub fn from_bytes(bytes: [u8; SECRET_KEY_LEN]) -> Self {
        Self(bytes)
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_produces_distinct_keys() {
        let a = SecretKey::generate();
        let b = SecretKey::generate();
        assert_ne!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_debug_is_redacted() {
        let key = SecretKey::from_bytes([0x42; SECRET_KEY_LEN]);
        assert_eq!(format!("{:?}", key), "SecretKey(..)");
    }
}
