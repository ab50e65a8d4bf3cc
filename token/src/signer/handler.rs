use chrono::Utc;
use sha2::Digest;
use sha2::Sha512;
use subtle::ConstantTimeEq;

use super::errors::IssueError;
use super::errors::VerifyError;
use super::policy::ValidityWindow;
use crate::codec::Token;
use crate::codec::MAX_USERNAME_LEN;
use crate::codec::TOKEN_VERSION;
use crate::entropy::SplittableRng;
use crate::key::SecretKey;

/// Issues and verifies stateless authentication tokens.
///
/// Holds the process-owned secret key and random source; both are injected
/// explicitly so the signer stays deterministic and testable with fixed
/// keys and seeds. Issuance consumes one unit of randomness and persists
/// nothing; verification recomputes the keyed digest from scratch on every
/// call and caches no results.
pub struct TokenSigner {
    key: SecretKey,
    rng: SplittableRng,
    window: ValidityWindow,
}

/// Outcome of successful cryptographic verification.
///
/// Carries the claimed identity and original issue time. Whether that
/// identity still resolves to a live user is decided by the service layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedToken {
    pub username: String,
    pub issued_at_ms: i64,
}

impl TokenSigner {
    /// Create a signer with the default validity window.
    pub fn new(key: SecretKey) -> Self {
        Self::with_window(key, ValidityWindow::default())
    }

    /// Create a signer with an explicit validity window.
    pub fn with_window(key: SecretKey, window: ValidityWindow) -> Self {
        Self {
            key,
            rng: SplittableRng::from_entropy(),
            window,
        }
    }

    /// Issue a token for `username` at the current wall-clock time.
    ///
    /// # Errors
    /// * `EmptyUsername` - Username is empty
    /// * `UsernameTooLong` - Username exceeds 255 UTF-8 bytes
    pub fn issue(&self, username: &str) -> Result<String, IssueError> {
        self.issue_at(username, Utc::now().timestamp_millis())
    }

    /// Issue a token with an explicit issue time.
    pub fn issue_at(&self, username: &str, now_ms: i64) -> Result<String, IssueError> {
        if username.is_empty() {
            return Err(IssueError::EmptyUsername);
        }
        let byte_len = username.len();
        if byte_len > MAX_USERNAME_LEN {
            return Err(IssueError::UsernameTooLong {
                max: MAX_USERNAME_LEN,
                actual: byte_len,
            });
        }

        let seed = self.rng.next_token_seed();
        let digest = compute_digest(&self.key, seed, now_ms, username.as_bytes());

        let token = Token {
            version: TOKEN_VERSION,
            digest: digest.to_vec(),
            seed,
            issued_at_ms: now_ms,
            username: username.to_string(),
        };
        Ok(token.encode())
    }

    /// Verify a token against the current wall-clock time.
    ///
    /// # Errors
    /// * `Malformed` - Input failed defensive decoding
    /// * `DigestMismatch` - Recomputed digest differs from the transmitted one
    /// * `Expired` / `NotYetValid` - Issue time outside the validity window
    pub fn verify(&self, encoded: &str) -> Result<VerifiedToken, VerifyError> {
        self.verify_at(encoded, Utc::now().timestamp_millis())
    }

    /// Verify a token against an explicit current time.
    pub fn verify_at(&self, encoded: &str, now_ms: i64) -> Result<VerifiedToken, VerifyError> {
        let token = Token::decode(encoded)?;

        let expected = compute_digest(
            &self.key,
            token.seed,
            token.issued_at_ms,
            token.username.as_bytes(),
        );
        // Full-length comparison; must not short-circuit on the first
        // differing byte.
        if !bool::from(token.digest.ct_eq(&expected[..])) {
            return Err(VerifyError::DigestMismatch);
        }

        self.window.check(token.issued_at_ms, now_ms)?;

        Ok(VerifiedToken {
            username: token.username,
            issued_at_ms: token.issued_at_ms,
        })
    }
}

/// Keyed digest over the token's signed fields:
/// `SHA-512(key || seed_be || issued_at_ms_be || username)`.
fn compute_digest(key: &SecretKey, seed: i64, issued_at_ms: i64, username: &[u8]) -> [u8; 64] {
    let mut hasher = Sha512::new();
    hasher.update(key.as_bytes());
    hasher.update(seed.to_be_bytes());
    hasher.update(issued_at_ms.to_be_bytes());
    hasher.update(username);
    hasher.finalize().into()
}
