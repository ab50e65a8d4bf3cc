//! Stateless authentication token library
//!
//! Provides the credential format and cryptography for stateless logins:
//! - Binary token codec with defensive parsing of untrusted input
//! - Keyed SHA-512 digest issuance and verification
//! - Time-window validity checks tolerant of clock slew
//!
//! A token carries its entire validity proof in its own bytes plus the
//! process-owned secret key and the current time. The server keeps no
//! per-token state: issuing consumes one unit of randomness, and validating
//! recomputes the digest from scratch on every call.
//!
//! Resolving the named user against a directory is the job of the service
//! layer; this crate only decides whether the bytes themselves are genuine
//! and current.
//!
//! # Examples
//!
//! ## Issuing and verifying
//! ```
//! use token::{SecretKey, TokenSigner};
//!
//! let signer = TokenSigner::new(SecretKey::generate());
//! let encoded = signer.issue("alice").unwrap();
//! let verified = signer.verify(&encoded).unwrap();
//! assert_eq!(verified.username, "alice");
//! ```
//!
//! ## Hostile input never panics
//! ```
//! use token::{SecretKey, TokenSigner};
//!
//! let signer = TokenSigner::new(SecretKey::generate());
//! assert!(signer.verify("not-a-token").is_err());
//! assert!(signer.verify("").is_err());
//! ```

pub mod codec;
pub mod entropy;
pub mod key;
pub mod signer;

// Re-export commonly used items
pub use codec::CodecError;
pub use codec::Token;
pub use entropy::SplittableRng;
pub use key::SecretKey;
pub use signer::IssueError;
pub use signer::TokenSigner;
pub use signer::ValidityWindow;
pub use signer::VerifiedToken;
pub use signer::VerifyError;
