use thiserror::Error;

use crate::codec::CodecError;

/// Error type for token issuance.
///
/// Both variants are caller errors: usernames are validated long before a
/// login reaches the signer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IssueError {
    #[error("Username must not be empty")]
    EmptyUsername,

    #[error("Username too long: maximum {max} bytes, got {actual}")]
    UsernameTooLong { max: usize, actual: usize },
}

/// Error type for token verification.
///
/// Variants exist for internal diagnostics only. The authentication boundary
/// maps every variant to the same "unauthenticated" outcome so remote callers
/// cannot tell a forged signature from an expired token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerifyError {
    #[error("Malformed token: {0}")]
    Malformed(#[from] CodecError),

    #[error("Token digest mismatch")]
    DigestMismatch,

    #[error("Token expired")]
    Expired,

    #[error("Token not yet valid")]
    NotYetValid,
}
