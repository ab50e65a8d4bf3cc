use thiserror::Error;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username must not be empty")]
    Empty,

    #[error("Username too long: maximum {max} bytes, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Infrastructure errors from the user directory.
///
/// Timeouts and cancellations reaching the directory are infrastructure
/// faults; they are never reinterpreted as an invalid token.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    #[error("User directory unavailable: {0}")]
    Unavailable(String),

    #[error("User directory call timed out: {0}")]
    Timeout(String),

    #[error("Corrupt directory record for {username}: {reason}")]
    CorruptRecord { username: String, reason: String },
}

/// Top-level error for authentication operations.
///
/// Note what is absent: malformed tokens, digest mismatches, window misses,
/// and unknown users are not errors. They all surface as a uniform
/// "unauthenticated" outcome so remote callers get no oracle. Only
/// infrastructure faults are genuine errors.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Token issuance failed: {0}")]
    Issue(#[from] token::IssueError),

    #[error("User directory unavailable: {0}")]
    DirectoryUnavailable(#[from] DirectoryError),
}
