use thiserror::Error;

/// Error type for token decoding failures.
///
/// Variants identify the parse stage for internal diagnostics. The
/// authentication boundary collapses every variant into a single
/// "unauthenticated" outcome so callers cannot distinguish them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("Token is not valid base64: {0}")]
    InvalidBase64(String),

    #[error("Unsupported token version: {0}")]
    UnsupportedVersion(u32),

    #[error("Declared digest length {declared} exceeds maximum {max}")]
    DigestTooLong { declared: usize, max: usize },

    #[error("Declared username length {declared} exceeds maximum {max}")]
    UsernameTooLong { declared: usize, max: usize },

    #[error("Token truncated: needed {needed} bytes, {available} available")]
    Truncated { needed: usize, available: usize },

    #[error("Username is not valid UTF-8")]
    InvalidUtf8,

    #[error("Token has {0} trailing bytes after username")]
    TrailingBytes(usize),
}
