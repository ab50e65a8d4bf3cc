use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;

use super::cursor::ByteCursor;
use super::errors::CodecError;

/// The single token format version currently produced and accepted.
pub const TOKEN_VERSION: u32 = 1;

/// Ceiling on the declared digest length, checked before any allocation.
pub const MAX_DIGEST_LEN: usize = 1024;

/// Maximum username length in UTF-8 bytes.
pub const MAX_USERNAME_LEN: usize = 255;

/// Decoded wire form of an authentication token.
///
/// Serialized layout (all integers big-endian):
///
/// | field         | size               |
/// |---------------|--------------------|
/// | version       | 4 bytes            |
/// | digest length | 4 bytes            |
/// | digest        | digest length      |
/// | seed          | 8 bytes            |
/// | issued_at_ms  | 8 bytes            |
/// | username len  | 4 bytes            |
/// | username      | username len bytes |
///
/// The external representation is the URL-safe base64 encoding of those
/// bytes. Tokens are transient: they are never persisted server-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub version: u32,
    pub digest: Vec<u8>,
    pub seed: i64,
    pub issued_at_ms: i64,
    pub username: String,
}

impl Token {
    /// Serialize to the fixed binary layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let username = self.username.as_bytes();
        let mut buf = Vec::with_capacity(32 + self.digest.len() + username.len());
        buf.extend_from_slice(&self.version.to_be_bytes());
        buf.extend_from_slice(&(self.digest.len() as u32).to_be_bytes());
        buf.extend_from_slice(&self.digest);
        buf.extend_from_slice(&self.seed.to_be_bytes());
        buf.extend_from_slice(&self.issued_at_ms.to_be_bytes());
        buf.extend_from_slice(&(username.len() as u32).to_be_bytes());
        buf.extend_from_slice(username);
        buf
    }

    /// Serialize and encode as the opaque URL-safe base64 string.
    pub fn encode(&self) -> String {
        URL_SAFE.encode(self.to_bytes())
    }

    /// Decode the opaque string form.
    ///
    /// # Errors
    /// * `CodecError` - Input is not valid base64 or not a well-formed token
    pub fn decode(encoded: &str) -> Result<Self, CodecError> {
        let bytes = URL_SAFE
            .decode(encoded)
            .map_err(|e| CodecError::InvalidBase64(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Parse the fixed binary layout from untrusted bytes.
    ///
    /// Fields are read strictly in written order. Length claims are checked
    /// against hard ceilings before any allocation, and against the bytes
    /// actually available before any read. Trailing bytes are rejected.
    ///
    /// # Errors
    /// * `UnsupportedVersion` - Version field is not the supported value
    /// * `DigestTooLong` / `UsernameTooLong` - Unreasonable length claim
    /// * `Truncated` - Declared lengths exceed the available bytes
    /// * `InvalidUtf8` - Username bytes are not valid UTF-8
    /// * `TrailingBytes` - Input continues past the username field
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        let mut cursor = ByteCursor::new(bytes);

        let version = cursor.read_u32()?;
        if version != TOKEN_VERSION {
            return Err(CodecError::UnsupportedVersion(version));
        }

        let digest_len = cursor.read_u32()? as usize;
        if digest_len > MAX_DIGEST_LEN {
            return Err(CodecError::DigestTooLong {
                declared: digest_len,
                max: MAX_DIGEST_LEN,
            });
        }
        let digest = cursor.take(digest_len)?.to_vec();

        let seed = cursor.read_i64()?;
        let issued_at_ms = cursor.read_i64()?;

        let username_len = cursor.read_u32()? as usize;
        if username_len > MAX_USERNAME_LEN {
            return Err(CodecError::UsernameTooLong {
                declared: username_len,
                max: MAX_USERNAME_LEN,
            });
        }
        let username_bytes = cursor.take(username_len)?;
        let username = std::str::from_utf8(username_bytes)
            .map_err(|_| CodecError::InvalidUtf8)?
            .to_string();

        if cursor.remaining() != 0 {
            return Err(CodecError::TrailingBytes(cursor.remaining()));
        }

        Ok(Self {
            version,
            digest,
            seed,
            issued_at_ms,
            username,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_token() -> Token {
        Token {
            version: TOKEN_VERSION,
            digest: vec![0xAB; 64],
            seed: 0x1122_3344_5566_7788,
            issued_at_ms: 1_700_000_000_000,
            username: "alice".to_string(),
        }
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let token = sample_token();
        let encoded = token.encode();
        let decoded = Token::decode(&encoded).expect("Failed to decode token");
        assert_eq!(decoded, token);
    }

    #[test]
    fn test_binary_layout_is_fixed() {
        let token = sample_token();
        let bytes = token.to_bytes();

        assert_eq!(&bytes[0..4], &1u32.to_be_bytes());
        assert_eq!(&bytes[4..8], &64u32.to_be_bytes());
        assert_eq!(&bytes[8..72], &[0xAB; 64][..]);
        assert_eq!(&bytes[72..80], &0x1122_3344_5566_7788i64.to_be_bytes());
        assert_eq!(&bytes[80..88], &1_700_000_000_000i64.to_be_bytes());
        assert_eq!(&bytes[88..92], &5u32.to_be_bytes());
        assert_eq!(&bytes[92..], b"alice");
    }

    #[test]
    fn test_rejects_unsupported_version() {
        let mut bytes = sample_token().to_bytes();
        bytes[3] = 2;
        assert_eq!(
            Token::from_bytes(&bytes),
            Err(CodecError::UnsupportedVersion(2))
        );
    }

    #[test]
    fn test_rejects_oversized_digest_length_before_reading() {
        // Declares a digest far beyond the ceiling but supplies no bytes at
        // all for it; the length check must fire before any read attempt.
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&TOKEN_VERSION.to_be_bytes());
        bytes.extend_from_slice(&u32::MAX.to_be_bytes());
        assert_eq!(
            Token::from_bytes(&bytes),
            Err(CodecError::DigestTooLong {
                declared: u32::MAX as usize,
                max: MAX_DIGEST_LEN,
            })
        );
    }

    #[test]
    fn test_rejects_oversized_username_length() {
        let mut token = sample_token();
        token.username = String::new();
        let mut bytes = token.to_bytes();
        let len = bytes.len();
        bytes[len - 4..].copy_from_slice(&300u32.to_be_bytes());
        assert_eq!(
            Token::from_bytes(&bytes),
            Err(CodecError::UsernameTooLong {
                declared: 300,
                max: MAX_USERNAME_LEN,
            })
        );
    }

    #[test]
    fn test_rejects_truncated_input_at_every_length() {
        let bytes = sample_token().to_bytes();
        for cut in 0..bytes.len() {
            let result = Token::from_bytes(&bytes[..cut]);
            assert!(result.is_err(), "truncation at {} must fail", cut);
        }
    }

    #[test]
    fn test_rejects_trailing_bytes() {
        let mut bytes = sample_token().to_bytes();
        bytes.push(0);
        assert_eq!(Token::from_bytes(&bytes), Err(CodecError::TrailingBytes(1)));
    }

    #[test]
    fn test_rejects_invalid_utf8_username() {
        let mut bytes = sample_token().to_bytes();
        let len = bytes.len();
        bytes[len - 1] = 0xFF;
        assert_eq!(Token::from_bytes(&bytes), Err(CodecError::InvalidUtf8));
    }

    #[test]
    fn test_rejects_invalid_base64() {
        assert!(matches!(
            Token::decode("not base64!!"),
            Err(CodecError::InvalidBase64(_))
        ));
    }

    #[test]
    fn test_empty_input_fails_cleanly() {
        assert!(Token::decode("").is_err());
        assert!(Token::from_bytes(&[]).is_err());
    }
}
