use super::errors::CodecError;

/// Bounds-checked reader over untrusted token bytes.
///
/// Every read returns an error on underflow instead of panicking, so hostile
/// input that lies about field lengths fails cleanly at the read site.
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Consume exactly `len` bytes.
    ///
    /// # Errors
    /// * `Truncated` - Fewer than `len` bytes remain
    pub fn take(&mut self, len: usize) -> Result<&'a [u8], CodecError> {
        if len > self.remaining() {
            return Err(CodecError::Truncated {
                needed: len,
                available: self.remaining(),
            });
        }
        let slice = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    /// Read a big-endian unsigned 32-bit integer.
    pub fn read_u32(&mut self) -> Result<u32, CodecError> {
        let bytes = self.take(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read a big-endian signed 64-bit integer.
    pub fn read_i64(&mut self) -> Result<i64, CodecError> {
        let bytes = self.take(8)?;
        Ok(i64::from_be_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_in_order() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&7u32.to_be_bytes());
        buf.extend_from_slice(&(-42i64).to_be_bytes());
        buf.extend_from_slice(b"abc");

        let mut cursor = ByteCursor::new(&buf);
        assert_eq!(cursor.read_u32().unwrap(), 7);
        assert_eq!(cursor.read_i64().unwrap(), -42);
        assert_eq!(cursor.take(3).unwrap(), b"abc");
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_underflow_is_an_error_not_a_panic() {
        let mut cursor = ByteCursor::new(&[0u8, 1]);
        let result = cursor.read_u32();
        assert_eq!(
            result,
            Err(CodecError::Truncated {
                needed: 4,
                available: 2
            })
        );
        // A failed read consumes nothing
        assert_eq!(cursor.remaining(), 2);
    }

    #[test]
    fn test_take_zero_always_succeeds() {
        let mut cursor = ByteCursor::new(&[]);
        assert_eq!(cursor.take(0).unwrap(), b"");
    }
}
