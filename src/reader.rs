//! Payload reader positioned at serialized call arguments.
//!
//! The transport layer hands [`PayloadReader`] to
//! [`DispatchRegistry::invoke`](crate::DispatchRegistry::invoke), which
//! forwards it to the handler untouched — the registry never knows the
//! argument schema. Handlers pull arguments off the front with [`read`],
//! one value per call, in declaration order.
//!
//! [`read`]: PayloadReader::read
//!
//! # Example
//!
//! ```
//! use bytes::Bytes;
//! use wirecall::codec::MsgPackCodec;
//! use wirecall::reader::PayloadReader;
//!
//! let mut blob = MsgPackCodec::encode(&3i32).unwrap();
//! blob.extend(MsgPackCodec::encode(&"fire").unwrap());
//!
//! let mut reader = PayloadReader::new(Bytes::from(blob));
//! let count: i32 = reader.read().unwrap();
//! let action: String = reader.read().unwrap();
//! assert_eq!((count, action.as_str()), (3, "fire"));
//! assert!(reader.is_empty());
//! ```

use std::io::Cursor;

use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// Cursor over a serialized argument blob.
pub struct PayloadReader {
    buf: Bytes,
    pos: usize,
}

impl PayloadReader {
    /// Create a reader over an owned payload.
    pub fn new(buf: Bytes) -> Self {
        Self { buf, pos: 0 }
    }

    /// Create a reader over a borrowed payload (copies the bytes).
    pub fn from_slice(buf: &[u8]) -> Self {
        Self::new(Bytes::copy_from_slice(buf))
    }

    /// Read the next MsgPack value and advance past it.
    ///
    /// # Errors
    ///
    /// Returns error if the remaining bytes do not deserialize to `T`.
    pub fn read<T: DeserializeOwned>(&mut self) -> Result<T> {
        let mut cursor = Cursor::new(&self.buf[self.pos..]);
        let value = rmp_serde::decode::from_read(&mut cursor)?;
        self.pos += cursor.position() as usize;
        Ok(value)
    }

    /// Number of unread bytes.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Whether the payload is fully consumed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::MsgPackCodec;

    #[test]
    fn test_sequential_reads_advance() {
        let mut blob = MsgPackCodec::encode(&42u32).unwrap();
        blob.extend(MsgPackCodec::encode(&(1.0f32, 2.0f32)).unwrap());

        let mut reader = PayloadReader::new(Bytes::from(blob));
        assert!(!reader.is_empty());

        let first: u32 = reader.read().unwrap();
        assert_eq!(first, 42);

        let second: (f32, f32) = reader.read().unwrap();
        assert_eq!(second, (1.0, 2.0));
        assert!(reader.is_empty());
    }

    #[test]
    fn test_read_past_end_errors() {
        let blob = MsgPackCodec::encode(&1u8).unwrap();
        let mut reader = PayloadReader::new(Bytes::from(blob));

        let _: u8 = reader.read().unwrap();
        let result: Result<u8> = reader.read();
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_payload_errors_without_panic() {
        let mut reader = PayloadReader::from_slice(&[0xc1]); // reserved marker
        let result: Result<String> = reader.read();
        assert!(result.is_err());
    }
}
