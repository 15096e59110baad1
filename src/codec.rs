//! MsgPack codec for argument payloads using `rmp-serde`.
//!
//! The codec is a marker struct with static methods rather than a trait
//! object. This allows for compile-time codec selection and keeps the hot
//! path free of dynamic dispatch.
//!
//! # Example
//!
//! ```
//! use wirecall::codec::MsgPackCodec;
//!
//! let encoded = MsgPackCodec::encode(&(1.0f32, -2.5f32)).unwrap();
//! let decoded: (f32, f32) = MsgPackCodec::decode(&encoded).unwrap();
//! assert_eq!(decoded, (1.0, -2.5));
//! ```

use crate::error::Result;

/// MessagePack codec for structured argument data.
///
/// Structs serialize in compact positional (array) format; both peers run
/// the same generated argument types, so field names carry no information.
pub struct MsgPackCodec;

impl MsgPackCodec {
    /// Encode a value to MsgPack bytes.
    ///
    /// # Errors
    ///
    /// Returns error if the value cannot be serialized.
    #[inline]
    pub fn encode<T: serde::Serialize>(value: &T) -> Result<Vec<u8>> {
        Ok(rmp_serde::to_vec(value)?)
    }

    /// Decode MsgPack bytes to a value.
    ///
    /// # Errors
    ///
    /// Returns error if the bytes cannot be deserialized to type T.
    #[inline]
    pub fn decode<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
        Ok(rmp_serde::from_slice(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct MoveArgs {
        dx: f32,
        dy: f32,
        sprint: bool,
    }

    #[test]
    fn test_encode_decode_struct() {
        let original = MoveArgs {
            dx: 1.5,
            dy: -0.25,
            sprint: true,
        };

        let encoded = MsgPackCodec::encode(&original).unwrap();
        let decoded: MoveArgs = MsgPackCodec::decode(&encoded).unwrap();

        assert_eq!(decoded, original);
    }

    #[test]
    fn test_structs_use_positional_format() {
        let args = MoveArgs {
            dx: 0.0,
            dy: 0.0,
            sprint: false,
        };

        let encoded = MsgPackCodec::encode(&args).unwrap();

        // fixarray with 3 elements (0x93), not fixmap (0x83).
        assert_eq!(
            encoded[0] & 0xF0,
            0x90,
            "Expected array format (0x9X), got {:02X}",
            encoded[0]
        );
    }

    #[test]
    fn test_decode_error_on_invalid_data() {
        let invalid = b"not valid msgpack";
        let result: Result<MoveArgs> = MsgPackCodec::decode(invalid);
        assert!(result.is_err());
    }
}
