//! Error types for wirecall.

use thiserror::Error;

/// Main error type for all wirecall operations.
///
/// Routing failures (unknown identifier, kind mismatch, target type mismatch)
/// are *not* errors — [`DispatchRegistry::invoke`](crate::DispatchRegistry::invoke)
/// reports them as `Ok(false)`. Only argument deserialization and handler
/// bodies produce values of this type.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// MsgPack serialization error while encoding an argument payload.
    #[error("MsgPack encode error: {0}")]
    Encode(#[from] rmp_serde::encode::Error),

    /// MsgPack deserialization error while reading an argument payload.
    #[error("MsgPack decode error: {0}")]
    Decode(#[from] rmp_serde::decode::Error),

    /// Application-level failure raised by a handler body.
    #[error("Handler error: {0}")]
    Handler(String),
}

/// Result type alias using DispatchError.
pub type Result<T> = std::result::Result<T, DispatchError>;
