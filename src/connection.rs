//! Connection trait - the registry's view of the transport connection.
//!
//! The transport and its connection objects live outside this crate. The
//! registry only ever forwards the originating connection to the handler and
//! names it in diagnostics, so the trait surface is deliberately minimal.
//!
//! Ownership checks stay with the transport layer: it consults
//! [`DispatchRegistry::authority_info`](crate::DispatchRegistry::authority_info)
//! and its own ownership model *before* deserializing and invoking.

/// Minimal view of an originating network connection.
pub trait Connection: Send + Sync {
    /// Stable identifier of this connection, for diagnostics.
    fn id(&self) -> u64;
}
