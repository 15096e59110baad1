//! Dispatch registry - routes stable call identifiers to handlers.
//!
//! The registry is the process-wide table behind remote-call routing:
//!
//! - [`register`] derives a stable identifier for a (target type, method)
//!   pair and stores the handler under it
//! - [`invoke`] resolves an inbound identifier and runs the matching handler
//!   against a target instance
//! - [`authority_info`] lets the transport layer decide, before
//!   deserializing anything, whether the originating connection must own the
//!   target
//!
//! Registration is decentralized: each participating type registers its own
//! methods, typically once behind a [`std::sync::Once`] guard when the type
//! is first touched. Unknown or forged identifiers are a routine occurrence
//! on a live network and are rejected with `Ok(false)`, never a panic.
//!
//! [`register`]: DispatchRegistry::register
//! [`invoke`]: DispatchRegistry::invoke
//! [`authority_info`]: DispatchRegistry::authority_info
//!
//! # Example
//!
//! ```
//! use std::any::Any;
//!
//! use bytes::Bytes;
//! use wirecall::codec::MsgPackCodec;
//! use wirecall::connection::Connection;
//! use wirecall::reader::PayloadReader;
//! use wirecall::registry::{CallKind, DispatchRegistry};
//! use wirecall::target::CallTarget;
//! use wirecall::Result;
//!
//! struct Counter {
//!     hits: u32,
//! }
//! impl CallTarget for Counter {
//!     fn as_any(&self) -> &dyn Any { self }
//!     fn as_any_mut(&mut self) -> &mut dyn Any { self }
//! }
//!
//! fn cmd_bump(
//!     target: &mut dyn CallTarget,
//!     reader: &mut PayloadReader,
//!     _conn: Option<&dyn Connection>,
//! ) -> Result<()> {
//!     let by: u32 = reader.read()?;
//!     let counter = target
//!         .as_any_mut()
//!         .downcast_mut::<Counter>()
//!         .expect("owner type checked by registry");
//!     counter.hits += by;
//!     Ok(())
//! }
//!
//! let registry = DispatchRegistry::new();
//! let id = registry.register::<Counter>("cmd_bump", CallKind::ServerDirected, cmd_bump, true);
//!
//! let payload = MsgPackCodec::encode(&3u32).unwrap();
//! let mut reader = PayloadReader::new(Bytes::from(payload));
//! let mut counter = Counter { hits: 0 };
//!
//! let delivered = registry
//!     .invoke(id, CallKind::ServerDirected, &mut reader, &mut counter, None)
//!     .unwrap();
//! assert!(delivered);
//! assert_eq!(counter.hits, 3);
//! ```

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};

use crate::connection::Connection;
use crate::error::Result;
use crate::hash::call_id;
use crate::reader::PayloadReader;
use crate::target::CallTarget;

/// Uniform signature every registered handler conforms to.
///
/// A plain `fn` pointer rather than a boxed closure: the per-method wrappers
/// are static functions, and pointer identity is what makes re-registration
/// of the same wrapper detectable as a harmless duplicate.
pub type RemoteCallFn =
    fn(&mut dyn CallTarget, &mut PayloadReader, Option<&dyn Connection>) -> Result<()>;

/// Which way a remote call travels.
///
/// The two kinds never fall back into each other: a valid client-directed
/// identifier supplied where a server-directed one is expected is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallKind {
    /// A remote client asks the authoritative server to run this.
    ServerDirected,
    /// The server tells one or more clients to run this.
    ClientDirected,
}

/// Authority requirement of a server-directed call, queried by the transport
/// layer before deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorityInfo {
    /// Whether the originating connection must own the target instance.
    pub requires_authority: bool,
}

/// One registered remote-callable method.
#[derive(Clone, Copy)]
struct Invoker {
    owner: TypeId,
    owner_name: &'static str,
    method: &'static str,
    kind: CallKind,
    handler: RemoteCallFn,
    requires_authority: bool,
}

impl Invoker {
    /// Same callable identity: identical {owner, kind, handler} triple.
    fn is_duplicate_of(&self, owner: TypeId, kind: CallKind, handler: RemoteCallFn) -> bool {
        self.owner == owner && self.kind == kind && self.handler as usize == handler as usize
    }

    /// Membership check against the owner-type tag.
    fn accepts(&self, target: &dyn CallTarget) -> bool {
        target.is_instance_of(self.owner)
    }
}

/// Process-wide mapping from call identifier to handler.
///
/// Read-dominated after startup: invocations take the read lock, while
/// registration and removal take the write lock. No lock is held while a
/// handler body runs, so handlers may re-enter the registry.
#[derive(Default)]
pub struct DispatchRegistry {
    entries: RwLock<HashMap<u32, Invoker>>,
}

impl DispatchRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry instance.
    pub fn global() -> &'static DispatchRegistry {
        static GLOBAL: OnceLock<DispatchRegistry> = OnceLock::new();
        GLOBAL.get_or_init(DispatchRegistry::new)
    }

    /// Register a handler for `T::method` and return its call identifier.
    ///
    /// The identifier derives from the fully-qualified type path and the
    /// method name, so both peers compute it independently. Registering the
    /// identical {type, kind, handler} triple again is a no-op returning the
    /// same identifier. A genuine collision (two distinct callables hashing
    /// to one identifier) is reported through the diagnostic channel and the
    /// first registration wins; the identifier is still returned, but the
    /// new handler is unreachable. This is a build-time-detectable
    /// misconfiguration, not a runtime fault.
    ///
    /// `requires_authority` is only meaningful for
    /// [`CallKind::ServerDirected`] entries.
    pub fn register<T: CallTarget>(
        &self,
        method: &'static str,
        kind: CallKind,
        handler: RemoteCallFn,
        requires_authority: bool,
    ) -> u32 {
        let owner_name = std::any::type_name::<T>();
        let id = call_id(owner_name, method);
        self.register_with_id(
            id,
            TypeId::of::<T>(),
            owner_name,
            method,
            kind,
            handler,
            requires_authority,
        )
    }

    /// Insert under an explicit identifier. Split out from [`register`] so
    /// tests can force two distinct callables onto one identifier.
    ///
    /// [`register`]: DispatchRegistry::register
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn register_with_id(
        &self,
        id: u32,
        owner: TypeId,
        owner_name: &'static str,
        method: &'static str,
        kind: CallKind,
        handler: RemoteCallFn,
        requires_authority: bool,
    ) -> u32 {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);

        if let Some(existing) = entries.get(&id) {
            if existing.is_duplicate_of(owner, kind, handler) {
                return id;
            }
            tracing::error!(
                id,
                kept = %format_args!("{}::{}", existing.owner_name, existing.method),
                unreachable = %format_args!("{owner_name}::{method}"),
                "call id collision; rename one of the methods"
            );
            return id;
        }

        entries.insert(
            id,
            Invoker {
                owner,
                owner_name,
                method,
                kind,
                handler,
                requires_authority,
            },
        );

        match kind {
            CallKind::ServerDirected => {
                tracing::debug!(id, method, requires_authority, "registered server-directed call");
            }
            CallKind::ClientDirected => {
                tracing::debug!(id, method, "registered client-directed call");
            }
        }

        id
    }

    /// Look up the entry for `id` if it exists with the expected kind.
    ///
    /// A present-but-wrong-kind entry is treated identically to absent.
    /// Returns a copy so no lock outlives the lookup.
    fn find(&self, id: u32, kind: CallKind) -> Option<Invoker> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        match entries.get(&id) {
            Some(entry) if entry.kind == kind => Some(*entry),
            Some(entry) => {
                tracing::debug!(id, expected = ?kind, actual = ?entry.kind, "call kind mismatch, dropping");
                None
            }
            None => {
                tracing::debug!(id, "unknown call id, dropping");
                None
            }
        }
    }

    /// Resolve `id` and run the matching handler against `target`.
    ///
    /// Returns `Ok(false)` without error for every routing rejection:
    /// unknown identifier, kind mismatch, or a target that is not an
    /// instance of the registered owner type. Failures raised by the handler
    /// body itself propagate unchanged.
    pub fn invoke(
        &self,
        id: u32,
        kind: CallKind,
        reader: &mut PayloadReader,
        target: &mut dyn CallTarget,
        connection: Option<&dyn Connection>,
    ) -> Result<bool> {
        let Some(entry) = self.find(id, kind) else {
            return Ok(false);
        };

        if !entry.accepts(target) {
            tracing::debug!(id, owner = entry.owner_name, "target type mismatch, dropping");
            return Ok(false);
        }

        // Entry was copied out of the table; the lock is released here, so
        // the handler may re-enter the registry.
        (entry.handler)(target, reader, connection)?;
        Ok(true)
    }

    /// Authority requirement of the server-directed call `id` on `target`.
    ///
    /// `None` if no matching entry exists, the entry is client-directed, or
    /// `target` is not an instance of the owner type. Callers must treat
    /// `None` as "reject the call", never as "no authority required".
    pub fn authority_info(&self, id: u32, target: &dyn CallTarget) -> Option<AuthorityInfo> {
        let entry = self.find(id, CallKind::ServerDirected)?;
        if !entry.accepts(target) {
            return None;
        }
        Some(AuthorityInfo {
            requires_authority: entry.requires_authority,
        })
    }

    /// Handler registered under `id`, for external tooling.
    ///
    /// Never used on the invocation path; prefer [`invoke`].
    ///
    /// [`invoke`]: DispatchRegistry::invoke
    pub fn delegate_for(&self, id: u32) -> Option<RemoteCallFn> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(&id).map(|entry| entry.handler)
    }

    /// Whether any entry exists under `id`, regardless of kind.
    pub fn contains(&self, id: u32) -> bool {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.contains_key(&id)
    }

    /// Remove the entry under `id`, returning whether one existed.
    ///
    /// Intended for test isolation. There is deliberately no bulk-clear:
    /// identifiers handed to remote peers cannot be safely regenerated
    /// mid-session.
    pub fn remove(&self, id: u32) -> bool {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let removed = entries.remove(&id).is_some();
        if removed {
            tracing::debug!(id, "removed call registration");
        }
        removed
    }
}
