//! # wirecall
//!
//! Remote-call dispatch registry: a process-wide table mapping stable 32-bit
//! call identifiers to handlers, routing inbound network messages to the
//! correct method on the correct receiving object type.
//!
//! ## Architecture
//!
//! - **Identifiers** ([`hash`]): derived from the fully-qualified target
//!   type path and the method name with a fixed FNV-1a hash, so sender and
//!   receiver compute the same identifier independently.
//! - **Registry** ([`registry`]): register / invoke / authority query /
//!   diagnostics. Collisions are detected at registration and reported, not
//!   silently overwritten; unknown identifiers are rejected, never panicked
//!   on.
//! - **Targets** ([`target`]): receivers implement [`CallTarget`]; the
//!   registry checks owner-type membership explicitly before every call.
//! - **Payloads** ([`reader`], [`codec`]): MsgPack argument blobs behind a
//!   cursor the registry forwards without interpreting.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Once;
//!
//! use wirecall::{CallKind, DispatchRegistry};
//!
//! // Each participating type registers its methods once, lazily.
//! static REGISTER: Once = Once::new();
//!
//! fn ensure_registered() {
//!     REGISTER.call_once(|| {
//!         DispatchRegistry::global().register::<PlayerController>(
//!             "cmd_move",
//!             CallKind::ServerDirected,
//!             invoke_cmd_move,
//!             true,
//!         );
//!     });
//! }
//! ```

pub mod codec;
pub mod connection;
pub mod error;
pub mod hash;
pub mod reader;
pub mod registry;
pub mod target;

pub use codec::MsgPackCodec;
pub use connection::Connection;
pub use error::{DispatchError, Result};
pub use hash::call_id;
pub use reader::PayloadReader;
pub use registry::{AuthorityInfo, CallKind, DispatchRegistry, RemoteCallFn};
pub use target::CallTarget;
