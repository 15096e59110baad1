//! Stable call identifier derivation.
//!
//! Sender and receiver compute call identifiers independently, possibly on
//! different machines, so the hash must be fixed by specification rather than
//! by whatever the runtime's default hasher happens to be. This module uses
//! 32-bit FNV-1a, which is byte-for-byte identical across processes,
//! platforms and builds.
//!
//! A call identifier combines two independent hashes:
//!
//! ```text
//! call_id = fnv1a(type_name) * 503 + fnv1a(method_name)
//! ```
//!
//! Combining two 32-bit hashes with a fixed odd constant lowers the collision
//! probability versus hashing the concatenated string, and avoids allocating
//! the concatenation at registration time.
//!
//! # Example
//!
//! ```
//! use wirecall::hash::call_id;
//!
//! let id = call_id("demo::PlayerController", "cmd_move");
//! assert_eq!(id, call_id("demo::PlayerController", "cmd_move"));
//! assert_ne!(id, call_id("demo::PlayerController", "cmd_fire"));
//! ```

/// FNV-1a 32-bit offset basis.
pub const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;

/// FNV-1a 32-bit prime.
pub const FNV_PRIME: u32 = 16_777_619;

/// Fixed odd constant mixing the type hash with the method hash.
pub const TYPE_MIX: u32 = 503;

/// Stable 32-bit FNV-1a hash of a string.
///
/// Fixed by specification: never replace this with `DefaultHasher`, whose
/// output varies per process.
#[inline]
pub fn stable_hash(s: &str) -> u32 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in s.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Derive the call identifier for a (type, method) pair.
///
/// Deterministic across processes running the same code. Distinct pairs
/// yield distinct identifiers with high probability (birthday bound, not
/// cryptographic); genuine collisions are detected at registration time.
#[inline]
pub fn call_id(type_name: &str, method_name: &str) -> u32 {
    stable_hash(type_name)
        .wrapping_mul(TYPE_MIX)
        .wrapping_add(stable_hash(method_name))
}
