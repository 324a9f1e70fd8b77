//! Fast hash collections.
//!
//! Re-exports of AHash-backed maps and sets. Keys in this workspace are small
//! integer tuples, where AHash is considerably faster than SipHash.

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};
