//! Proof module: canonical encoding and domain-separated hashing.
//!
//! Nothing in here is grid-specific. Callers build a `serde_json::Value`,
//! canonicalize it, and hash the bytes under a [`hash_domain::HashDomain`].

pub mod canon;
pub mod hash;
pub mod hash_domain;
