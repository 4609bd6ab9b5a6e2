//! Adapters - Implementations of the ports.
//!
//! - `identity` - mock identity provider (the reference adapter; real
//!   provider integrations live outside this crate)
//! - `storage` - in-memory and file-backed flag stores

pub mod identity;
pub mod storage;
