//! `litoral-store` — the persistent store adapter boundary.
//!
//! The cart persists through a narrow key/value contract: one key for the
//! cart sequence, one for the customer record, values are opaque text. The
//! real deployment backs this with whatever session-scoped storage the host
//! provides; this crate carries the trait plus the in-memory and
//! storage-less implementations used by tests and dev tooling.

pub mod adapter;
pub mod memory;

pub use adapter::{StoreAdapter, StoreError};
pub use memory::{InMemoryStore, UnavailableStore};
