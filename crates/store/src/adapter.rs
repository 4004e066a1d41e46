//! Key/value store contract.

use std::sync::Arc;

use thiserror::Error;

/// Store operation error.
///
/// These are **infrastructure errors**; the cart engine absorbs every one of
/// them and substitutes the documented default, so nothing here ever reaches
/// a caller of the cart API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The environment has no storage capability at all.
    #[error("store unavailable")]
    Unavailable,

    /// The backing store failed (lock poisoned, quota exceeded, ...).
    #[error("store backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

/// Key/value text storage scoped to one session/profile.
///
/// Contract:
/// - `get` on an absent key is `Ok(None)`, not an error.
/// - `set` replaces the whole value under the key (no partial writes).
/// - No coordination between writers: concurrent writers race and the last
///   write wins.
///
/// Implementations must be `Send + Sync`; callers may share an adapter
/// behind `Arc`.
pub trait StoreAdapter: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Capability check: whether this environment can persist at all.
    ///
    /// Adapters for storage-less environments return `false`; callers may
    /// use this to skip persistence work, but `get`/`set` must still fail
    /// gracefully with `StoreError::Unavailable` when called anyway.
    fn is_available(&self) -> bool {
        true
    }
}

impl<S> StoreAdapter for Arc<S>
where
    S: StoreAdapter + ?Sized,
{
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}
