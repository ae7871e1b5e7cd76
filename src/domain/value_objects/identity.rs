//! Identity value objects
//!
//! - `EntityKey`: process-local handle, present from construction
//! - `EntityId`: store identifier, assigned on first persist

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

static NEXT_KEY: AtomicU64 = AtomicU64::new(1);

/// Process-local identity of an in-memory entity.
///
/// Membership edges refer to children by key, so an edge can be recorded
/// before either side has been persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityKey(u64);

impl EntityKey {
    /// Allocate a fresh key
    pub fn next() -> Self {
        Self(NEXT_KEY.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifier assigned by the persistent store
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique() {
        let a = EntityKey::next();
        let b = EntityKey::next();
        assert_ne!(a, b);
        assert!(b.get() > a.get());
    }

    #[test]
    fn entity_id_serializes_transparently() {
        let id = EntityId::new("ab/cd/abcd");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"ab/cd/abcd\"");
        assert_eq!(id.to_string(), "ab/cd/abcd");
    }
}
