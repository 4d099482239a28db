//! Metadata stores
//!
//! A [`MetadataStore`] is the read-only key/value mapping a
//! [`crate::BundleManager`] reads from. The store is owned elsewhere: the
//! manager only holds a shared handle and queries it on every access.

mod bundle;

pub use bundle::Bundle;

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::sync::{Arc, RwLock};

/// Read-only access to an information dictionary.
///
/// Implementations return the current raw value for a key, or `None` when the
/// key is absent. They must not fail: an unreadable store behaves as an empty
/// one.
pub trait MetadataStore: Send + Sync {
    fn value(&self, key: &str) -> Option<serde_json::Value>;
}

/// A store with no keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyStore;

impl MetadataStore for EmptyStore {
    fn value(&self, _key: &str) -> Option<serde_json::Value> {
        None
    }
}

impl<S: BuildHasher + Send + Sync> MetadataStore for HashMap<String, serde_json::Value, S> {
    fn value(&self, key: &str) -> Option<serde_json::Value> {
        self.get(key).cloned()
    }
}

impl MetadataStore for BTreeMap<String, serde_json::Value> {
    fn value(&self, key: &str) -> Option<serde_json::Value> {
        self.get(key).cloned()
    }
}

impl MetadataStore for serde_json::Map<String, serde_json::Value> {
    fn value(&self, key: &str) -> Option<serde_json::Value> {
        self.get(key).cloned()
    }
}

/// A `serde_json::Value` is a store when it is an object; anything else is empty.
impl MetadataStore for serde_json::Value {
    fn value(&self, key: &str) -> Option<serde_json::Value> {
        self.as_object().and_then(|map| map.get(key)).cloned()
    }
}

/// A missing dictionary reads as empty.
impl<T: MetadataStore> MetadataStore for Option<T> {
    fn value(&self, key: &str) -> Option<serde_json::Value> {
        self.as_ref().and_then(|store| store.value(key))
    }
}

impl<T: MetadataStore + ?Sized> MetadataStore for &T {
    fn value(&self, key: &str) -> Option<serde_json::Value> {
        (**self).value(key)
    }
}

impl<T: MetadataStore + ?Sized> MetadataStore for Box<T> {
    fn value(&self, key: &str) -> Option<serde_json::Value> {
        (**self).value(key)
    }
}

impl<T: MetadataStore + ?Sized> MetadataStore for Arc<T> {
    fn value(&self, key: &str) -> Option<serde_json::Value> {
        (**self).value(key)
    }
}

/// A store that may change between reads. A poisoned lock reads as empty.
impl<T: MetadataStore> MetadataStore for RwLock<T> {
    fn value(&self, key: &str) -> Option<serde_json::Value> {
        self.read().ok().and_then(|store| store.value(key))
    }
}
