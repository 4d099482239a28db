//! Bundle metadata types
//!
//! The key catalog, the value kinds it declares, and the typed snapshot built
//! from an information dictionary.

pub mod info;
pub mod keys;
pub mod value;

pub use info::BundleInfo;
pub use keys::{BundleKey, KeyCategory, Platform};
pub use value::{BundleValue, ValueKind};

/// A raw information dictionary: canonical key string to dynamically typed value.
pub type InfoDictionary = std::collections::HashMap<String, serde_json::Value>;
