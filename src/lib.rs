//! # bundle-manager
//!
//! Typed accessors for an application bundle's `Info.plist` metadata.
//!
//! A bundle's information dictionary is a loosely typed key/value store. This
//! crate maps a fixed catalog of well-known keys ([`BundleKey`]) to typed,
//! optional accessors on [`BundleManager`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bundle_manager::BundleManager;
//!
//! let manager = BundleManager::shared();
//! println!("identifier: {}", manager.bundle_identifier());
//! if let Some(version) = manager.short_version_string() {
//!     println!("version: {version}");
//! }
//! ```
//!
//! ## Absence policy
//!
//! Accessors never fail. A missing key and a key holding a value of the wrong
//! type both read as `None`. The one exception is
//! [`BundleManager::bundle_identifier`], which reads as an empty string.
#![deny(unsafe_code)]

pub mod error;
pub mod manager;
pub mod store;
pub mod types;

pub use error::{BundleError, Result};
pub use manager::{BundleManager, BundleManagerBuilder};
pub use store::{Bundle, EmptyStore, MetadataStore};
pub use types::{
    BundleInfo, BundleKey, BundleValue, InfoDictionary, KeyCategory, Platform, ValueKind,
};
