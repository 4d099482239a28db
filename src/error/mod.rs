//! Error handling for bundle loading.
//!
//! Accessors on [`crate::BundleManager`] never return errors. These types only
//! surface while locating or parsing an `Info.plist`.

mod conversions;
pub mod types;

pub use types::*;
