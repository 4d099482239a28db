//! Type conversions for BundleError
//!
//! From implementations for the error types raised by the parsers this crate
//! depends on.

use super::types::BundleError;

impl From<plist::Error> for BundleError {
    fn from(err: plist::Error) -> Self {
        Self::Plist(err.to_string())
    }
}
