//! Builder for [`BundleManager`].
//!
//! Picks the store a manager is bound to: an explicit store, a bundle
//! directory, a property list file, or (by default) the main bundle.

use std::path::PathBuf;
use std::sync::Arc;

use super::BundleManager;
use crate::error::Result;
use crate::store::{Bundle, EmptyStore, MetadataStore};
use crate::types::Platform;

enum Source {
    MainBundle,
    Store(Arc<dyn MetadataStore>),
    BundlePath(PathBuf),
    InfoPlist(PathBuf),
}

/// Builder for creating a [`BundleManager`].
///
/// ```rust,ignore
/// use bundle_manager::BundleManager;
///
/// let manager = BundleManager::builder()
///     .bundle_path("/Applications/Safari.app")
///     .build()?;
/// println!("{:?}", manager.short_version_string());
/// ```
pub struct BundleManagerBuilder {
    source: Source,
    fallback_to_empty: bool,
}

impl BundleManagerBuilder {
    pub fn new() -> Self {
        Self {
            source: Source::MainBundle,
            fallback_to_empty: false,
        }
    }

    /// Bind an existing store.
    pub fn store<S: MetadataStore + 'static>(mut self, store: S) -> Self {
        self.source = Source::Store(Arc::new(store));
        self
    }

    /// Open the bundle rooted at `path` (e.g. `Demo.app`).
    pub fn bundle_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Source::BundlePath(path.into());
        self
    }

    /// Read a property list file directly.
    pub fn info_plist(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Source::InfoPlist(path.into());
        self
    }

    /// Bind an empty store instead of failing when the source cannot be loaded.
    pub fn fallback_to_empty(mut self, enabled: bool) -> Self {
        self.fallback_to_empty = enabled;
        self
    }

    pub fn build(self) -> Result<BundleManager> {
        let loaded = match self.source {
            Source::Store(store) => return Ok(BundleManager::from_shared(store)),
            Source::MainBundle => Bundle::main(),
            Source::BundlePath(path) => Bundle::at(path),
            Source::InfoPlist(path) => Bundle::from_info_plist(path),
        };

        match loaded {
            Ok(bundle) => Ok(BundleManager::with_store(bundle)),
            Err(e) if self.fallback_to_empty => {
                tracing::warn!(
                    target: "bundle_manager::bundle",
                    error = %e,
                    not_found = e.is_not_found(),
                    platform = ?Platform::current(),
                    "bundle unavailable, falling back to an empty store"
                );
                Ok(BundleManager::with_store(EmptyStore))
            }
            Err(e) => Err(e),
        }
    }
}

impl Default for BundleManagerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
