//! Typed accessors over a bundle's information dictionary.
//!
//! [`BundleManager`] binds one [`MetadataStore`] and exposes one getter per
//! catalog key. Every getter reads the store afresh; nothing is cached.
//!
//! ```rust,ignore
//! use bundle_manager::BundleManager;
//! use serde_json::json;
//!
//! let manager = BundleManager::with_store(json!({
//!     "CFBundleIdentifier": "ch.example.app",
//!     "CFBundleVersion": "1",
//! }));
//! assert_eq!(manager.bundle_identifier(), "ch.example.app");
//! assert_eq!(manager.version().as_deref(), Some("1"));
//! assert_eq!(manager.bundle_name(), None);
//! ```

mod builder;

pub use builder::BundleManagerBuilder;

use std::sync::Arc;

use crate::store::{EmptyStore, MetadataStore};
use crate::types::{BundleInfo, BundleKey, BundleValue};

lazy_static::lazy_static! {
    static ref SHARED: BundleManager = BundleManager::new();
}

/// Typed, read-only view of an application bundle's metadata.
///
/// Absence and type mismatch both read as `None`. Cloning is cheap and clones
/// share the bound store.
#[derive(Clone)]
pub struct BundleManager {
    store: Arc<dyn MetadataStore>,
}

impl BundleManager {
    /// Manager bound to the main bundle.
    ///
    /// When no main bundle can be located (for example a plain command-line
    /// executable) the manager reads from an empty store.
    pub fn new() -> Self {
        Self::builder()
            .fallback_to_empty(true)
            .build()
            .unwrap_or_else(|_| Self::with_store(EmptyStore))
    }

    /// Process-wide manager bound to the main bundle, created on first use.
    pub fn shared() -> &'static BundleManager {
        &SHARED
    }

    pub fn builder() -> BundleManagerBuilder {
        BundleManagerBuilder::new()
    }

    /// Manager bound to `store`. No validation is performed.
    pub fn with_store<S: MetadataStore + 'static>(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Manager bound to an already shared store.
    pub fn from_shared(store: Arc<dyn MetadataStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn MetadataStore {
        self.store.as_ref()
    }

    /// Read any catalog key, cast to its declared type.
    pub fn value(&self, key: BundleKey) -> Option<BundleValue> {
        key.read(self.store.as_ref())
    }

    /// Snapshot of every catalog field.
    pub fn info(&self) -> BundleInfo {
        BundleInfo::from_store(self.store.as_ref())
    }

    fn string(&self, key: BundleKey) -> Option<String> {
        self.value(key).and_then(BundleValue::into_string)
    }

    fn boolean(&self, key: BundleKey) -> Option<bool> {
        self.value(key).and_then(|v| v.as_bool())
    }

    // Categorization

    /// The type of bundle (`CFBundlePackageType`).
    pub fn package_type(&self) -> Option<String> {
        self.string(BundleKey::PackageType)
    }

    /// The category that best describes the app for the App Store
    /// (`LSApplicationCategoryType`).
    pub fn application_category_type(&self) -> Option<String> {
        self.string(BundleKey::ApplicationCategoryType)
    }

    // Identification

    /// A unique identifier for the bundle (`CFBundleIdentifier`).
    ///
    /// Unlike every other accessor this one is not optional: a missing or
    /// non-string identifier reads as `""`. Use
    /// [`BundleManager::bundle_identifier_opt`] to tell the cases apart.
    pub fn bundle_identifier(&self) -> String {
        self.bundle_identifier_opt().unwrap_or_default()
    }

    /// `CFBundleIdentifier`, or `None` when it is not declared.
    pub fn bundle_identifier_opt(&self) -> Option<String> {
        self.string(BundleKey::BundleIdentifier)
    }

    /// The bundle ID of the watchOS app (`WKAppBundleIdentifier`).
    pub fn watch_bundle_identifier(&self) -> Option<String> {
        self.string(BundleKey::WatchBundleIdentifier)
    }

    /// The bundle ID of the watchOS app's companion iOS app
    /// (`WKCompanionAppBundleIdentifier`). Meaningful on iOS and watchOS.
    pub fn companion_bundle_identifier(&self) -> Option<String> {
        self.string(BundleKey::CompanionBundleIdentifier)
    }

    // Naming

    /// A user-visible short name for the bundle (`CFBundleName`).
    pub fn bundle_name(&self) -> Option<String> {
        self.string(BundleKey::BundleName)
    }

    /// The user-visible name used by Siri and the iOS Home screen
    /// (`CFBundleDisplayName`).
    pub fn display_name(&self) -> Option<String> {
        self.string(BundleKey::DisplayName)
    }

    /// A replacement for the app name in text-to-speech (`CFBundleSpokenName`).
    pub fn spoken_name(&self) -> Option<String> {
        self.string(BundleKey::SpokenName)
    }

    // Versioning

    /// The build version (`CFBundleVersion`).
    pub fn version(&self) -> Option<String> {
        self.string(BundleKey::Version)
    }

    /// The release version number (`CFBundleShortVersionString`).
    pub fn short_version_string(&self) -> Option<String> {
        self.string(BundleKey::ShortVersionString)
    }

    /// `CFBundleInfoDictionaryVersion`
    pub fn info_dictionary_version(&self) -> Option<String> {
        self.string(BundleKey::InfoDictionaryVersion)
    }

    /// `NSHumanReadableCopyright`
    pub fn human_readable_copyright(&self) -> Option<String> {
        self.string(BundleKey::HumanReadableCopyright)
    }

    // Operating system

    /// The minimum operating system version required to run
    /// (`LSMinimumSystemVersion`).
    pub fn minimum_system_version(&self) -> Option<String> {
        self.string(BundleKey::MinimumSystemVersion)
    }

    /// `LSMinimumSystemVersionByArchitecture`. Meaningful on macOS.
    pub fn minimum_system_version_by_architecture(&self) -> Option<String> {
        self.string(BundleKey::MinimumSystemVersionByArchitecture)
    }

    /// `MinimumOSVersion`. Meaningful on iOS, tvOS and watchOS.
    pub fn minimum_os_version(&self) -> Option<String> {
        self.string(BundleKey::MinimumOsVersion)
    }

    /// Whether the app must run in iOS (`LSRequiresIPhoneOS`).
    pub fn requires_iphone_os(&self) -> Option<bool> {
        self.boolean(BundleKey::RequiresIPhoneOs)
    }

    /// Whether the bundle is a watchOS app (`WKWatchKitApp`).
    pub fn watch_kit_app(&self) -> Option<bool> {
        self.boolean(BundleKey::WatchKitApp)
    }

    // Localization

    /// The default language and region, as a language ID
    /// (`CFBundleDevelopmentRegion`).
    pub fn development_region(&self) -> Option<String> {
        self.string(BundleKey::DevelopmentRegion)
    }

    /// `CFBundleLocalizations`, when declared as a string.
    pub fn localizations(&self) -> Option<String> {
        self.string(BundleKey::Localizations)
    }

    /// `CFBundleAllowMixedLocalizations`
    pub fn allow_mixed_localizations(&self) -> Option<bool> {
        self.boolean(BundleKey::AllowMixedLocalizations)
    }

    /// `TICapsLockLanguageSwitchCapable`
    pub fn caps_lock_language_switch_capable(&self) -> Option<bool> {
        self.boolean(BundleKey::CapsLockLanguageSwitchCapable)
    }

    // Help

    /// The name of the bundle's HTML help file (`CFAppleHelpAnchor`).
    pub fn apple_help_anchor(&self) -> Option<String> {
        self.string(BundleKey::AppleHelpAnchor)
    }

    /// `CFBundleHelpBookName`
    pub fn help_book_name(&self) -> Option<String> {
        self.string(BundleKey::HelpBookName)
    }

    /// `CFBundleHelpBookFolder`
    pub fn help_book_folder(&self) -> Option<String> {
        self.string(BundleKey::HelpBookFolder)
    }
}

impl Default for BundleManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BundleManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BundleManager")
            .field("bundle_identifier", &self.bundle_identifier_opt())
            .finish_non_exhaustive()
    }
}
