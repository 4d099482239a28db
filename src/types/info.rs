//! Typed snapshot of a bundle's information dictionary.

use serde::{Deserialize, Serialize};

use super::keys::BundleKey;
use crate::store::MetadataStore;

/// Every catalog field read at one point in time.
///
/// Serializes with the canonical `Info.plist` key names, omitting absent
/// fields. Deserialization follows the accessor rule: a field holding a value
/// of the wrong type reads as `None` (the identifier as `""`) instead of
/// failing the whole dictionary.
///
/// # Example
///
/// ```rust,ignore
/// use bundle_manager::BundleManager;
///
/// let info = BundleManager::shared().info();
/// println!("{}", serde_json::to_string_pretty(&info)?);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleInfo {
    #[serde(
        rename = "CFBundlePackageType",
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub package_type: Option<String>,

    #[serde(
        rename = "LSApplicationCategoryType",
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub application_category_type: Option<String>,

    /// Empty when the dictionary declares no string identifier.
    #[serde(rename = "CFBundleIdentifier", default, deserialize_with = "lenient::identifier")]
    pub bundle_identifier: String,

    #[serde(
        rename = "WKAppBundleIdentifier",
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub watch_bundle_identifier: Option<String>,

    #[serde(
        rename = "WKCompanionAppBundleIdentifier",
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub companion_bundle_identifier: Option<String>,

    #[serde(
        rename = "CFBundleName",
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub bundle_name: Option<String>,

    #[serde(
        rename = "CFBundleDisplayName",
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub display_name: Option<String>,

    #[serde(
        rename = "CFBundleSpokenName",
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub spoken_name: Option<String>,

    #[serde(
        rename = "CFBundleVersion",
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<String>,

    #[serde(
        rename = "CFBundleShortVersionString",
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub short_version_string: Option<String>,

    #[serde(
        rename = "CFBundleInfoDictionaryVersion",
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub info_dictionary_version: Option<String>,

    #[serde(
        rename = "NSHumanReadableCopyright",
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub human_readable_copyright: Option<String>,

    #[serde(
        rename = "LSMinimumSystemVersion",
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub minimum_system_version: Option<String>,

    #[serde(
        rename = "LSMinimumSystemVersionByArchitecture",
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub minimum_system_version_by_architecture: Option<String>,

    #[serde(
        rename = "MinimumOSVersion",
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub minimum_os_version: Option<String>,

    #[serde(
        rename = "LSRequiresIPhoneOS",
        default,
        deserialize_with = "lenient::boolean",
        skip_serializing_if = "Option::is_none"
    )]
    pub requires_iphone_os: Option<bool>,

    #[serde(
        rename = "WKWatchKitApp",
        default,
        deserialize_with = "lenient::boolean",
        skip_serializing_if = "Option::is_none"
    )]
    pub watch_kit_app: Option<bool>,

    #[serde(
        rename = "CFBundleDevelopmentRegion",
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub development_region: Option<String>,

    #[serde(
        rename = "CFBundleLocalizations",
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub localizations: Option<String>,

    #[serde(
        rename = "CFBundleAllowMixedLocalizations",
        default,
        deserialize_with = "lenient::boolean",
        skip_serializing_if = "Option::is_none"
    )]
    pub allow_mixed_localizations: Option<bool>,

    #[serde(
        rename = "TICapsLockLanguageSwitchCapable",
        default,
        deserialize_with = "lenient::boolean",
        skip_serializing_if = "Option::is_none"
    )]
    pub caps_lock_language_switch_capable: Option<bool>,

    #[serde(
        rename = "CFAppleHelpAnchor",
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub apple_help_anchor: Option<String>,

    #[serde(
        rename = "CFBundleHelpBookName",
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub help_book_name: Option<String>,

    #[serde(
        rename = "CFBundleHelpBookFolder",
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub help_book_folder: Option<String>,
}

impl BundleInfo {
    /// Read every catalog field from `store`.
    pub fn from_store<S: MetadataStore + ?Sized>(store: &S) -> Self {
        let string = |key: BundleKey| key.read(store).and_then(|v| v.into_string());
        let boolean = |key: BundleKey| key.read(store).and_then(|v| v.as_bool());

        Self {
            package_type: string(BundleKey::PackageType),
            application_category_type: string(BundleKey::ApplicationCategoryType),
            bundle_identifier: string(BundleKey::BundleIdentifier).unwrap_or_default(),
            watch_bundle_identifier: string(BundleKey::WatchBundleIdentifier),
            companion_bundle_identifier: string(BundleKey::CompanionBundleIdentifier),
            bundle_name: string(BundleKey::BundleName),
            display_name: string(BundleKey::DisplayName),
            spoken_name: string(BundleKey::SpokenName),
            version: string(BundleKey::Version),
            short_version_string: string(BundleKey::ShortVersionString),
            info_dictionary_version: string(BundleKey::InfoDictionaryVersion),
            human_readable_copyright: string(BundleKey::HumanReadableCopyright),
            minimum_system_version: string(BundleKey::MinimumSystemVersion),
            minimum_system_version_by_architecture: string(
                BundleKey::MinimumSystemVersionByArchitecture,
            ),
            minimum_os_version: string(BundleKey::MinimumOsVersion),
            requires_iphone_os: boolean(BundleKey::RequiresIPhoneOs),
            watch_kit_app: boolean(BundleKey::WatchKitApp),
            development_region: string(BundleKey::DevelopmentRegion),
            localizations: string(BundleKey::Localizations),
            allow_mixed_localizations: boolean(BundleKey::AllowMixedLocalizations),
            caps_lock_language_switch_capable: boolean(BundleKey::CapsLockLanguageSwitchCapable),
            apple_help_anchor: string(BundleKey::AppleHelpAnchor),
            help_book_name: string(BundleKey::HelpBookName),
            help_book_folder: string(BundleKey::HelpBookFolder),
        }
    }
}

/// Field deserializers that map wrong-typed values to absence.
mod lenient {
    use serde::{Deserialize, Deserializer};

    use crate::types::value::{BundleValue, ValueKind};

    pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let raw = serde_json::Value::deserialize(d)?;
        Ok(ValueKind::String.cast(&raw).and_then(BundleValue::into_string))
    }

    pub fn boolean<'de, D: Deserializer<'de>>(d: D) -> Result<Option<bool>, D::Error> {
        let raw = serde_json::Value::deserialize(d)?;
        Ok(ValueKind::Boolean.cast(&raw).and_then(|v| v.as_bool()))
    }

    pub fn identifier<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        string(d).map(Option::unwrap_or_default)
    }
}
