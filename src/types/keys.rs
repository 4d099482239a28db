//! The catalog of recognized `Info.plist` keys.
//!
//! Every key carries its canonical string form (the exact key used by the
//! host's property list), the value type it declares, a display name as shown
//! by Xcode's property list editor, a one-sentence description, and the
//! platforms it is meaningful on.
//!
//! ```rust,ignore
//! use bundle_manager::{BundleKey, ValueKind};
//!
//! assert_eq!(BundleKey::Version.as_str(), "CFBundleVersion");
//! assert_eq!(BundleKey::WatchKitApp.kind(), ValueKind::Boolean);
//! assert_eq!("CFBundleName".parse::<BundleKey>()?, BundleKey::BundleName);
//! ```

use serde::{Deserialize, Serialize};

use super::value::{BundleValue, ValueKind};
use crate::error::BundleError;
use crate::store::MetadataStore;

/// Operating system family a key applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    MacOs,
    Ios,
    TvOs,
    WatchOs,
}

impl Platform {
    /// All platforms, in declaration order.
    pub const ALL: &'static [Platform] =
        &[Platform::MacOs, Platform::Ios, Platform::TvOs, Platform::WatchOs];

    /// The platform this crate was compiled for, if it is an Apple target.
    pub const fn current() -> Option<Platform> {
        if cfg!(target_os = "macos") {
            Some(Platform::MacOs)
        } else if cfg!(target_os = "ios") {
            Some(Platform::Ios)
        } else if cfg!(target_os = "tvos") {
            Some(Platform::TvOs)
        } else if cfg!(target_os = "watchos") {
            Some(Platform::WatchOs)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MacOs => write!(f, "macOS"),
            Self::Ios => write!(f, "iOS"),
            Self::TvOs => write!(f, "tvOS"),
            Self::WatchOs => write!(f, "watchOS"),
        }
    }
}

/// Grouping used by Apple's documentation for bundle keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCategory {
    Categorization,
    Identification,
    Naming,
    Versioning,
    OperatingSystem,
    Localization,
    Help,
}

const IOS_WATCHOS: &[Platform] = &[Platform::Ios, Platform::WatchOs];
const MACOS: &[Platform] = &[Platform::MacOs];
const EMBEDDED: &[Platform] = &[Platform::Ios, Platform::TvOs, Platform::WatchOs];

macro_rules! bundle_keys {
    ($(
        $(#[$doc:meta])*
        $variant:ident => $key:tt {
            kind: $kind:ident,
            category: $category:ident,
            name: $name:expr,
            platforms: $platforms:expr,
            description: $description:expr $(,)?
        }
    ),* $(,)?) => {
        /// A recognized `Info.plist` key.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum BundleKey {
            $(
                $(#[$doc])*
                #[serde(rename = $key)]
                $variant,
            )*
        }

        impl BundleKey {
            /// Every recognized key, in catalog order.
            pub const ALL: &'static [BundleKey] = &[$(BundleKey::$variant),*];

            /// Canonical key string used for lookup in the information dictionary.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $key,)*
                }
            }

            /// Declared value type.
            pub const fn kind(self) -> ValueKind {
                match self {
                    $(Self::$variant => ValueKind::$kind,)*
                }
            }

            pub const fn category(self) -> KeyCategory {
                match self {
                    $(Self::$variant => KeyCategory::$category,)*
                }
            }

            /// Human-readable name, as shown by Xcode's property list editor.
            pub const fn display_name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            /// Platforms on which the key is meaningful.
            pub const fn platforms(self) -> &'static [Platform] {
                match self {
                    $(Self::$variant => $platforms,)*
                }
            }

            /// What the key declares, in one sentence.
            pub const fn description(self) -> &'static str {
                match self {
                    $(Self::$variant => $description,)*
                }
            }

            /// Look up a key by its canonical string. Unknown keys yield `None`.
            pub fn from_key(key: &str) -> Option<Self> {
                match key {
                    $($key => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

bundle_keys! {
    /// The type of bundle.
    PackageType => "CFBundlePackageType" {
        kind: String,
        category: Categorization,
        name: "Bundle OS Type code",
        platforms: Platform::ALL,
        description: "The type of bundle.",
    },
    /// The category that best describes the app for the App Store.
    ApplicationCategoryType => "LSApplicationCategoryType" {
        kind: String,
        category: Categorization,
        name: "Application Category",
        platforms: Platform::ALL,
        description: "The category that best describes the app for the App Store.",
    },
    /// A unique identifier for a bundle.
    BundleIdentifier => "CFBundleIdentifier" {
        kind: String,
        category: Identification,
        name: "Bundle identifier",
        platforms: Platform::ALL,
        description: "A unique identifier for a bundle.",
    },
    /// The bundle ID of the watchOS app.
    WatchBundleIdentifier => "WKAppBundleIdentifier" {
        kind: String,
        category: Identification,
        name: "WatchKit App Bundle Identifier",
        platforms: Platform::ALL,
        description: "The bundle ID of the watchOS app.",
    },
    /// The bundle ID of the watchOS app's companion iOS app.
    CompanionBundleIdentifier => "WKCompanionAppBundleIdentifier" {
        kind: String,
        category: Identification,
        name: "WatchKit Companion App Bundle Identifier",
        platforms: IOS_WATCHOS,
        description: "The bundle ID of the watchOS app's companion iOS app.",
    },
    /// A user-visible short name for the bundle.
    BundleName => "CFBundleName" {
        kind: String,
        category: Naming,
        name: "Bundle name",
        platforms: Platform::ALL,
        description: "A user-visible short name for the bundle.",
    },
    /// The user-visible name for the bundle, used by Siri and visible on the
    /// iOS Home screen.
    DisplayName => "CFBundleDisplayName" {
        kind: String,
        category: Naming,
        name: "Bundle display name",
        platforms: Platform::ALL,
        description: "The user-visible name for the bundle, used by Siri and visible on the iOS Home screen.",
    },
    /// A replacement for the app name in text-to-speech operations.
    SpokenName => "CFBundleSpokenName" {
        kind: String,
        category: Naming,
        name: "Accessibility Bundle Name",
        platforms: Platform::ALL,
        description: "A replacement for the app name in text-to-speech operations.",
    },
    /// The version of the build that identifies an iteration of the bundle.
    Version => "CFBundleVersion" {
        kind: String,
        category: Versioning,
        name: "Bundle version",
        platforms: Platform::ALL,
        description: "The version of the build that identifies an iteration of the bundle.",
    },
    /// The release or version number of the bundle.
    ShortVersionString => "CFBundleShortVersionString" {
        kind: String,
        category: Versioning,
        name: "Bundle versions string, short",
        platforms: Platform::ALL,
        description: "The release or version number of the bundle.",
    },
    /// The current version of the information property list structure.
    InfoDictionaryVersion => "CFBundleInfoDictionaryVersion" {
        kind: String,
        category: Versioning,
        name: "InfoDictionary version",
        platforms: Platform::ALL,
        description: "The current version of the information property list structure.",
    },
    /// A human-readable copyright notice for the bundle.
    HumanReadableCopyright => "NSHumanReadableCopyright" {
        kind: String,
        category: Versioning,
        name: "Copyright (human-readable)",
        platforms: Platform::ALL,
        description: "A human-readable copyright notice for the bundle.",
    },
    /// The minimum operating system version required for the app to run.
    MinimumSystemVersion => "LSMinimumSystemVersion" {
        kind: String,
        category: OperatingSystem,
        name: "Minimum system version",
        platforms: Platform::ALL,
        description: "The minimum operating system version required for the app to run.",
    },
    /// The minimum version of macOS required for the app to run on a set of
    /// architectures.
    MinimumSystemVersionByArchitecture => "LSMinimumSystemVersionByArchitecture" {
        kind: String,
        category: OperatingSystem,
        name: "Minimum system versions, per-architecture",
        platforms: MACOS,
        description: "The minimum version of macOS required for the app to run on a set of architectures.",
    },
    /// The minimum operating system version required on iOS, tvOS and watchOS.
    MinimumOsVersion => "MinimumOSVersion" {
        kind: String,
        category: OperatingSystem,
        name: "Minimum OS version",
        platforms: EMBEDDED,
        description: "The minimum operating system version required on iOS, tvOS and watchOS.",
    },
    /// Whether the app must run in iOS.
    RequiresIPhoneOs => "LSRequiresIPhoneOS" {
        kind: Boolean,
        category: OperatingSystem,
        name: "Application requires iPhone environment",
        platforms: Platform::ALL,
        description: "Whether the app must run in iOS.",
    },
    /// Whether the bundle is a watchOS app.
    WatchKitApp => "WKWatchKitApp" {
        kind: Boolean,
        category: OperatingSystem,
        name: "WatchKit App",
        platforms: Platform::ALL,
        description: "Whether the bundle is a watchOS app.",
    },
    /// The default language and region for the bundle, as a language ID.
    DevelopmentRegion => "CFBundleDevelopmentRegion" {
        kind: String,
        category: Localization,
        name: "Localization native development region",
        platforms: Platform::ALL,
        description: "The default language and region for the bundle, as a language ID.",
    },
    /// The localizations handled manually by the app.
    Localizations => "CFBundleLocalizations" {
        kind: String,
        category: Localization,
        name: "Localizations",
        platforms: Platform::ALL,
        description: "The localizations handled manually by the app.",
    },
    /// Whether the bundle supports retrieving localized strings from frameworks.
    AllowMixedLocalizations => "CFBundleAllowMixedLocalizations" {
        kind: Boolean,
        category: Localization,
        name: "Localized resources can be mixed",
        platforms: Platform::ALL,
        description: "Whether the bundle supports retrieving localized strings from frameworks.",
    },
    /// Whether Caps Lock switches between Latin and non-Latin input sources.
    CapsLockLanguageSwitchCapable => "TICapsLockLanguageSwitchCapable" {
        kind: Boolean,
        category: Localization,
        name: "Caps Lock language switch capable",
        platforms: Platform::ALL,
        description: "Whether Caps Lock switches between Latin and non-Latin input sources.",
    },
    /// The name of the bundle's HTML help file.
    AppleHelpAnchor => "CFAppleHelpAnchor" {
        kind: String,
        category: Help,
        name: "Help file",
        platforms: Platform::ALL,
        description: "The name of the bundle's HTML help file.",
    },
    /// The name of the help file that will be opened in Help Viewer.
    HelpBookName => "CFBundleHelpBookName" {
        kind: String,
        category: Help,
        name: "Help Book identifier",
        platforms: Platform::ALL,
        description: "The name of the help file that will be opened in Help Viewer.",
    },
    /// The name of the folder containing the bundle's help files.
    HelpBookFolder => "CFBundleHelpBookFolder" {
        kind: String,
        category: Help,
        name: "Help Book directory name",
        platforms: Platform::ALL,
        description: "The name of the folder containing the bundle's help files.",
    },
}

impl BundleKey {
    /// Read this key from `store`, cast to the declared type.
    ///
    /// Absence and a value of the wrong type both yield `None`.
    pub fn read<S: MetadataStore + ?Sized>(self, store: &S) -> Option<BundleValue> {
        store
            .value(self.as_str())
            .and_then(|raw| self.kind().cast(&raw))
    }

    /// True when the key is meaningful only on a subset of platforms.
    pub fn is_platform_restricted(self) -> bool {
        self.platforms().len() < Platform::ALL.len()
    }

    pub fn is_available_on(self, platform: Platform) -> bool {
        self.platforms().contains(&platform)
    }
}

impl std::fmt::Display for BundleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BundleKey {
    type Err = BundleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| BundleError::UnknownKey(s.to_string()))
    }
}

impl AsRef<str> for BundleKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_every_key_once() {
        assert_eq!(BundleKey::ALL.len(), 24);
        let strings: HashSet<_> = BundleKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(strings.len(), BundleKey::ALL.len());
    }

    #[test]
    fn from_key_inverts_as_str() {
        for key in BundleKey::ALL {
            assert_eq!(BundleKey::from_key(key.as_str()), Some(*key));
        }
        assert_eq!(BundleKey::from_key("CFBundleExecutable"), None);
        assert_eq!(BundleKey::from_key("cfbundleversion"), None);
    }

    #[test]
    fn parse_rejects_unknown_keys() {
        let err = "NSPrincipalClass".parse::<BundleKey>().unwrap_err();
        assert!(matches!(err, BundleError::UnknownKey(ref k) if k == "NSPrincipalClass"));
        assert_eq!(
            "LSRequiresIPhoneOS".parse::<BundleKey>().unwrap(),
            BundleKey::RequiresIPhoneOs
        );
    }

    #[test]
    fn boolean_keys() {
        let booleans: Vec<_> = BundleKey::ALL
            .iter()
            .filter(|k| k.kind() == ValueKind::Boolean)
            .map(|k| k.as_str())
            .collect();
        assert_eq!(
            booleans,
            vec![
                "LSRequiresIPhoneOS",
                "WKWatchKitApp",
                "CFBundleAllowMixedLocalizations",
                "TICapsLockLanguageSwitchCapable",
            ]
        );
    }

    #[test]
    fn platform_restrictions() {
        let restricted: Vec<_> = BundleKey::ALL
            .iter()
            .copied()
            .filter(|k| k.is_platform_restricted())
            .collect();
        assert_eq!(
            restricted,
            vec![
                BundleKey::CompanionBundleIdentifier,
                BundleKey::MinimumSystemVersionByArchitecture,
                BundleKey::MinimumOsVersion,
            ]
        );
        assert!(BundleKey::MinimumSystemVersionByArchitecture.is_available_on(Platform::MacOs));
        assert!(!BundleKey::MinimumOsVersion.is_available_on(Platform::MacOs));
        assert!(!BundleKey::CompanionBundleIdentifier.is_available_on(Platform::TvOs));
    }

    #[test]
    fn serde_uses_canonical_key() {
        let json = serde_json::to_string(&BundleKey::HelpBookFolder).unwrap();
        assert_eq!(json, "\"CFBundleHelpBookFolder\"");
        let key: BundleKey = serde_json::from_str("\"MinimumOSVersion\"").unwrap();
        assert_eq!(key, BundleKey::MinimumOsVersion);
    }

    #[test]
    fn categories() {
        assert_eq!(BundleKey::PackageType.category(), KeyCategory::Categorization);
        assert_eq!(BundleKey::HumanReadableCopyright.category(), KeyCategory::Versioning);
        assert_eq!(BundleKey::WatchKitApp.category(), KeyCategory::OperatingSystem);
        assert_eq!(BundleKey::HelpBookName.category(), KeyCategory::Help);
        assert_eq!(BundleKey::SpokenName.display_name(), "Accessibility Bundle Name");
        assert_eq!(
            BundleKey::SpokenName.description(),
            "A replacement for the app name in text-to-speech operations."
        );
        assert_eq!(
            BundleKey::DisplayName.description(),
            "The user-visible name for the bundle, used by Siri and visible on the iOS Home screen."
        );
        for key in BundleKey::ALL {
            assert!(!key.description().is_empty(), "key {key}");
        }
    }

    #[test]
    fn read_casts_to_declared_kind() {
        let store = serde_json::json!({
            "CFBundleVersion": "1",
            "WKWatchKitApp": "true",
        });
        assert_eq!(BundleKey::Version.read(&store), Some(BundleValue::from("1")));
        assert_eq!(BundleKey::WatchKitApp.read(&store), None);
        assert_eq!(BundleKey::BundleName.read(&store), None);
    }

    #[test]
    fn current_platform_matches_target() {
        if cfg!(target_os = "linux") || cfg!(target_os = "windows") {
            assert_eq!(Platform::current(), None);
        }
        if cfg!(target_os = "macos") {
            assert_eq!(Platform::current(), Some(Platform::MacOs));
        }
    }
}
