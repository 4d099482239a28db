//! Fixed test double: a fully populated information dictionary.

#![allow(dead_code)]

use serde_json::{Value, json};

pub const IDENTIFIER: &str = "ch.christianseiler.bundle.test";

/// Every catalog key with a correctly typed value.
pub fn test_bundle() -> Value {
    json!({
        // Categorization
        "CFBundlePackageType": "TEST",
        "LSApplicationCategoryType": "TESTBUNDLE",

        // Identification
        "CFBundleIdentifier": IDENTIFIER,
        "WKAppBundleIdentifier": "ch.christianseiler.wkbundle.test",
        "WKCompanionAppBundleIdentifier": "ch.christianseiler.wkbundle.companion.test",

        // Naming
        "CFBundleName": "XCTestBundle",
        "CFBundleDisplayName": "TestBundle",
        "CFBundleSpokenName": "Test Bundle",

        // Versioning
        "CFBundleVersion": "1",
        "CFBundleShortVersionString": "1.2.3",
        "CFBundleInfoDictionaryVersion": "6",
        "NSHumanReadableCopyright": "Copyright 2020 Christian Seiler Services",

        // Operating system
        "LSMinimumSystemVersion": "10",
        "LSMinimumSystemVersionByArchitecture": "11",
        "MinimumOSVersion": "12",
        "LSRequiresIPhoneOS": true,
        "WKWatchKitApp": true,

        // Localization
        "CFBundleDevelopmentRegion": "en",
        "CFBundleLocalizations": "en,de",
        "CFBundleAllowMixedLocalizations": true,
        "TICapsLockLanguageSwitchCapable": true,

        // Help
        "CFAppleHelpAnchor": "Help_Anchor",
        "CFBundleHelpBookName": "HelpBook",
        "CFBundleHelpBookFolder": "./help"
    })
}

/// The test double converted to a property list dictionary.
pub fn test_bundle_plist() -> plist::Value {
    let mut dict = plist::Dictionary::new();
    if let Value::Object(map) = test_bundle() {
        for (key, value) in map {
            let value = match value {
                Value::String(s) => plist::Value::String(s),
                Value::Bool(b) => plist::Value::Boolean(b),
                other => panic!("fixture holds only strings and booleans, got {other}"),
            };
            dict.insert(key, value);
        }
    }
    plist::Value::Dictionary(dict)
}
