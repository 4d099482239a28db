//! Accessor behavior against the fixed test double.

#[path = "support/fixture.rs"]
mod support;

use bundle_manager::{BundleKey, BundleManager, BundleValue, EmptyStore, ValueKind};
use serde_json::json;

fn manager() -> BundleManager {
    BundleManager::with_store(support::test_bundle())
}

#[test]
fn categorization() {
    let m = manager();
    assert_eq!(m.package_type().as_deref(), Some("TEST"));
    assert_eq!(m.application_category_type().as_deref(), Some("TESTBUNDLE"));
}

#[test]
fn identification() {
    let m = manager();
    assert_eq!(m.bundle_identifier(), support::IDENTIFIER);
    assert_eq!(
        m.watch_bundle_identifier().as_deref(),
        Some("ch.christianseiler.wkbundle.test")
    );
    assert_eq!(
        m.companion_bundle_identifier().as_deref(),
        Some("ch.christianseiler.wkbundle.companion.test")
    );
}

#[test]
fn naming() {
    let m = manager();
    assert_eq!(m.bundle_name().as_deref(), Some("XCTestBundle"));
    assert_eq!(m.display_name().as_deref(), Some("TestBundle"));
    assert_eq!(m.spoken_name().as_deref(), Some("Test Bundle"));
}

#[test]
fn versioning() {
    let m = manager();
    assert_eq!(m.version().as_deref(), Some("1"));
    assert_eq!(m.short_version_string().as_deref(), Some("1.2.3"));
    assert_eq!(m.info_dictionary_version().as_deref(), Some("6"));
    assert_eq!(
        m.human_readable_copyright().as_deref(),
        Some("Copyright 2020 Christian Seiler Services")
    );
}

#[test]
fn operating_system() {
    let m = manager();
    assert_eq!(m.minimum_system_version().as_deref(), Some("10"));
    assert_eq!(m.minimum_system_version_by_architecture().as_deref(), Some("11"));
    assert_eq!(m.minimum_os_version().as_deref(), Some("12"));
    assert_eq!(m.requires_iphone_os(), Some(true));
    assert_eq!(m.watch_kit_app(), Some(true));
}

#[test]
fn localization() {
    let m = manager();
    assert_eq!(m.development_region().as_deref(), Some("en"));
    assert_eq!(m.localizations().as_deref(), Some("en,de"));
    assert_eq!(m.allow_mixed_localizations(), Some(true));
    assert_eq!(m.caps_lock_language_switch_capable(), Some(true));
}

#[test]
fn help() {
    let m = manager();
    assert_eq!(m.apple_help_anchor().as_deref(), Some("Help_Anchor"));
    assert_eq!(m.help_book_name().as_deref(), Some("HelpBook"));
    assert_eq!(m.help_book_folder().as_deref(), Some("./help"));
}

#[test]
fn generic_value_matches_stored_value_for_every_key() {
    let fixture = support::test_bundle();
    let m = manager();
    for key in BundleKey::ALL {
        let expected = match (key.kind(), &fixture[key.as_str()]) {
            (ValueKind::String, serde_json::Value::String(s)) => BundleValue::String(s.clone()),
            (ValueKind::Boolean, serde_json::Value::Bool(b)) => BundleValue::Boolean(*b),
            (kind, other) => panic!("fixture value for {key} is not a {kind}: {other}"),
        };
        assert_eq!(m.value(*key), Some(expected), "key {key}");
    }
}

#[test]
fn empty_store_reads_nothing_but_identifier_default() {
    let m = BundleManager::with_store(EmptyStore);
    assert_eq!(m.bundle_identifier(), "");
    for key in BundleKey::ALL {
        assert_eq!(m.value(*key), None, "key {key}");
    }

    let info = m.info();
    assert_eq!(info.bundle_identifier, "");
    assert_eq!(info.package_type, None);
    assert_eq!(info.help_book_folder, None);
    assert_eq!(serde_json::to_value(&info).unwrap(), json!({ "CFBundleIdentifier": "" }));
}

#[test]
fn null_store_is_legal() {
    let m = BundleManager::with_store(None::<serde_json::Value>);
    assert_eq!(m.bundle_identifier(), "");
    assert_eq!(m.version(), None);
}

#[test]
fn every_key_with_wrong_type_reads_as_none() {
    let mut swapped = serde_json::Map::new();
    for key in BundleKey::ALL {
        let wrong = match key.kind() {
            ValueKind::String => json!(123),
            ValueKind::Boolean => json!("true"),
        };
        swapped.insert(key.as_str().to_string(), wrong);
    }
    let m = BundleManager::with_store(swapped);

    for key in BundleKey::ALL {
        assert_eq!(m.value(*key), None, "key {key}");
    }
    assert_eq!(m.bundle_identifier(), "");
    assert_eq!(m.version(), None);
    assert_eq!(m.requires_iphone_os(), None);
}

#[test]
fn numeric_version_reads_as_none() {
    let m = BundleManager::with_store(json!({ "CFBundleVersion": 123 }));
    assert_eq!(m.version(), None);
}

#[test]
fn unrelated_keys_are_ignored() {
    let m = BundleManager::with_store(json!({
        "CFBundleExecutable": "demo",
        "NSPrincipalClass": "NSApplication",
    }));
    assert_eq!(m.info(), bundle_manager::BundleInfo::default());
}

#[test]
fn repeated_reads_agree() {
    let m = manager();
    assert_eq!(m.info(), m.info());
    assert_eq!(m.display_name(), m.display_name());
    assert_eq!(m.watch_kit_app(), m.watch_kit_app());
}

#[test]
fn snapshot_matches_fixture() {
    let info = manager().info();
    assert_eq!(serde_json::to_value(&info).unwrap(), support::test_bundle());
}
