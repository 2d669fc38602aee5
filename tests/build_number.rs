//! Build number accessor scenarios through the public API

use buildversion::inject::{inject_build_number, slot_image, InjectRequest};
use buildversion::provider::{
    BuildNumberSource, MemoryPropertyStore, PlaceholderSlot, PlaceholderSource, PropertySource,
    BUILD_NUMBER_PROPERTY, PLACEHOLDER_CAPACITY, PLACEHOLDER_SENTINEL,
};
use buildversion::{get_build_number, is_placeholder};

#[test]
fn test_property_absent_returns_empty() {
    let store = MemoryPropertyStore::new();
    assert_eq!(PropertySource::new(&store).build_number(), "");
}

#[test]
fn test_property_present_returns_value() {
    let store = MemoryPropertyStore::new();
    store.set("ro.build.version.incremental", "1234567");
    let source = PropertySource::new(&store);

    assert_eq!(source.build_number(), "1234567");
    assert_eq!(source.build_number(), "1234567");
    assert_eq!(BUILD_NUMBER_PROPERTY, "ro.build.version.incremental");
}

#[test]
fn test_untouched_placeholder_returns_sentinel() {
    static SLOT: PlaceholderSlot = PlaceholderSlot::new(PLACEHOLDER_SENTINEL);

    let value = PlaceholderSource::new(&SLOT).build_number();
    assert_eq!(value, "SOONG BUILD NUMBER PLACEHOLDER");
    assert!(is_placeholder(&value));
}

#[test]
fn test_overwritten_placeholder_returns_new_value() {
    // Tooling rewrites the slot bytes; a slot built from those bytes reads back the same
    let mut image = slot_image(PLACEHOLDER_SENTINEL, PLACEHOLDER_CAPACITY);
    inject_build_number(&mut image, &InjectRequest::new("eng.user.20240101")).unwrap();
    let text = String::from_utf8(image).unwrap();
    let slot = PlaceholderSlot::new(text.trim_end_matches('\0'));

    let value = PlaceholderSource::new(&slot).build_number();
    assert_eq!(value, "eng.user.20240101");
    assert!(!is_placeholder(&value));
}

#[cfg(not(target_os = "android"))]
#[test]
fn test_test_binary_slot_is_untouched() {
    assert_eq!(get_build_number(), PLACEHOLDER_SENTINEL);
}
