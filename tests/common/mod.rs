//! Shared helpers for integration tests

use buildversion::inject::slot_image;
use buildversion::provider::{PLACEHOLDER_CAPACITY, PLACEHOLDER_SENTINEL};
use std::path::Path;

/// Write a fake artifact holding one untouched slot; returns the slot offset
pub fn write_fake_artifact(path: &Path) -> usize {
    let mut image = b"\x7fELF\x02\x01\x01 fake header".to_vec();
    image.extend(std::iter::repeat(0x90u8).take(512));
    let offset = image.len();
    image.extend(slot_image(PLACEHOLDER_SENTINEL, PLACEHOLDER_CAPACITY));
    image.extend(b".rodata trailer");
    std::fs::write(path, image).expect("write fake artifact");
    offset
}
