//! Placeholder slot linked into every host artifact
//!
//! Packaging tooling finds the slot by its initial byte image and overwrites it
//! in the output file. Nothing writes to it at runtime.

use super::BuildNumberSource;

/// Value the slot holds until packaging replaces it
pub const PLACEHOLDER_SENTINEL: &str = "SOONG BUILD NUMBER PLACEHOLDER";

/// Slot size in bytes, including the NUL terminator
pub const PLACEHOLDER_CAPACITY: usize = 128;

/// Linker symbol the slot is exported under
pub const PLACEHOLDER_SYMBOL: &str = "soong_build_number";

/// Fixed-size, NUL-terminated build number buffer
#[repr(transparent)]
pub struct PlaceholderSlot([u8; PLACEHOLDER_CAPACITY]);

impl PlaceholderSlot {
    /// Slot holding `initial`, truncated to `PLACEHOLDER_CAPACITY - 1` bytes
    pub const fn new(initial: &str) -> Self {
        let bytes = initial.as_bytes();
        let mut buffer = [0u8; PLACEHOLDER_CAPACITY];
        let mut i = 0;
        while i < bytes.len() && i < PLACEHOLDER_CAPACITY - 1 {
            buffer[i] = bytes[i];
            i += 1;
        }
        Self(buffer)
    }

    /// Current contents up to the first NUL
    pub fn value(&self) -> String {
        // SAFETY: `self.0` is a valid, aligned, initialised array. The volatile
        // load keeps the compiler from folding the initial image into callers,
        // since the linked copy is rewritten after compilation.
        let bytes = unsafe { std::ptr::read_volatile(&self.0) };
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        String::from_utf8_lossy(&bytes[..end]).into_owned()
    }
}

impl std::fmt::Debug for PlaceholderSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PlaceholderSlot").field(&self.value()).finish()
    }
}

#[used]
#[export_name = "soong_build_number"]
static LINKED_SLOT: PlaceholderSlot = PlaceholderSlot::new(PLACEHOLDER_SENTINEL);

/// Reads the build number out of a placeholder slot
#[derive(Debug, Clone, Copy)]
pub struct PlaceholderSource<'a> {
    slot: &'a PlaceholderSlot,
}

impl<'a> PlaceholderSource<'a> {
    pub fn new(slot: &'a PlaceholderSlot) -> Self {
        Self { slot }
    }
}

impl PlaceholderSource<'static> {
    /// Source over the slot linked into this artifact
    pub fn linked() -> Self {
        Self::new(&LINKED_SLOT)
    }
}

impl BuildNumberSource for PlaceholderSource<'_> {
    fn build_number(&self) -> String {
        self.slot.value()
    }
}
