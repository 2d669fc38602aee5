//! Build number injection into linked artifacts
//!
//! The placeholder slot is located by its initial byte image (the expected
//! value followed by NUL padding up to the slot capacity) and rewritten in
//! place. Object-file symbol tables are not consulted: a slot image is
//! distinctive enough, and it must occur exactly once.

pub mod error;

pub use error::{InjectError, InjectResult};

use crate::provider::{PLACEHOLDER_CAPACITY, PLACEHOLDER_SENTINEL, PLACEHOLDER_SYMBOL};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// What to replace, and with what
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectRequest {
    /// Value the slot is expected to hold now
    pub from: String,
    /// Build number to write
    pub value: String,
    /// Slot size in bytes, including the NUL terminator
    pub capacity: usize,
}

impl InjectRequest {
    /// Replace the untouched sentinel in a default-sized slot
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            from: PLACEHOLDER_SENTINEL.to_string(),
            value: value.into(),
            capacity: PLACEHOLDER_CAPACITY,
        }
    }

    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = from.into();
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

/// Bytes of a slot of `capacity` bytes freshly initialised with `initial`
pub fn slot_image(initial: &str, capacity: usize) -> Vec<u8> {
    let mut image = vec![0u8; capacity];
    let len = initial.len().min(capacity.saturating_sub(1));
    image[..len].copy_from_slice(&initial.as_bytes()[..len]);
    image
}

fn check_slot_text(text: &str, capacity: usize, what: &str) -> InjectResult<()> {
    if text.is_empty() {
        return Err(InjectError::invalid(format!("{} is empty", what)));
    }
    if text.contains('\0') {
        return Err(InjectError::invalid(format!("{} contains a NUL byte", what)));
    }
    let max = capacity.saturating_sub(1);
    if text.len() > max {
        return Err(InjectError::ValueTooLong {
            len: text.len(),
            max,
        });
    }
    Ok(())
}

/// Offset of the single slot in `image` currently holding `from`
pub fn find_slot(image: &[u8], from: &str, capacity: usize) -> InjectResult<usize> {
    check_slot_text(from, capacity, "slot value to search for")?;

    let needle = slot_image(from, capacity);
    let mut offsets = image
        .windows(needle.len())
        .enumerate()
        .filter(|(_, window)| *window == needle.as_slice())
        .map(|(offset, _)| offset);

    let first = offsets.next().ok_or_else(|| InjectError::SlotNotFound {
        from: from.to_string(),
    })?;
    if let Some(second) = offsets.next() {
        return Err(InjectError::AmbiguousSlot {
            from: from.to_string(),
            first,
            second,
        });
    }

    log::trace!("Slot holding '{}' at offset {:#x}", from, first);
    Ok(first)
}

/// Rewrite the slot in `image`, returning its offset
pub fn inject_build_number(image: &mut [u8], request: &InjectRequest) -> InjectResult<usize> {
    check_slot_text(&request.value, request.capacity, "build number")?;

    let offset = find_slot(image, &request.from, request.capacity)?;
    let replacement = slot_image(&request.value, request.capacity);
    image[offset..offset + request.capacity].copy_from_slice(&replacement);

    log::debug!(
        "Injected build number '{}' into {} at offset {:#x}",
        request.value,
        PLACEHOLDER_SYMBOL,
        offset
    );
    Ok(offset)
}

/// Read `input`, inject, and write the result to `output`
///
/// `output` may be the same path as `input`. The new image is written to a
/// temporary file beside `output` and renamed over it, so `output` holds either
/// its previous contents or the complete new image. The output keeps the
/// input's permissions so executables stay executable.
pub fn inject_file(input: &Path, output: &Path, request: &InjectRequest) -> InjectResult<usize> {
    let mut image = fs::read(input).map_err(|e| InjectError::io(input, e))?;
    let permissions = fs::metadata(input)
        .map_err(|e| InjectError::io(input, e))?
        .permissions();

    let offset = inject_build_number(&mut image, request)?;
    replace_file(output, &image, permissions)?;

    log::info!(
        "Wrote {} with build number '{}'",
        output.display(),
        request.value
    );
    Ok(offset)
}

// Write to a sibling temp file, then rename onto `path`
fn replace_file(path: &Path, contents: &[u8], permissions: fs::Permissions) -> InjectResult<()> {
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut staged = NamedTempFile::new_in(dir).map_err(|e| InjectError::io(dir, e))?;
    staged
        .write_all(contents)
        .and_then(|()| staged.as_file().sync_all())
        .map_err(|e| InjectError::io(staged.path(), e))?;
    staged
        .as_file()
        .set_permissions(permissions)
        .map_err(|e| InjectError::io(staged.path(), e))?;

    log::trace!("Renaming {} onto {}", staged.path().display(), path.display());
    staged
        .persist(path)
        .map_err(|e| InjectError::io(path, e.error))?;
    Ok(())
}

/// Locate the slot holding `from` in the artifact at `path`
pub fn locate_in_file(path: &Path, from: &str, capacity: usize) -> InjectResult<usize> {
    let image = fs::read(path).map_err(|e| InjectError::io(path, e))?;
    find_slot(&image, from, capacity)
}

/// Build number stored in a file, surrounding whitespace removed
pub fn read_value_file(path: &Path) -> InjectResult<String> {
    let contents = fs::read_to_string(path).map_err(|e| InjectError::io(path, e))?;
    let value = contents.trim();
    if value.is_empty() {
        return Err(InjectError::invalid(format!(
            "{} does not contain a build number",
            path.display()
        )));
    }
    Ok(value.to_string())
}
