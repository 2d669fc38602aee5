//! Build number accessor
//!
//! Two strategies sit behind [`BuildNumberSource`]: the platform property store
//! on Android, and the linked placeholder slot everywhere else. The choice is
//! fixed per compilation target.

pub mod placeholder;
pub mod property;

pub use placeholder::{
    PlaceholderSlot, PlaceholderSource, PLACEHOLDER_CAPACITY, PLACEHOLDER_SENTINEL,
    PLACEHOLDER_SYMBOL,
};
#[cfg(target_os = "android")]
pub use property::SystemProperties;
pub use property::{MemoryPropertyStore, PropertySource, PropertyStore, BUILD_NUMBER_PROPERTY};

/// Anything able to produce the build number string
pub trait BuildNumberSource {
    /// Returns the build number, or an empty string when none is available
    fn build_number(&self) -> String;
}

impl<T: BuildNumberSource + ?Sized> BuildNumberSource for &T {
    fn build_number(&self) -> String {
        (**self).build_number()
    }
}

/// The source this target reads from: the system property store
#[cfg(target_os = "android")]
pub fn default_source() -> PropertySource<SystemProperties> {
    PropertySource::new(SystemProperties)
}

/// The source this target reads from: the linked placeholder slot
#[cfg(not(target_os = "android"))]
pub fn default_source() -> PlaceholderSource<'static> {
    PlaceholderSource::linked()
}

/// Build number of the running artifact.
///
/// Never fails. Returns `""` when the property is unset, and the sentinel when
/// packaging did not overwrite the placeholder slot.
pub fn get_build_number() -> String {
    default_source().build_number()
}

/// True when `value` is the untouched placeholder sentinel
pub fn is_placeholder(value: &str) -> bool {
    value == PLACEHOLDER_SENTINEL
}
