//! Property store seam
//!
//! Lookup by name returns a handle; the value is only ever seen inside a read
//! callback, which is how bionic hands out a consistent snapshot while other
//! processes may be updating the same property.

use super::BuildNumberSource;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Property holding the incremental build number on Android
pub const BUILD_NUMBER_PROPERTY: &str = "ro.build.version.incremental";

/// Key/value runtime configuration store queried by name
pub trait PropertyStore {
    type Handle;

    /// Handle for `name`, or `None` when the property does not exist
    fn find(&self, name: &str) -> Option<Self::Handle>;

    /// Invoke `callback(name, value, serial)` with a snapshot of the property
    fn read(&self, handle: &Self::Handle, callback: &mut dyn FnMut(&str, &str, u32));
}

impl<S: PropertyStore + ?Sized> PropertyStore for &S {
    type Handle = S::Handle;

    fn find(&self, name: &str) -> Option<Self::Handle> {
        (**self).find(name)
    }

    fn read(&self, handle: &Self::Handle, callback: &mut dyn FnMut(&str, &str, u32)) {
        (**self).read(handle, callback)
    }
}

/// Reads the build number from [`BUILD_NUMBER_PROPERTY`]
#[derive(Debug, Clone)]
pub struct PropertySource<S> {
    store: S,
}

impl<S: PropertyStore> PropertySource<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: PropertyStore> BuildNumberSource for PropertySource<S> {
    fn build_number(&self) -> String {
        let Some(handle) = self.store.find(BUILD_NUMBER_PROPERTY) else {
            log::trace!("Property {} is not set", BUILD_NUMBER_PROPERTY);
            return String::new();
        };

        let mut value = String::new();
        let mut capture = |_name: &str, current: &str, serial: u32| {
            log::trace!("Read {} (serial {})", BUILD_NUMBER_PROPERTY, serial);
            value = current.to_string();
        };
        self.store.read(&handle, &mut capture);
        value
    }
}

#[derive(Debug, Clone)]
struct PropertyEntry {
    value: String,
    serial: u32,
}

/// In-process property store
///
/// Stands in for the system store on hosts and in tests. Every write bumps the
/// property's serial, as bionic does.
#[derive(Debug, Default)]
pub struct MemoryPropertyStore {
    entries: RwLock<HashMap<String, PropertyEntry>>,
}

impl MemoryPropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or update a property
    pub fn set(&self, name: impl Into<String>, value: impl Into<String>) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let value = value.into();
        entries
            .entry(name.into())
            .and_modify(|entry| {
                entry.value = value.clone();
                entry.serial = entry.serial.wrapping_add(1);
            })
            .or_insert(PropertyEntry { value, serial: 0 });
    }

    /// Delete a property, returning its last value
    pub fn remove(&self, name: &str) -> Option<String> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.remove(name).map(|entry| entry.value)
    }

    /// Serial of a property, if present
    pub fn serial(&self, name: &str) -> Option<u32> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(name).map(|entry| entry.serial)
    }
}

impl PropertyStore for MemoryPropertyStore {
    type Handle = String;

    fn find(&self, name: &str) -> Option<String> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.contains_key(name).then(|| name.to_string())
    }

    fn read(&self, handle: &String, callback: &mut dyn FnMut(&str, &str, u32)) {
        // The callback runs under the read lock so writers cannot tear the value
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(entry) = entries.get(handle) {
            callback(handle, &entry.value, entry.serial);
        }
    }
}

#[cfg(target_os = "android")]
pub use system::{SystemProperties, SystemPropertyHandle};

#[cfg(target_os = "android")]
mod system {
    use super::PropertyStore;
    use libc::{c_char, c_void};
    use std::borrow::Cow;
    use std::ffi::{CStr, CString};
    use std::ptr::NonNull;

    #[repr(C)]
    pub struct PropInfo {
        _private: [u8; 0],
    }

    type ReadCallback = unsafe extern "C" fn(
        cookie: *mut c_void,
        name: *const c_char,
        value: *const c_char,
        serial: u32,
    );

    extern "C" {
        fn __system_property_find(name: *const c_char) -> *const PropInfo;
        fn __system_property_read_callback(
            pi: *const PropInfo,
            callback: ReadCallback,
            cookie: *mut c_void,
        );
    }

    /// bionic's system property area
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemProperties;

    /// Pointer to a `prop_info`; bionic never frees these
    #[derive(Debug, Clone, Copy)]
    pub struct SystemPropertyHandle(NonNull<PropInfo>);

    type Forward<'a> = &'a mut dyn FnMut(&str, &str, u32);

    unsafe fn lossy<'a>(text: *const c_char) -> Cow<'a, str> {
        if text.is_null() {
            Cow::Borrowed("")
        } else {
            CStr::from_ptr(text).to_string_lossy()
        }
    }

    unsafe extern "C" fn forward_property(
        cookie: *mut c_void,
        name: *const c_char,
        value: *const c_char,
        serial: u32,
    ) {
        let callback = &mut *(cookie as *mut Forward<'_>);
        callback(&lossy(name), &lossy(value), serial);
    }

    impl PropertyStore for SystemProperties {
        type Handle = SystemPropertyHandle;

        fn find(&self, name: &str) -> Option<SystemPropertyHandle> {
            let name = CString::new(name).ok()?;
            // SAFETY: `name` is a valid NUL-terminated string for the call's duration
            let info = unsafe { __system_property_find(name.as_ptr()) };
            NonNull::new(info as *mut PropInfo).map(SystemPropertyHandle)
        }

        fn read(&self, handle: &SystemPropertyHandle, callback: &mut dyn FnMut(&str, &str, u32)) {
            let mut forward: Forward<'_> = callback;
            let cookie = &mut forward as *mut Forward<'_> as *mut c_void;
            // SAFETY: the handle came from __system_property_find and the cookie
            // outlives the synchronous callback invocation
            unsafe { __system_property_read_callback(handle.0.as_ptr(), forward_property, cookie) };
        }
    }
}
