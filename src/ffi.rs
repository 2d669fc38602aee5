//! C ABI for binaries and shared libraries not written in Rust

use crate::core::version::get_abi_version;
use crate::provider::get_build_number;
use libc::{c_char, size_t};

/// Copy the build number into `buf` as a NUL-terminated string.
///
/// Writes at most `len - 1` bytes followed by a NUL. Returns the full length of
/// the build number, so a return value `>= len` means the copy was truncated.
/// Passing a null `buf` or a zero `len` only reports the length.
///
/// # Safety
///
/// `buf` must be null or point to at least `len` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn buildversion_get_build_number(buf: *mut c_char, len: size_t) -> size_t {
    copy_to_c_buffer(&get_build_number(), buf, len)
}

/// Version of this C ABI
#[no_mangle]
pub extern "C" fn buildversion_abi_version() -> u32 {
    get_abi_version()
}

unsafe fn copy_to_c_buffer(value: &str, buf: *mut c_char, len: size_t) -> size_t {
    let bytes = value.as_bytes();
    if !buf.is_null() && len > 0 {
        let copied = bytes.len().min(len - 1);
        std::ptr::copy_nonoverlapping(bytes.as_ptr(), buf.cast::<u8>(), copied);
        *buf.add(copied) = 0;
    }
    bytes.len()
}
