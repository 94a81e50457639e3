//! Checked views over foreign input and owned outbound buffers.
//!
//! Every foreign pointer is wrapped here, once, before the engine sees it:
//! null checks first, then a bounded read. Nothing in this module keeps a
//! reference to caller memory past the call that supplied it.
//!
//! Outbound buffers are allocated fallibly so allocation failure becomes a
//! status code instead of an abort. They are zeroed before being freed,
//! since they carry secret phrases.

use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;
use std::slice;

use seedbridge_primitives::{BridgeError, BridgeResult, StatusCode};
use zeroize::Zeroize;

/// Owned, length-prefixed byte buffer returned to the foreign caller.
///
/// Not NUL-terminated. The caller owns it until it passes it back to
/// `seedbridge_buffer_release`. `{ ptr: null, len: 0 }` is the empty
/// buffer written on failure.
#[repr(C)]
#[derive(Debug)]
pub struct SeedbridgeBuffer {
    pub ptr: *mut u8,
    pub len: usize,
}

impl SeedbridgeBuffer {
    pub const fn empty() -> Self {
        Self {
            ptr: ptr::null_mut(),
            len: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ptr.is_null() || self.len == 0
    }

    /// Copy `bytes` into a new adapter-owned allocation.
    pub fn from_bytes(bytes: &[u8]) -> BridgeResult<Self> {
        Self::copy_with(bytes, try_alloc)
    }

    fn copy_with(
        bytes: &[u8],
        alloc: fn(usize) -> BridgeResult<Vec<u8>>,
    ) -> BridgeResult<Self> {
        let mut owned = alloc(bytes.len())?;
        owned.extend_from_slice(bytes);
        let len = owned.len();
        let ptr = Box::into_raw(owned.into_boxed_slice()) as *mut u8;
        Ok(Self { ptr, len })
    }

    /// View the contents.
    ///
    /// # Safety
    /// The buffer must not have been released.
    pub unsafe fn as_slice(&self) -> &[u8] {
        if self.is_empty() {
            return &[];
        }
        slice::from_raw_parts(self.ptr, self.len)
    }

    /// Zero and free the allocation. The empty buffer is a no-op.
    ///
    /// # Safety
    /// - The buffer must come from [`SeedbridgeBuffer::from_bytes`]
    /// - `ptr` and `len` must be unmodified
    /// - Must not be called twice on the same buffer
    pub unsafe fn release(self) {
        if self.is_empty() {
            return;
        }
        let mut owned: Box<[u8]> = Box::from_raw(ptr::slice_from_raw_parts_mut(self.ptr, self.len));
        owned[..].zeroize();
    }
}

fn try_alloc(len: usize) -> BridgeResult<Vec<u8>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len).map_err(|_| {
        log::error!("outbound allocation of {} bytes failed", len);
        BridgeError::Allocation(len)
    })?;
    Ok(buf)
}

/// Copy `text` into a new NUL-terminated, adapter-owned C string.
///
/// Ownership passes to the caller; free with [`release_c_string`].
pub fn into_c_string(text: &str) -> BridgeResult<*mut c_char> {
    let len = text.len() + 1;
    let mut owned = try_alloc(len)?;
    owned.extend_from_slice(text.as_bytes());
    owned.push(0);
    match CString::from_vec_with_nul(owned) {
        Ok(cstring) => Ok(cstring.into_raw()),
        Err(err) => {
            err.into_bytes().zeroize();
            Err(BridgeError::Internal("interior NUL in outbound text".into()))
        }
    }
}

/// Zero and free a string produced by [`into_c_string`]. Null is a no-op.
///
/// # Safety
/// - `raw` must come from [`into_c_string`] and be unmodified
/// - Must not be called twice on the same pointer
pub unsafe fn release_c_string(raw: *mut c_char) {
    if raw.is_null() {
        return;
    }
    let mut bytes = CString::from_raw(raw).into_bytes_with_nul();
    bytes.zeroize();
}

/// Borrow a NUL-terminated foreign string, reading at most `limit + 1`
/// bytes.
///
/// Returns `None` for null. A string longer than `limit` is returned
/// truncated to `limit + 1` bytes, so the caller's length check still
/// trips without the scan ever walking past the bound.
///
/// # Safety
/// A non-null `raw` must point to readable memory that is either
/// NUL-terminated or at least `limit + 1` bytes long, and must stay valid
/// for the rest of the call.
pub unsafe fn c_str_input<'a>(raw: *const c_char, limit: usize) -> Option<&'a [u8]> {
    if raw.is_null() {
        return None;
    }
    let bytes = raw as *const u8;
    let mut len = 0;
    while len <= limit && *bytes.add(len) != 0 {
        len += 1;
    }
    Some(slice::from_raw_parts(bytes, len))
}

/// Borrow a length-prefixed foreign buffer.
///
/// `(null, 0)` is absent input. `(null, n > 0)` and lengths beyond
/// `isize::MAX` are rejected as `BadPointer`.
///
/// # Safety
/// A non-null `raw` must point to `len` readable bytes that stay valid
/// for the rest of the call.
pub unsafe fn raw_input<'a>(raw: *const u8, len: usize) -> Result<Option<&'a [u8]>, StatusCode> {
    if raw.is_null() {
        return if len == 0 {
            Ok(None)
        } else {
            Err(StatusCode::BadPointer)
        };
    }
    if len > isize::MAX as usize {
        return Err(StatusCode::BadPointer);
    }
    Ok(Some(slice::from_raw_parts(raw, len)))
}
