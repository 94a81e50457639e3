//! Exported C functions.
//!
//! - `seedbridge_api_version` — ABI version handshake
//! - `seedbridge_generate_phrase` / `seedbridge_release` — NUL-terminated
//!   phrase, null on failure
//! - `seedbridge_generate_phrase_ex` / `seedbridge_buffer_release` —
//!   length-prefixed phrase with an out-of-band status code
//! - `seedbridge_validate_phrase` — BIP-39 wordlist and checksum check
//! - `seedbridge_status_message` — static name for a status code
//!
//! Status-returning functions return `i32` codes (0 = OK). No function
//! unwinds across the boundary: every body runs under `catch_unwind` and
//! a caught panic becomes the failure sentinel.

use std::os::raw::c_char;
use std::panic::{self, AssertUnwindSafe};
use std::ptr;

use seedbridge_engine::{
    check_phrase, AdapterConfig, MalformedInputPolicy, OsEntropy, PhraseGenerator,
};
use seedbridge_primitives::{BridgeError, Language, StatusCode, API_VERSION};

use crate::boundary::{self, SeedbridgeBuffer};

/// `seedbridge_generate_phrase_ex` flag: fail with `ERR_INVALID_ENCODING`
/// on malformed input instead of substituting the defaults.
pub const SEEDBRIDGE_FLAG_STRICT: u32 = 1;

/// Longest language selector read by `seedbridge_validate_phrase`.
const MAX_LANGUAGE_LEN: usize = 16;

/// Run `body`, mapping a panic to `fallback`.
fn guard<T>(fallback: T, body: impl FnOnce() -> T) -> T {
    match panic::catch_unwind(AssertUnwindSafe(body)) {
        Ok(value) => value,
        Err(_) => {
            log::error!("panic caught at the C boundary");
            fallback
        }
    }
}

/// ABI version. Callers should refuse to proceed on a mismatch.
#[no_mangle]
pub extern "C" fn seedbridge_api_version() -> u32 {
    API_VERSION
}

/// Generate a mnemonic phrase.
///
/// `input` is a NUL-terminated UTF-8 request: a word count (12, 15, 18,
/// 21 or 24) optionally followed by a language code, e.g. `"24 fr"`.
/// Null or empty input generates 12 English words. Malformed input
/// (not UTF-8, not a number, over 64 bytes) also generates 12 English
/// words.
///
/// # Returns
/// An adapter-owned NUL-terminated phrase the caller MUST pass to
/// `seedbridge_release`, or null if the word count or language is
/// invalid, the entropy source failed, or allocation failed.
///
/// # Safety
/// A non-null `input` must be NUL-terminated (or at least 65 readable
/// bytes long). The adapter does not retain or free it.
#[no_mangle]
pub unsafe extern "C" fn seedbridge_generate_phrase(input: *const c_char) -> *mut c_char {
    guard(ptr::null_mut(), || {
        let config = AdapterConfig::default();
        let request = boundary::c_str_input(input, config.max_input_len);

        let outcome = PhraseGenerator::generate_from_input(request, &config, &mut OsEntropy)
            .and_then(|result| boundary::into_c_string(result.phrase()));

        match outcome {
            Ok(phrase) => phrase,
            Err(err) => {
                log::debug!("seedbridge_generate_phrase failed: {}", err);
                ptr::null_mut()
            }
        }
    })
}

/// Release a phrase returned by `seedbridge_generate_phrase`.
///
/// The memory is zeroed before it is freed. Null is a no-op.
///
/// # Safety
/// - `phrase` must come from `seedbridge_generate_phrase` and be unmodified
/// - Must not be called twice on the same pointer
/// - No other thread may be reading `phrase`
#[no_mangle]
pub unsafe extern "C" fn seedbridge_release(phrase: *mut c_char) {
    guard((), || boundary::release_c_string(phrase))
}

/// Generate a mnemonic phrase into a length-prefixed buffer.
///
/// Same request grammar as `seedbridge_generate_phrase`, read from
/// `input[0..input_len]` (no NUL needed). `(null, 0)` means defaults.
/// With `SEEDBRIDGE_FLAG_STRICT` set, malformed input fails with
/// `ERR_INVALID_ENCODING`. Other flag bits are reserved and ignored.
///
/// # Returns
/// 0 on success, with `*out` holding a buffer the caller MUST pass to
/// `seedbridge_buffer_release`. Non-zero on failure, with `*out` set to
/// `{ null, 0 }`.
///
/// # Safety
/// - A non-null `input` must point to `input_len` readable bytes
/// - A non-null `out` must be valid for a write of `SeedbridgeBuffer`
#[no_mangle]
pub unsafe extern "C" fn seedbridge_generate_phrase_ex(
    input: *const u8,
    input_len: usize,
    flags: u32,
    out: *mut SeedbridgeBuffer,
) -> i32 {
    if out.is_null() {
        return StatusCode::BadPointer as i32;
    }
    ptr::write(out, SeedbridgeBuffer::empty());

    guard(StatusCode::Internal as i32, || {
        let request = match boundary::raw_input(input, input_len) {
            Ok(request) => request,
            Err(code) => return code as i32,
        };

        let policy = if flags & SEEDBRIDGE_FLAG_STRICT != 0 {
            MalformedInputPolicy::Reject
        } else {
            MalformedInputPolicy::Substitute
        };
        let config = AdapterConfig::default().with_policy(policy);

        let outcome = PhraseGenerator::generate_from_input(request, &config, &mut OsEntropy)
            .and_then(|result| SeedbridgeBuffer::from_bytes(result.phrase().as_bytes()));

        match outcome {
            Ok(buffer) => {
                ptr::write(out, buffer);
                StatusCode::Ok as i32
            }
            Err(err) => {
                log::debug!("seedbridge_generate_phrase_ex failed: {}", err);
                err.status() as i32
            }
        }
    })
}

/// Release a buffer returned by `seedbridge_generate_phrase_ex`.
///
/// The memory is zeroed before it is freed. The empty buffer is a no-op.
///
/// # Safety
/// - `buffer` must come from `seedbridge_generate_phrase_ex`, unmodified
/// - Must not be called twice on the same buffer
#[no_mangle]
pub unsafe extern "C" fn seedbridge_buffer_release(buffer: SeedbridgeBuffer) {
    guard((), || buffer.release())
}

/// Check a caller-supplied phrase against the BIP-39 wordlists.
///
/// `language` selects the wordlist (`"en"`, `"fr"`, ...); null tries every
/// supported one. Words must be separated by whitespace and be in the
/// wordlist's NFKD form.
///
/// # Returns
/// 0 if the phrase is valid (known words, 12–24 words, correct checksum),
/// `ERR_INVALID_PHRASE` if not, `ERR_BAD_POINTER` for a null phrase,
/// `ERR_INVALID_ENCODING` for non-UTF-8 or over-long input,
/// `ERR_UNSUPPORTED_LANGUAGE` for an unknown selector.
///
/// # Safety
/// Non-null `phrase` and `language` must be NUL-terminated. Neither is
/// retained or freed.
#[no_mangle]
pub unsafe extern "C" fn seedbridge_validate_phrase(
    phrase: *const c_char,
    language: *const c_char,
) -> i32 {
    guard(StatusCode::Internal as i32, || {
        let config = AdapterConfig::default();
        let Some(text) = boundary::c_str_input(phrase, config.max_phrase_len) else {
            return StatusCode::BadPointer as i32;
        };

        let language = match boundary::c_str_input(language, MAX_LANGUAGE_LEN) {
            None => None,
            Some(selector) => match parse_language(selector) {
                Ok(lang) => Some(lang),
                Err(err) => return err.status() as i32,
            },
        };

        match check_phrase(text, language, &config) {
            Ok(_) => StatusCode::Ok as i32,
            Err(err) => {
                log::debug!("seedbridge_validate_phrase rejected input: {}", err);
                err.status() as i32
            }
        }
    })
}

fn parse_language(selector: &[u8]) -> Result<Language, BridgeError> {
    let text = std::str::from_utf8(selector)
        .map_err(|e| seedbridge_primitives::DecodeError::Utf8(e.valid_up_to()))?;
    text.parse()
}

/// Static, NUL-terminated name of a status code (`"ERR_BAD_POINTER"`, ...).
///
/// Unknown codes map to `"ERR_UNKNOWN"`. The returned pointer is never
/// null and must NOT be released.
#[no_mangle]
pub extern "C" fn seedbridge_status_message(code: i32) -> *const c_char {
    status_message_bytes(code).as_ptr() as *const c_char
}

fn status_message_bytes(code: i32) -> &'static [u8] {
    match StatusCode::from_i32(code) {
        Some(StatusCode::Ok) => b"OK\0",
        Some(StatusCode::BadPointer) => b"ERR_BAD_POINTER\0",
        Some(StatusCode::InvalidEncoding) => b"ERR_INVALID_ENCODING\0",
        Some(StatusCode::InvalidWordCount) => b"ERR_INVALID_WORD_COUNT\0",
        Some(StatusCode::UnsupportedLanguage) => b"ERR_UNSUPPORTED_LANGUAGE\0",
        Some(StatusCode::EntropyUnavailable) => b"ERR_ENTROPY_UNAVAILABLE\0",
        Some(StatusCode::AllocationFailed) => b"ERR_ALLOCATION_FAILED\0",
        Some(StatusCode::InvalidPhrase) => b"ERR_INVALID_PHRASE\0",
        Some(StatusCode::Internal) => b"ERR_INTERNAL\0",
        None => b"ERR_UNKNOWN\0",
    }
}
