//! Shared test helpers for integration tests.
//!
//! Wraps the exported C functions so tests can call them with Rust types
//! while still going through the real pointer-level boundary.

#![allow(dead_code)]

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use seedbridge_ffi::{
    seedbridge_buffer_release, seedbridge_generate_phrase, seedbridge_generate_phrase_ex,
    seedbridge_release, seedbridge_validate_phrase, SeedbridgeBuffer,
};
use seedbridge_primitives::StatusCode;

// ── Generation ──

/// Call `seedbridge_generate_phrase` with raw bytes (NUL appended).
///
/// Returns the phrase, or `None` for the null sentinel. The returned
/// buffer is always released.
pub fn generate_bytes(input: &[u8]) -> Option<String> {
    let input = CString::new(input).expect("test input has no interior NUL");
    unsafe { call_generate(input.as_ptr()) }
}

pub fn generate(input: &str) -> Option<String> {
    generate_bytes(input.as_bytes())
}

pub fn generate_null() -> Option<String> {
    unsafe { call_generate(ptr::null()) }
}

unsafe fn call_generate(input: *const c_char) -> Option<String> {
    let raw = seedbridge_generate_phrase(input);
    if raw.is_null() {
        return None;
    }
    let phrase = CStr::from_ptr(raw)
        .to_str()
        .expect("phrase is UTF-8")
        .to_owned();
    seedbridge_release(raw);
    Some(phrase)
}

/// Call `seedbridge_generate_phrase_ex`, releasing the buffer.
pub fn generate_ex(input: &[u8], flags: u32) -> Result<String, StatusCode> {
    unsafe { call_generate_ex(input.as_ptr(), input.len(), flags) }
}

pub unsafe fn call_generate_ex(
    input: *const u8,
    input_len: usize,
    flags: u32,
) -> Result<String, StatusCode> {
    let mut out = SeedbridgeBuffer {
        ptr: 0x1 as *mut u8,
        len: 99,
    };
    let code = seedbridge_generate_phrase_ex(input, input_len, flags, &mut out);
    let status = StatusCode::from_i32(code).expect("known status code");
    if !status.is_ok() {
        assert!(out.ptr.is_null(), "failed call left a non-null buffer");
        assert_eq!(out.len, 0);
        return Err(status);
    }
    let phrase = String::from_utf8(out.as_slice().to_vec()).expect("phrase is UTF-8");
    seedbridge_buffer_release(out);
    Ok(phrase)
}

// ── Validation ──

pub fn validate(phrase: &str, language: Option<&str>) -> StatusCode {
    let phrase = CString::new(phrase).unwrap();
    let language = language.map(|l| CString::new(l).unwrap());
    let lang_ptr = language.as_ref().map_or(ptr::null(), |l| l.as_ptr());
    let code = unsafe { seedbridge_validate_phrase(phrase.as_ptr(), lang_ptr) };
    StatusCode::from_i32(code).expect("known status code")
}

// ── Wordlists ──

pub fn english_words() -> &'static [&'static str; 2048] {
    bip39::Language::English.word_list()
}

/// Assert `phrase` has `count` single-space-separated English words.
pub fn assert_english_phrase(phrase: &str, count: usize) {
    let words: Vec<&str> = phrase.split(' ').collect();
    assert_eq!(words.len(), count, "phrase {:?}", phrase);
    for word in words {
        assert!(
            english_words().contains(&word),
            "{:?} is not an English BIP-39 word",
            word
        );
    }
}
