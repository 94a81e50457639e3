//! Tests for `seedbridge_validate_phrase`.

mod common;

use std::ptr;

use seedbridge_ffi::seedbridge_validate_phrase;
use seedbridge_primitives::StatusCode;

use common::*;

const ZERO_12: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
const FF_12: &str = "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong";

#[test]
fn test_known_vectors_valid() {
    assert_eq!(validate(ZERO_12, None), StatusCode::Ok);
    assert_eq!(validate(FF_12, Some("en")), StatusCode::Ok);
    assert_eq!(validate(FF_12, Some("English")), StatusCode::Ok);
}

#[test]
fn test_extra_whitespace_accepted() {
    let spaced = ZERO_12.replace(' ', "  ");
    assert_eq!(validate(&format!(" {}\n", spaced), None), StatusCode::Ok);
}

#[test]
fn test_bad_checksum() {
    let phrase = FF_12.replace("wrong", "zoo");
    assert_eq!(validate(&phrase, None), StatusCode::InvalidPhrase);
}

#[test]
fn test_wrong_language() {
    assert_eq!(validate(ZERO_12, Some("fr")), StatusCode::InvalidPhrase);
}

#[test]
fn test_unknown_language() {
    assert_eq!(validate(ZERO_12, Some("xx")), StatusCode::UnsupportedLanguage);
}

#[test]
fn test_empty_phrase() {
    assert_eq!(validate("", None), StatusCode::InvalidPhrase);
}

#[test]
fn test_null_phrase() {
    let code = unsafe { seedbridge_validate_phrase(ptr::null(), ptr::null()) };
    assert_eq!(code, StatusCode::BadPointer as i32);
}

#[test]
fn test_oversized_phrase() {
    let phrase = vec!["abandon"; 200].join(" ");
    assert_eq!(validate(&phrase, None), StatusCode::InvalidEncoding);
}

#[test]
fn test_generated_phrases_roundtrip_every_language() {
    for lang in ["en", "cs", "fr", "it", "es"] {
        let phrase = generate(&format!("24 {}", lang)).unwrap();
        assert_eq!(validate(&phrase, Some(lang)), StatusCode::Ok, "{}", lang);
        assert_eq!(validate(&phrase, None), StatusCode::Ok, "{} (auto)", lang);
    }
}
