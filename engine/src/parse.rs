//! Request parsing and validation.
//!
//! Turns the raw bytes a foreign caller handed us into a
//! `GenerationRequest`. Two failure classes are kept apart:
//!
//! - **Decode failures** (not UTF-8, too long, not a number, trailing
//!   tokens) are subject to the configured `MalformedInputPolicy`.
//! - **Validation failures** (a number outside {12, 15, 18, 21, 24}, an
//!   unknown language) are always returned to the caller.
//!
//! Accepted grammar, after trimming ASCII whitespace:
//!
//! ```text
//! request  := ""                      (defaults)
//!           | count
//!           | count SP language
//! count    := optional sign, decimal digits
//! language := "en" | "english" | "cs" | "czech" | "fr" | ... (any case)
//! ```

use core::num::IntErrorKind;

use seedbridge_primitives::{
    BridgeError, BridgeResult, DecodeError, GenerationRequest, Language, WordCount,
};

use crate::config::{AdapterConfig, MalformedInputPolicy};

/// A validated request plus how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedInput {
    pub request: GenerationRequest,
    /// True when malformed input was replaced by the defaults.
    pub substituted: bool,
}

/// Tokens of a structurally well-formed request.
#[derive(Debug, PartialEq, Eq)]
struct RawRequest<'a> {
    count: &'a str,
    language: Option<&'a str>,
}

/// Parse and validate a request read from the boundary.
///
/// `None` (a null pointer on the foreign side) and empty input both mean
/// "use the defaults" and are not counted as substitution.
pub fn parse_request(input: Option<&[u8]>, config: &AdapterConfig) -> BridgeResult<ParsedInput> {
    let Some(bytes) = input else {
        return Ok(defaults(config, false));
    };

    let raw = match decode(bytes, config.max_input_len) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Ok(defaults(config, false)),
        Err(err) => return apply_policy(err, config),
    };

    let word_count = match parse_count(raw.count) {
        Ok(wc) => wc,
        Err(CountError::Malformed(err)) => return apply_policy(err, config),
        Err(CountError::Invalid(err)) => return Err(err),
    };

    let language = match raw.language {
        Some(token) => token.parse::<Language>()?,
        None => config.default_language,
    };

    Ok(ParsedInput {
        request: GenerationRequest::new(word_count, language),
        substituted: false,
    })
}

fn defaults(config: &AdapterConfig, substituted: bool) -> ParsedInput {
    ParsedInput {
        request: config.default_request(),
        substituted,
    }
}

fn apply_policy(err: DecodeError, config: &AdapterConfig) -> BridgeResult<ParsedInput> {
    match config.malformed_policy {
        MalformedInputPolicy::Substitute => {
            log::warn!(
                "malformed generation request ({}), substituting {} words / {}",
                err,
                config.default_word_count,
                config.default_language,
            );
            Ok(defaults(config, true))
        }
        MalformedInputPolicy::Reject => Err(err.into()),
    }
}

/// Structural decode: bounds, UTF-8, tokenization.
fn decode(bytes: &[u8], max_len: usize) -> Result<Option<RawRequest<'_>>, DecodeError> {
    if bytes.len() > max_len {
        return Err(DecodeError::TooLong {
            len: bytes.len(),
            max: max_len,
        });
    }

    let text = core::str::from_utf8(bytes).map_err(|e| DecodeError::Utf8(e.valid_up_to()))?;

    let mut tokens = text.split_ascii_whitespace();
    let Some(count) = tokens.next() else {
        return Ok(None);
    };
    let language = tokens.next();
    if let Some(extra) = tokens.next() {
        return Err(DecodeError::TrailingInput(extra.into()));
    }

    Ok(Some(RawRequest { count, language }))
}

enum CountError {
    Malformed(DecodeError),
    Invalid(BridgeError),
}

/// Interpret the count token.
///
/// Anything that reads as an integer is a *numeric* input, so negative
/// numbers and values overflowing `i64` are validation failures rather
/// than decode failures.
fn parse_count(token: &str) -> Result<WordCount, CountError> {
    match token.parse::<i64>() {
        Ok(n) => u32::try_from(n)
            .ok()
            .and_then(WordCount::from_count)
            .ok_or_else(|| CountError::Invalid(BridgeError::InvalidWordCount(token.into()))),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                Err(CountError::Invalid(BridgeError::InvalidWordCount(token.into())))
            }
            _ => Err(CountError::Malformed(DecodeError::NotNumeric(token.into()))),
        },
    }
}
