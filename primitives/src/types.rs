//! Core types and constants for the seedbridge adapter.
//!
//! These types are shared by the generation engine and the C ABI layer.

use core::fmt;
use core::str::FromStr;

use crate::error::BridgeError;

/// Current boundary ABI version. Bumped on any change to exported signatures.
pub const API_VERSION: u32 = 1;

/// Word count used when the caller supplies no (or malformed) parameters.
pub const DEFAULT_WORD_COUNT: WordCount = WordCount::Twelve;

/// Upper bound on a generation request read from the boundary.
pub const MAX_INPUT_LEN: usize = 64;

/// Upper bound on a phrase handed to the validator.
pub const MAX_PHRASE_LEN: usize = 1024;

/// Phrase lengths accepted by BIP-39.
///
/// Each length corresponds to a fixed entropy size: 128, 160, 192, 224 or
/// 256 bits, plus a checksum of one bit per 32 bits of entropy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum WordCount {
    Twelve = 12,
    Fifteen = 15,
    Eighteen = 18,
    TwentyOne = 21,
    TwentyFour = 24,
}

impl WordCount {
    /// Every accepted length, shortest first.
    pub const ALL: [WordCount; 5] = [
        Self::Twelve,
        Self::Fifteen,
        Self::Eighteen,
        Self::TwentyOne,
        Self::TwentyFour,
    ];

    /// Map a raw count onto an accepted length.
    pub fn from_count(count: u32) -> Option<Self> {
        match count {
            12 => Some(Self::Twelve),
            15 => Some(Self::Fifteen),
            18 => Some(Self::Eighteen),
            21 => Some(Self::TwentyOne),
            24 => Some(Self::TwentyFour),
            _ => None,
        }
    }

    /// Number of words in the phrase.
    pub fn words(self) -> usize {
        self as usize
    }

    /// Entropy size in bytes (`words * 11 - checksum bits`, divided by 8).
    pub fn entropy_bytes(self) -> usize {
        self.words() * 4 / 3
    }
}

impl Default for WordCount {
    fn default() -> Self {
        DEFAULT_WORD_COUNT
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words())
    }
}

/// Wordlist languages the adapter can generate in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Czech,
    French,
    Italian,
    Spanish,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Self::English,
        Self::Czech,
        Self::French,
        Self::Italian,
        Self::Spanish,
    ];

    /// Two-letter ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Czech => "cs",
            Self::French => "fr",
            Self::Italian => "it",
            Self::Spanish => "es",
        }
    }

    /// Look up a language by ISO code or English name, ignoring ASCII case.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL.into_iter().find(|lang| {
            code.eq_ignore_ascii_case(lang.code()) || code.eq_ignore_ascii_case(lang.name())
        })
    }

    fn name(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Czech => "czech",
            Self::French => "french",
            Self::Italian => "italian",
            Self::Spanish => "spanish",
        }
    }
}

impl FromStr for Language {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| BridgeError::UnsupportedLanguage(s.into()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
