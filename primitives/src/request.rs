//! Request and result types flowing through the generation pipeline.

use core::fmt;

use zeroize::Zeroizing;

use crate::types::{Language, WordCount};

/// Validated caller intent.
///
/// Only constructible from already-validated parts, so holding one means
/// the word count and language are acceptable to the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationRequest {
    pub word_count: WordCount,
    pub language: Language,
}

impl GenerationRequest {
    pub fn new(word_count: WordCount, language: Language) -> Self {
        Self {
            word_count,
            language,
        }
    }
}

/// A freshly generated phrase.
///
/// The phrase is wiped from memory when the result is dropped. It is
/// consumed exactly once, by [`GenerationResult::into_phrase`], when the
/// boundary layer serializes it into an outbound buffer.
pub struct GenerationResult {
    request: GenerationRequest,
    phrase: Zeroizing<String>,
}

impl GenerationResult {
    pub fn new(request: GenerationRequest, phrase: Zeroizing<String>) -> Self {
        Self { request, phrase }
    }

    pub fn request(&self) -> GenerationRequest {
        self.request
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.phrase.split(' ')
    }

    pub fn into_phrase(self) -> Zeroizing<String> {
        self.phrase
    }
}

// Never print the phrase itself.
impl fmt::Debug for GenerationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationResult")
            .field("request", &self.request)
            .field("phrase", &"<redacted>")
            .finish()
    }
}
