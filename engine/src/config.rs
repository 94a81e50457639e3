//! Adapter configuration.

use seedbridge_primitives::{
    GenerationRequest, Language, WordCount, MAX_INPUT_LEN, MAX_PHRASE_LEN,
};

/// What to do with input that cannot be parsed as a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedInputPolicy {
    /// Generate with the configured defaults and log a warning.
    #[default]
    Substitute,
    /// Fail with `BridgeError::InputDecode`.
    Reject,
}

/// Configuration for the generation pipeline.
///
/// Controls the defaults used for empty or malformed input and the size
/// bounds applied to foreign buffers.
#[derive(Debug, Clone)]
pub struct AdapterConfig {
    /// Word count used for empty or substituted input.
    /// Default: 12.
    pub default_word_count: WordCount,

    /// Language used when the request names none.
    pub default_language: Language,

    /// Longest generation request accepted, in bytes.
    pub max_input_len: usize,

    /// Longest phrase accepted by the validator, in bytes.
    pub max_phrase_len: usize,

    pub malformed_policy: MalformedInputPolicy,
}

impl AdapterConfig {
    pub fn with_policy(mut self, policy: MalformedInputPolicy) -> Self {
        self.malformed_policy = policy;
        self
    }

    pub fn with_default_word_count(mut self, word_count: WordCount) -> Self {
        self.default_word_count = word_count;
        self
    }

    pub fn with_default_language(mut self, language: Language) -> Self {
        self.default_language = language;
        self
    }

    /// The request used when input is absent or substituted.
    pub fn default_request(&self) -> GenerationRequest {
        GenerationRequest::new(self.default_word_count, self.default_language)
    }
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            default_word_count: WordCount::Twelve,
            default_language: Language::English,
            max_input_len: MAX_INPUT_LEN,
            max_phrase_len: MAX_PHRASE_LEN,
            malformed_policy: MalformedInputPolicy::Substitute,
        }
    }
}
