//! `seedbridge-primitives` — foundational types for the seedbridge adapter.
//!
//! This crate provides the word-count and language enums, the validated
//! request and generated result types, the ABI status codes, and the error
//! taxonomy shared by the engine and the C boundary layer.

pub mod types;
pub mod error;
pub mod request;

// Re-export commonly used types at the crate root for convenience.
pub use types::{
    Language, WordCount, API_VERSION, DEFAULT_WORD_COUNT, MAX_INPUT_LEN, MAX_PHRASE_LEN,
};
pub use error::{BridgeError, BridgeResult, DecodeError, EntropyError, StatusCode};
pub use request::{GenerationRequest, GenerationResult};
