//! `seedbridge-engine` — mnemonic generation pipeline.
//!
//! This crate turns raw request bytes into a BIP-39 phrase:
//! `bytes → GenerationRequest → entropy → mnemonic`.
//!
//! ## Architecture
//!
//! - [`config::AdapterConfig`] — defaults, size bounds, malformed-input policy
//! - [`parse`] — decode and validate requests read from the boundary
//! - [`entropy::EntropySource`] — trait abstracting the randomness backend
//! - [`generator::PhraseGenerator`] — entropy draw and mnemonic encoding
//! - [`phrase`] — checks caller-supplied phrases (wordlist + checksum)
//!
//! Nothing here touches raw pointers; that is `seedbridge-ffi`'s job.

pub mod config;
pub mod parse;
pub mod entropy;
pub mod generator;
pub mod phrase;

// Re-export key types for convenience
pub use config::{AdapterConfig, MalformedInputPolicy};
pub use entropy::{EntropySource, FailingEntropy, FixedEntropy, OsEntropy};
pub use generator::PhraseGenerator;
pub use parse::{parse_request, ParsedInput};
pub use phrase::{check_phrase, PhraseInfo};
