//! `seedbridge-ffi` — C ABI surface for the seedbridge adapter.
//!
//! This crate compiles to a `cdylib`/`staticlib` that mobile runtimes and
//! other foreign callers load directly. It exports:
//!
//! - `seedbridge_api_version`
//! - `seedbridge_generate_phrase` / `seedbridge_release`
//! - `seedbridge_generate_phrase_ex` / `seedbridge_buffer_release`
//! - `seedbridge_validate_phrase`
//! - `seedbridge_status_message`
//!
//! **Ownership:** the adapter allocates every buffer it returns and owns
//! it until the caller hands it back to the matching release function.
//! Caller input is only borrowed for the duration of the call.
//!
//! **Threads:** every export is reentrant. Randomness comes from the OS
//! CSPRNG through a per-call handle; there is no shared mutable state.

mod boundary;
mod exports;

pub use boundary::SeedbridgeBuffer;
pub use exports::{
    seedbridge_api_version, seedbridge_buffer_release, seedbridge_generate_phrase,
    seedbridge_generate_phrase_ex, seedbridge_release, seedbridge_status_message,
    seedbridge_validate_phrase, SEEDBRIDGE_FLAG_STRICT,
};
