//! Entropy source trait — abstraction over where random bytes come from.
//!
//! The `EntropySource` trait decouples the generator from the randomness
//! backend:
//!
//! - In production: [`OsEntropy`], the operating system CSPRNG
//! - In tests: [`FixedEntropy`] (repeatable bytes) and [`FailingEntropy`]
//!
//! Only `OsEntropy` is reachable from the C boundary.

use rand::rngs::OsRng;
use rand::RngCore;
use seedbridge_primitives::EntropyError;

/// A source of bytes for mnemonic entropy.
///
/// Implementations must either fill the whole buffer or fail. A partially
/// filled buffer must never be reported as success.
pub trait EntropySource {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), EntropyError>;
}

/// Operating system CSPRNG (`getrandom(2)`, `BCryptGenRandom`,
/// `SecRandomCopyBytes`, ... via `rand::rngs::OsRng`).
///
/// Zero-sized and stateless, so each call can construct its own and
/// concurrent calls share nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), EntropyError> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|err| EntropyError(err.to_string()))
    }
}

// ── Test sources ──

/// Repeats a fixed byte pattern. Produces known BIP-39 vectors.
///
/// NEVER used outside tests: the output is fully predictable.
#[derive(Debug, Clone)]
pub struct FixedEntropy {
    pattern: Vec<u8>,
}

impl FixedEntropy {
    pub fn new(pattern: &[u8]) -> Self {
        Self {
            pattern: pattern.to_vec(),
        }
    }
}

impl EntropySource for FixedEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), EntropyError> {
        if self.pattern.is_empty() {
            return Err(EntropyError("empty pattern".into()));
        }
        for (dst, src) in buf.iter_mut().zip(self.pattern.iter().cycle()) {
            *dst = *src;
        }
        Ok(())
    }
}

/// Always fails, simulating an unavailable OS source.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingEntropy;

impl EntropySource for FailingEntropy {
    fn fill(&mut self, _buf: &mut [u8]) -> Result<(), EntropyError> {
        Err(EntropyError("entropy source offline".into()))
    }
}
