//! Phrase generator — the parse → validate → generate pipeline.
//!
//! `PhraseGenerator::generate` implements the core operation:
//!
//! 1. Draw `word_count * 4 / 3` bytes from the entropy source
//! 2. Encode them as a BIP-39 mnemonic (SHA-256 checksum appended)
//! 3. Return the phrase in zeroize-on-drop storage
//!
//! Serialization into a foreign buffer is the boundary layer's job.
//!
//! An entropy failure aborts the operation. There is no fallback source.

use std::fmt::Write;

use seedbridge_primitives::{
    BridgeError, BridgeResult, GenerationRequest, GenerationResult,
};
use zeroize::Zeroizing;

use crate::config::AdapterConfig;
use crate::entropy::EntropySource;
use crate::parse::parse_request;
use crate::phrase::wordlist;

/// Largest entropy draw (24 words = 256 bits).
const MAX_ENTROPY_BYTES: usize = 32;

/// The phrase generator.
///
/// Stateless: randomness comes from the `EntropySource` passed to each
/// call, so concurrent calls share nothing.
pub struct PhraseGenerator;

impl PhraseGenerator {
    /// Generate a phrase for an already-validated request.
    pub fn generate(
        request: GenerationRequest,
        source: &mut dyn EntropySource,
    ) -> BridgeResult<GenerationResult> {
        let mut entropy = Zeroizing::new([0u8; MAX_ENTROPY_BYTES]);
        let bytes = &mut entropy[..request.word_count.entropy_bytes()];

        if let Err(err) = source.fill(bytes) {
            log::error!("entropy source failed, refusing to generate: {}", err);
            return Err(err.into());
        }

        let mnemonic = bip39::Mnemonic::from_entropy_in(wordlist(request.language), bytes)
            .map_err(|err| BridgeError::Internal(err.to_string()))?;

        let phrase = render(&mnemonic)?;

        log::debug!(
            "generated {}-word phrase ({})",
            request.word_count,
            request.language
        );
        Ok(GenerationResult::new(request, phrase))
    }

    /// Parse `input` under `config` and generate.
    ///
    /// `input` is `None` when the foreign caller passed a null pointer.
    pub fn generate_from_input(
        input: Option<&[u8]>,
        config: &AdapterConfig,
        source: &mut dyn EntropySource,
    ) -> BridgeResult<GenerationResult> {
        let parsed = parse_request(input, config)?;
        Self::generate(parsed.request, source)
    }
}

/// Byte length of the space-joined phrase.
fn phrase_len(mnemonic: &bip39::Mnemonic) -> usize {
    let words: usize = mnemonic.words().map(str::len).sum();
    words + mnemonic.word_count().saturating_sub(1)
}

/// Write the phrase into storage sized up front, so no partial copy is
/// left behind by a reallocation.
fn render(mnemonic: &bip39::Mnemonic) -> BridgeResult<Zeroizing<String>> {
    let mut phrase = Zeroizing::new(String::with_capacity(phrase_len(mnemonic)));
    write!(phrase, "{}", mnemonic)
        .map_err(|_| BridgeError::Internal("phrase formatting failed".into()))?;
    Ok(phrase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MalformedInputPolicy;
    use crate::entropy::{FailingEntropy, FixedEntropy, OsEntropy};
    use seedbridge_primitives::{DecodeError, Language, StatusCode, WordCount};

    fn english_words() -> &'static [&'static str; 2048] {
        bip39::Language::English.word_list()
    }

    #[test]
    fn test_zero_entropy_vector() {
        let req = GenerationRequest::new(WordCount::Twelve, Language::English);
        let result = PhraseGenerator::generate(req, &mut FixedEntropy::new(&[0x00])).unwrap();
        assert_eq!(
            result.phrase(),
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about"
        );
    }

    #[test]
    fn test_known_vectors() {
        let cases = [
            (
                WordCount::Twelve,
                0x7fu8,
                "legal winner thank year wave sausage worth useful legal winner thank yellow",
            ),
            (
                WordCount::Twelve,
                0xff,
                "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong",
            ),
            (
                WordCount::TwentyFour,
                0x00,
                "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon art",
            ),
        ];
        for (wc, byte, expected) in cases {
            let req = GenerationRequest::new(wc, Language::English);
            let result = PhraseGenerator::generate(req, &mut FixedEntropy::new(&[byte])).unwrap();
            assert_eq!(result.phrase(), expected);
        }
    }

    #[test]
    fn test_every_length_with_os_entropy() {
        for wc in WordCount::ALL {
            let req = GenerationRequest::new(wc, Language::English);
            let result = PhraseGenerator::generate(req, &mut OsEntropy).unwrap();
            assert_eq!(result.words().count(), wc.words());
            for word in result.words() {
                assert!(english_words().contains(&word), "{} not in wordlist", word);
            }
        }
    }

    #[test]
    fn test_other_languages_use_their_wordlist() {
        for lang in Language::ALL {
            let req = GenerationRequest::new(WordCount::Fifteen, lang);
            let result = PhraseGenerator::generate(req, &mut OsEntropy).unwrap();
            let list = wordlist(lang).word_list();
            assert_eq!(result.words().count(), 15);
            assert!(result.words().all(|w| list.contains(&w)));
        }
    }

    #[test]
    fn test_render_fits_presized_buffer() {
        for lang in Language::ALL {
            for wc in WordCount::ALL {
                let entropy = vec![0xa5u8; wc.entropy_bytes()];
                let mnemonic = bip39::Mnemonic::from_entropy_in(wordlist(lang), &entropy).unwrap();
                let phrase = render(&mnemonic).unwrap();
                assert_eq!(phrase.len(), phrase_len(&mnemonic), "{} {}", lang, wc);
                assert_eq!(phrase.as_str(), mnemonic.to_string());
            }
        }
    }

    #[test]
    fn test_mnemonic_wipes_on_drop() {
        fn wipes_on_drop<T: zeroize::ZeroizeOnDrop>() {}
        wipes_on_drop::<bip39::Mnemonic>();
    }

    #[test]
    fn test_entropy_failure_is_fatal() {
        let err = PhraseGenerator::generate(GenerationRequest::default(), &mut FailingEntropy)
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::EntropyUnavailable);
    }

    #[test]
    fn test_consecutive_calls_differ() {
        let req = GenerationRequest::default();
        let a = PhraseGenerator::generate(req, &mut OsEntropy).unwrap();
        let b = PhraseGenerator::generate(req, &mut OsEntropy).unwrap();
        assert_ne!(a.phrase(), b.phrase());
    }

    #[test]
    fn test_from_input_pipeline() {
        let config = AdapterConfig::default();

        let result =
            PhraseGenerator::generate_from_input(Some(&b"21"[..]), &config, &mut OsEntropy).unwrap();
        assert_eq!(result.words().count(), 21);

        let result = PhraseGenerator::generate_from_input(None, &config, &mut OsEntropy).unwrap();
        assert_eq!(result.words().count(), 12);

        let result =
            PhraseGenerator::generate_from_input(Some(&b"garbage"[..]), &config, &mut OsEntropy)
                .unwrap();
        assert_eq!(result.words().count(), 12);

        let err = PhraseGenerator::generate_from_input(Some(&b"7"[..]), &config, &mut OsEntropy)
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::InvalidWordCount);
    }

    #[test]
    fn test_from_input_strict() {
        let config = AdapterConfig::default().with_policy(MalformedInputPolicy::Reject);
        let err =
            PhraseGenerator::generate_from_input(Some(&b"garbage"[..]), &config, &mut OsEntropy)
                .unwrap_err();
        assert_eq!(
            err,
            BridgeError::InputDecode(DecodeError::NotNumeric("garbage".into()))
        );
    }

    #[test]
    fn test_validation_checked_before_entropy() {
        // An invalid request must fail as validation even with a broken source.
        let err = PhraseGenerator::generate_from_input(
            Some(&b"7"[..]),
            &AdapterConfig::default(),
            &mut FailingEntropy,
        )
        .unwrap_err();
        assert_eq!(err.status(), StatusCode::InvalidWordCount);
    }
}
