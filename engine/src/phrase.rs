//! Wordlist mapping and phrase checking.

use seedbridge_primitives::{
    BridgeError, BridgeResult, DecodeError, Language, WordCount,
};

use crate::config::AdapterConfig;

/// Map an adapter language onto the `bip39` wordlist.
pub(crate) fn wordlist(language: Language) -> bip39::Language {
    match language {
        Language::English => bip39::Language::English,
        Language::Czech => bip39::Language::Czech,
        Language::French => bip39::Language::French,
        Language::Italian => bip39::Language::Italian,
        Language::Spanish => bip39::Language::Spanish,
    }
}

/// Outcome of a successful phrase check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseInfo {
    pub language: Language,
    pub word_count: WordCount,
}

/// Check that `phrase` is a valid BIP-39 mnemonic.
///
/// Verifies length, wordlist membership and checksum. With `language`
/// unset every supported wordlist is tried in [`Language::ALL`] order.
/// Words must be in the wordlist's normalized (NFKD) form and separated by
/// whitespace.
pub fn check_phrase(
    phrase: &[u8],
    language: Option<Language>,
    config: &AdapterConfig,
) -> BridgeResult<PhraseInfo> {
    if phrase.len() > config.max_phrase_len {
        return Err(DecodeError::TooLong {
            len: phrase.len(),
            max: config.max_phrase_len,
        }
        .into());
    }
    let text = core::str::from_utf8(phrase).map_err(|e| DecodeError::Utf8(e.valid_up_to()))?;

    let (language, mnemonic) = match language {
        Some(lang) => {
            let mnemonic = bip39::Mnemonic::parse_in_normalized(wordlist(lang), text)
                .map_err(|err| BridgeError::InvalidPhrase(err.to_string()))?;
            (lang, mnemonic)
        }
        None => Language::ALL
            .into_iter()
            .find_map(|lang| {
                bip39::Mnemonic::parse_in_normalized(wordlist(lang), text)
                    .ok()
                    .map(|m| (lang, m))
            })
            .ok_or_else(|| {
                BridgeError::InvalidPhrase("no supported wordlist accepts the phrase".into())
            })?,
    };

    let word_count = u32::try_from(mnemonic.word_count())
        .ok()
        .and_then(WordCount::from_count)
        .ok_or_else(|| BridgeError::Internal("bip39 accepted an unsupported length".into()))?;

    Ok(PhraseInfo {
        language,
        word_count,
    })
}
