//! Bridge to the `tiktoken-rs` BPE tokenizers.
//!
//! Vocabularies are embedded in the crate and expensive to build, so each
//! encoding family is constructed at most once per process and shared
//! behind a `OnceLock` cell.

use std::sync::OnceLock;

use anyhow::{Context, Result};
use tiktoken_rs::CoreBPE;
use tokenlab_core::Encoding;

const CELL: OnceLock<CoreBPE> = OnceLock::new();
static CELLS: [OnceLock<CoreBPE>; Encoding::ALL.len()] = [CELL; Encoding::ALL.len()];

fn bpe_for(encoding: Encoding) -> Result<&'static CoreBPE> {
    let cell = &CELLS[encoding as usize];
    if let Some(bpe) = cell.get() {
        return Ok(bpe);
    }
    let built = match encoding {
        Encoding::Cl100kBase => tiktoken_rs::cl100k_base(),
        Encoding::O200kBase => tiktoken_rs::o200k_base(),
        Encoding::P50kBase => tiktoken_rs::p50k_base(),
        Encoding::P50kEdit => tiktoken_rs::p50k_edit(),
        Encoding::R50kBase => tiktoken_rs::r50k_base(),
    }
    .with_context(|| format!("failed to load the {} vocabulary", encoding))?;
    // A racing thread may have initialized the cell meanwhile; either copy
    // of the vocabulary is identical, so whichever wins is fine.
    Ok(cell.get_or_init(|| built))
}

/// A handle to one encoding family's tokenizer.
pub struct Tokenizer {
    encoding: Encoding,
    bpe: &'static CoreBPE,
}

impl Tokenizer {
    pub fn for_encoding(encoding: Encoding) -> Result<Self> {
        Ok(Tokenizer {
            encoding,
            bpe: bpe_for(encoding)?,
        })
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Encode plain text into token ids. Special-token markers in the input
    /// are tokenized as ordinary text, matching what a user typing into the
    /// playground expects.
    pub fn encode(&self, text: &str) -> Vec<u32> {
        self.bpe.encode_ordinary(text)
    }

    pub fn count(&self, text: &str) -> usize {
        self.encode(text).len()
    }

    /// Decode a full token sequence back into text.
    pub fn decode(&self, tokens: &[u32]) -> Result<String> {
        self.bpe
            .decode(tokens.to_vec())
            .with_context(|| format!("failed to decode {} tokens", tokens.len()))
    }

    /// Decode token-by-token into display fragments.
    ///
    /// A single token can end mid-way through a multi-byte scalar, so ids
    /// accumulate in a pending window until the window decodes to valid
    /// UTF-8, at which point one fragment is emitted. For any sequence
    /// produced by [`Tokenizer::encode`] the fragments concatenate back to
    /// the decoded text, and re-invoking with the same ids reproduces the
    /// same fragments.
    pub fn fragments(&self, tokens: &[u32]) -> Vec<String> {
        let mut fragments = Vec::with_capacity(tokens.len());
        let mut pending: Vec<u32> = Vec::new();

        for &token in tokens {
            pending.push(token);
            if let Ok(text) = self.bpe.decode(pending.clone()) {
                fragments.push(text);
                pending.clear();
            }
        }

        if !pending.is_empty() {
            // Hand-crafted id lists can leave bytes that never complete a
            // scalar; render one replacement character per leftover token.
            fragments.push("\u{FFFD}".repeat(pending.len()));
        }

        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_roundtrip() {
        let tok = Tokenizer::for_encoding(Encoding::Cl100kBase).unwrap();
        let text = "Welcome to the tokenlab playground.";
        let ids = tok.encode(text);
        assert!(!ids.is_empty());
        assert_eq!(tok.decode(&ids).unwrap(), text);
    }

    #[test]
    fn empty_text_has_no_tokens() {
        let tok = Tokenizer::for_encoding(Encoding::Cl100kBase).unwrap();
        assert_eq!(tok.count(""), 0);
        assert!(tok.fragments(&[]).is_empty());
    }

    #[test]
    fn fragments_concatenate_to_the_decoded_text() {
        let tok = Tokenizer::for_encoding(Encoding::Cl100kBase).unwrap();
        let text = "Hello, world!\nSecond line with 🚀 and ünïcode.";
        let ids = tok.encode(text);
        let fragments = tok.fragments(&ids);
        assert_eq!(fragments.concat(), text);
    }

    #[test]
    fn fragments_are_restartable() {
        let tok = Tokenizer::for_encoding(Encoding::O200kBase).unwrap();
        let ids = tok.encode("deterministic output, please");
        assert_eq!(tok.fragments(&ids), tok.fragments(&ids));
    }

    #[test]
    fn families_tokenize_independently() {
        let old = Tokenizer::for_encoding(Encoding::R50kBase).unwrap();
        let new = Tokenizer::for_encoding(Encoding::O200kBase).unwrap();
        let text = "The quick brown fox jumps over the lazy dog";
        assert!(old.count(text) > 0);
        assert!(new.count(text) > 0);
        // Vocabularies differ, so id sequences generally do too.
        assert_ne!(old.encode(text), new.encode(text));
    }

    #[test]
    fn special_token_text_is_treated_as_plain_text() {
        let tok = Tokenizer::for_encoding(Encoding::Cl100kBase).unwrap();
        let ids = tok.encode("<|endoftext|>");
        assert!(ids.len() > 1);
        assert_eq!(tok.decode(&ids).unwrap(), "<|endoftext|>");
    }
}
