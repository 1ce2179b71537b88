//! Text analysis for corpus building.
//!
//! Raw text reaches the trie in two steps: a [`SentenceSplitter`] produces
//! normalized sentences, then [`split_words`] breaks each sentence on
//! whitespace into word tokens.

pub mod sentence;

pub use sentence::{SentenceSplitter, UnicodeSentenceSplitter};

/// Split a sentence into whitespace-delimited word tokens.
pub fn split_words(sentence: &str) -> impl Iterator<Item = &str> {
    sentence.split_whitespace()
}
