//! # Lexitrie
//!
//! A frequency-weighted prefix tree with three queries built on it.
//!
//! ## Features
//!
//! - Tries keyed by strings (one atom per character) or token sequences
//!   (one atom per token), with logical deletion
//! - Word and sentence frequency tries built from raw text
//! - Ranked prefix autocomplete with stable tie-breaks
//! - Autocorrect from single insertions, deletions, substitutions and
//!   adjacent transpositions
//! - Glob (`*`, `?`) word filtering in time bounded by pattern × word length

pub mod analysis;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod query;
pub mod spelling;
pub mod trie;

pub mod prelude {
    pub use crate::corpus::{CorpusBuilder, SentenceTrie, WordTrie};
    pub use crate::error::{LexitrieError, Result};
    pub use crate::query::{autocomplete, word_filter};
    pub use crate::spelling::autocorrect;
    pub use crate::trie::{AnyTrie, CharTrie, TokenTrie, Trie};
}

/// Crate version, as reported by `lexitrie --version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
