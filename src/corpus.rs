//! Frequency tries built from raw text.
//!
//! [`CorpusBuilder`] folds the output of a [`SentenceSplitter`] into either a
//! word-frequency trie (one character key per word occurrence) or a
//! sentence-frequency trie (one token key per sentence occurrence).
//!
//! # Examples
//!
//! ```
//! use lexitrie::corpus::make_word_trie;
//!
//! let trie = make_word_trie("bat bat bark bar").unwrap();
//! assert_eq!(trie.get("bat").unwrap(), &2);
//! assert_eq!(trie.get("bar").unwrap(), &1);
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::debug;

use crate::analysis::{SentenceSplitter, UnicodeSentenceSplitter, split_words};
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::trie::{CharTrie, KeyShape, TokenTrie, Trie};

/// Occurrence count stored as trie payload.
pub type Frequency = u32;

/// Word to occurrence count.
pub type WordTrie = CharTrie<Frequency>;

/// Sentence (as a token sequence) to occurrence count.
pub type SentenceTrie = TokenTrie<Frequency>;

/// Builds frequency tries from text using a pluggable sentence splitter.
#[derive(Clone)]
pub struct CorpusBuilder {
    splitter: Arc<dyn SentenceSplitter>,
}

impl CorpusBuilder {
    /// Create a builder using [`UnicodeSentenceSplitter`] with default settings.
    pub fn new() -> Self {
        Self::with_splitter(Arc::new(UnicodeSentenceSplitter::new()))
    }

    /// Create a builder whose default splitter uses `config`.
    pub fn with_config(config: AnalysisConfig) -> Self {
        Self::with_splitter(Arc::new(UnicodeSentenceSplitter::with_config(config)))
    }

    /// Create a builder with a custom sentence splitter.
    pub fn with_splitter(splitter: Arc<dyn SentenceSplitter>) -> Self {
        CorpusBuilder { splitter }
    }

    /// Count every word of `text`.
    pub fn word_trie(&self, text: &str) -> Result<WordTrie> {
        let sentences = self.splitter.split(text)?;
        let mut trie = WordTrie::new();
        for sentence in &sentences {
            for word in split_words(sentence) {
                increment(&mut trie, word);
            }
        }

        debug!(
            "built word trie: {} distinct words from {} sentences ({})",
            trie.len(),
            sentences.len(),
            self.splitter.name()
        );
        Ok(trie)
    }

    /// Count every sentence of `text`, keyed by its word tokens.
    pub fn sentence_trie(&self, text: &str) -> Result<SentenceTrie> {
        let sentences = self.splitter.split(text)?;
        let mut trie = SentenceTrie::new();
        for sentence in &sentences {
            let tokens: Vec<String> = split_words(sentence).map(str::to_string).collect();
            increment(&mut trie, &tokens[..]);
        }

        debug!(
            "built sentence trie: {} distinct sentences from {} sentences ({})",
            trie.len(),
            sentences.len(),
            self.splitter.name()
        );
        Ok(trie)
    }

    /// Read a UTF-8 file and count its words.
    pub fn word_trie_from_file<P: AsRef<Path>>(&self, path: P) -> Result<WordTrie> {
        let text = fs::read_to_string(path)?;
        self.word_trie(&text)
    }

    /// Read a UTF-8 file and count its sentences.
    pub fn sentence_trie_from_file<P: AsRef<Path>>(&self, path: P) -> Result<SentenceTrie> {
        let text = fs::read_to_string(path)?;
        self.sentence_trie(&text)
    }
}

impl Default for CorpusBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a word-frequency trie with the default splitter.
pub fn make_word_trie(text: &str) -> Result<WordTrie> {
    CorpusBuilder::new().word_trie(text)
}

/// Build a sentence-frequency trie with the default splitter.
pub fn make_sentence_trie(text: &str) -> Result<SentenceTrie> {
    CorpusBuilder::new().sentence_trie(text)
}

/// Sum of all stored frequencies, i.e. the number of counted occurrences.
pub fn total_frequency<K: KeyShape>(trie: &Trie<K, Frequency>) -> u64 {
    trie.iter().map(|(_, &count)| u64::from(count)).sum()
}

fn increment<K: KeyShape>(trie: &mut Trie<K, Frequency>, key: &K::Key) {
    let count = if trie.contains(key) {
        trie.get(key).map_or(1, |count| count.saturating_add(1))
    } else {
        1
    };
    trie.set(key, count);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LexitrieError;

    struct LineSplitter;

    impl SentenceSplitter for LineSplitter {
        fn split(&self, text: &str) -> Result<Vec<String>> {
            Ok(text.lines().map(str::to_string).collect())
        }

        fn name(&self) -> &'static str {
            "line"
        }
    }

    struct FailingSplitter;

    impl SentenceSplitter for FailingSplitter {
        fn split(&self, _text: &str) -> Result<Vec<String>> {
            Err(LexitrieError::analysis("unsupported input"))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_word_trie_counts() {
        let trie = make_word_trie("bat bat bark bar").unwrap();
        assert_eq!(trie.get("bat").unwrap(), &2);
        assert_eq!(trie.get("bark").unwrap(), &1);
        assert_eq!(trie.get("bar").unwrap(), &1);
        assert!(!trie.contains("ba"));
        assert_eq!(total_frequency(&trie), 4);
    }

    #[test]
    fn test_word_trie_normalizes() {
        let trie = make_word_trie("The cat. THE dog, the end!").unwrap();
        assert_eq!(trie.get("the").unwrap(), &3);
        assert!(!trie.contains("The"));
    }

    #[test]
    fn test_sentence_trie_counts() {
        let trie =
            make_sentence_trie("Said Alice. Said the Caterpillar. Said Alice! Wow.").unwrap();
        assert_eq!(trie.get(&tokens(&["said", "alice"])).unwrap(), &2);
        assert_eq!(trie.get(&tokens(&["said", "the", "caterpillar"])).unwrap(), &1);
        assert_eq!(trie.get(&tokens(&["wow"])).unwrap(), &1);
        assert!(!trie.contains(&tokens(&["said"])));
        assert_eq!(trie.len(), 3);
    }

    #[test]
    fn test_custom_splitter() {
        let builder = CorpusBuilder::with_splitter(Arc::new(LineSplitter));
        let trie = builder.sentence_trie("a b\nc\na b").unwrap();
        assert_eq!(trie.get(&tokens(&["a", "b"])).unwrap(), &2);
        assert_eq!(trie.get(&tokens(&["c"])).unwrap(), &1);
    }

    #[test]
    fn test_splitter_errors_propagate() {
        let builder = CorpusBuilder::with_splitter(Arc::new(FailingSplitter));
        let err = builder.word_trie("anything").unwrap_err();
        assert_eq!(err.to_string(), "Analysis error: unsupported input");
    }

    #[test]
    fn test_case_sensitive_config() {
        let builder = CorpusBuilder::with_config(AnalysisConfig {
            lowercase: false,
            strip_punctuation: true,
        });
        let trie = builder.word_trie("Bat bat.").unwrap();
        assert_eq!(trie.get("Bat").unwrap(), &1);
        assert_eq!(trie.get("bat").unwrap(), &1);
    }
}
