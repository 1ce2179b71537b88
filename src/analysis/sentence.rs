//! Sentence splitting.
//!
//! The corpus builders consume text only through [`SentenceSplitter`]: raw
//! text in, an ordered list of normalized sentence strings out. Each
//! sentence is later split on whitespace into word tokens.

use std::sync::{Arc, LazyLock};

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::AnalysisConfig;
use crate::error::Result;

/// Matches punctuation and apostrophes that do not sit inside a word.
const PUNCTUATION_PATTERN: &str = r"[^\w\s']|'\B|\B'";

/// Trait for splitters that turn raw text into sentences.
pub trait SentenceSplitter: Send + Sync {
    /// Split `text` into ordered sentence strings whose words are separated by whitespace.
    fn split(&self, text: &str) -> Result<Vec<String>>;

    /// Get the name of this splitter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Splits on Unicode sentence boundaries (UAX #29) and normalizes each sentence.
///
/// # Examples
///
/// ```
/// use lexitrie::analysis::sentence::{SentenceSplitter, UnicodeSentenceSplitter};
///
/// let splitter = UnicodeSentenceSplitter::new();
/// let sentences = splitter.split("The Cat sat. Didn't it?  Yes!").unwrap();
/// assert_eq!(sentences, vec!["the cat sat", "didn't it", "yes"]);
/// ```
#[derive(Clone, Debug)]
pub struct UnicodeSentenceSplitter {
    config: AnalysisConfig,
    punctuation: Arc<Regex>,
}

impl UnicodeSentenceSplitter {
    /// Create a splitter with the default analysis configuration.
    pub fn new() -> Self {
        Self::with_config(AnalysisConfig::default())
    }

    /// Create a splitter with a custom configuration.
    pub fn with_config(config: AnalysisConfig) -> Self {
        UnicodeSentenceSplitter {
            config,
            punctuation: Arc::clone(&PUNCTUATION),
        }
    }

    /// Get the analysis configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    fn normalize(&self, sentence: &str) -> String {
        let sentence = if self.config.lowercase {
            sentence.to_lowercase()
        } else {
            sentence.to_string()
        };
        let sentence = if self.config.strip_punctuation {
            self.punctuation.replace_all(&sentence, " ").into_owned()
        } else {
            sentence
        };
        sentence.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

impl Default for UnicodeSentenceSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSplitter for UnicodeSentenceSplitter {
    fn split(&self, text: &str) -> Result<Vec<String>> {
        Ok(text
            .unicode_sentences()
            .map(|sentence| self.normalize(sentence))
            .filter(|sentence| !sentence.is_empty())
            .collect())
    }

    fn name(&self) -> &'static str {
        "unicode_sentence"
    }
}

static PUNCTUATION: LazyLock<Arc<Regex>> = LazyLock::new(|| {
    Arc::new(Regex::new(PUNCTUATION_PATTERN).expect("Punctuation pattern should be valid"))
});
