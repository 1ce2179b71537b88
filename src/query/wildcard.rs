//! Wildcard filtering over character tries.

use log::trace;

use crate::error::{LexitrieError, Result};
use crate::trie::{AnyTrie, CharTrie, KeyKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PatternElement {
    Literal(char),
    /// `?`
    AnyChar,
    /// `*`
    AnySequence,
}

/// A compiled glob pattern.
///
/// Supports the following wildcards:
/// - `*` matches zero or more characters
/// - `?` matches exactly one character
///
/// Every other character matches itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildcardPattern {
    /// The source pattern.
    pattern: String,
    /// Elements with runs of `*` collapsed into one.
    elements: Vec<PatternElement>,
    /// Characters a match needs at minimum.
    min_len: usize,
    /// Whether the pattern contains a `*`.
    unbounded: bool,
}

impl WildcardPattern {
    /// Compile a glob pattern.
    pub fn new<S: Into<String>>(pattern: S) -> Self {
        let pattern = pattern.into();
        let mut elements = Vec::with_capacity(pattern.len());
        for c in pattern.chars() {
            let element = match c {
                '*' => PatternElement::AnySequence,
                '?' => PatternElement::AnyChar,
                c => PatternElement::Literal(c),
            };
            if element == PatternElement::AnySequence
                && elements.last() == Some(&PatternElement::AnySequence)
            {
                continue;
            }
            elements.push(element);
        }

        let min_len = elements
            .iter()
            .filter(|e| **e != PatternElement::AnySequence)
            .count();
        let unbounded = elements.len() != min_len;

        WildcardPattern {
            pattern,
            elements,
            min_len,
            unbounded,
        }
    }

    /// Get the source pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Check if a word matches the pattern.
    ///
    /// Fills the (word position, pattern position) table one word position
    /// at a time, from the end, so the cost is bounded by the product of the
    /// two lengths however many `*` the pattern has.
    pub fn matches(&self, word: &str) -> bool {
        let word: Vec<char> = word.chars().collect();
        if word.len() < self.min_len || (!self.unbounded && word.len() != self.min_len) {
            return false;
        }

        let m = self.elements.len();
        // next[j]: does word[i + 1..] match elements[j..]
        let mut next = vec![false; m + 1];
        next[m] = true;
        for j in (0..m).rev() {
            next[j] = next[j + 1] && self.elements[j] == PatternElement::AnySequence;
        }

        let mut current = vec![false; m + 1];
        for &c in word.iter().rev() {
            current[m] = false;
            for j in (0..m).rev() {
                current[j] = match self.elements[j] {
                    PatternElement::Literal(expected) => expected == c && next[j + 1],
                    PatternElement::AnyChar => next[j + 1],
                    PatternElement::AnySequence => current[j + 1] || next[j],
                };
            }
            std::mem::swap(&mut current, &mut next);
        }
        next[0]
    }
}

/// Every `(word, value)` in the trie whose word matches `pattern`.
///
/// Results follow the trie's depth-first insertion order; they are not
/// ranked.
///
/// # Examples
///
/// ```
/// use lexitrie::corpus::make_word_trie;
/// use lexitrie::query::word_filter;
///
/// let trie = make_word_trie("bat bat bark bar").unwrap();
/// assert_eq!(
///     word_filter(&trie, "ba?"),
///     vec![("bat".to_string(), 2), ("bar".to_string(), 1)]
/// );
/// ```
pub fn word_filter<V: Clone>(trie: &CharTrie<V>, pattern: &str) -> Vec<(String, V)> {
    let pattern = WildcardPattern::new(pattern);
    let matched: Vec<(String, V)> = trie
        .iter()
        .filter(|(word, _)| pattern.matches(word))
        .map(|(word, value)| (word, value.clone()))
        .collect();

    trace!("pattern {:?}: {} matches", pattern.pattern(), matched.len());
    matched
}

/// [`word_filter`] over a runtime-locked trie.
///
/// Patterns are character patterns, so a token trie is a type mismatch.
pub fn word_filter_any<V: Clone>(trie: &AnyTrie<V>, pattern: &str) -> Result<Vec<(String, V)>> {
    match trie {
        AnyTrie::Unlocked => Ok(Vec::new()),
        AnyTrie::Chars(trie) => Ok(word_filter(trie, pattern)),
        AnyTrie::Tokens(_) => Err(LexitrieError::type_mismatch(
            KeyKind::Tokens,
            KeyKind::Chars,
        )),
    }
}
