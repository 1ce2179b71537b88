//! Edit-distance-1 candidate generation.
//!
//! Edits use the 26 lowercase Latin letters as their alphabet. Positions are
//! counted in characters, so multi-byte input is edited safely.

use ahash::AHashSet;

use crate::config::AutocorrectConfig;

/// Letters inserted and substituted by the edit generators.
pub const ALPHABET: std::ops::RangeInclusive<char> = 'a'..='z';

/// Every string formed by inserting one letter at any position, ends included.
///
/// Yields `26 * (len + 1)` candidates.
pub fn insertions(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut edits = Vec::with_capacity(26 * (chars.len() + 1));
    for i in 0..=chars.len() {
        for ch in ALPHABET {
            let mut new_word = chars.clone();
            new_word.insert(i, ch);
            edits.push(new_word.into_iter().collect());
        }
    }
    edits
}

/// Every string formed by removing one character.
///
/// Yields `len` candidates.
pub fn deletions(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    (0..chars.len())
        .map(|i| {
            let mut new_word = chars.clone();
            new_word.remove(i);
            new_word.into_iter().collect()
        })
        .collect()
}

/// Every string formed by replacing one character with any letter.
///
/// Yields `26 * len` candidates; replacing a letter with itself is included.
pub fn substitutions(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut edits = Vec::with_capacity(26 * chars.len());
    for i in 0..chars.len() {
        for ch in ALPHABET {
            let mut new_word = chars.clone();
            new_word[i] = ch;
            edits.push(new_word.into_iter().collect());
        }
    }
    edits
}

/// Every string formed by swapping the characters at positions `i - 1` and `i`.
///
/// Covers each adjacent pair exactly once: `len - 1` candidates for words
/// of two or more characters, none otherwise.
pub fn transpositions(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    (1..chars.len())
        .map(|i| {
            let mut new_word = chars.clone();
            new_word.swap(i - 1, i);
            new_word.into_iter().collect()
        })
        .collect()
}

/// The edit-distance-1 neighbourhood of `word` for the enabled edit families.
///
/// Candidates come in a fixed order (insertions, deletions, substitutions,
/// transpositions) with duplicates removed, keeping the first occurrence.
/// The word itself may appear, via a same-letter substitution or a swap of
/// equal neighbours.
pub fn neighborhood(word: &str, config: &AutocorrectConfig) -> Vec<String> {
    let families: [(bool, fn(&str) -> Vec<String>); 4] = [
        (config.insertions, insertions),
        (config.deletions, deletions),
        (config.substitutions, substitutions),
        (config.transpositions, transpositions),
    ];

    let mut seen = AHashSet::new();
    let mut candidates = Vec::new();
    for (enabled, generate) in families {
        if !enabled {
            continue;
        }
        for edit in generate(word) {
            if seen.insert(edit.clone()) {
                candidates.push(edit);
            }
        }
    }
    candidates
}
