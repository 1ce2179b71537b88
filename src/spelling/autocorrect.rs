//! Autocomplete extended with single-edit corrections.

use ahash::AHashSet;
use log::debug;

use crate::config::AutocorrectConfig;
use crate::error::{LexitrieError, Result};
use crate::query::autocomplete::ranked_completions;
use crate::spelling::edits::neighborhood;
use crate::trie::{AnyTrie, CharTrie, Key, KeyKind, OwnedKey};

/// Combines prefix completions with edit-distance-1 corrections.
#[derive(Debug, Clone, Default)]
pub struct Autocorrector {
    config: AutocorrectConfig,
}

impl Autocorrector {
    /// Create an autocorrector generating every edit family.
    pub fn new() -> Self {
        Autocorrector {
            config: AutocorrectConfig::default(),
        }
    }

    /// Create an autocorrector with a custom configuration.
    pub fn with_config(config: AutocorrectConfig) -> Self {
        Autocorrector { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &AutocorrectConfig {
        &self.config
    }

    /// Ranked completions of `prefix`, then its best single-edit corrections.
    ///
    /// Completions come first, in autocomplete order. If they already fill
    /// `max_count`, nothing else is added. Otherwise the edits of `prefix`
    /// that are present in the trie, differ from `prefix` and are not
    /// already completions are ranked by value (stable, so ties keep
    /// generation order) and appended until the combined length reaches
    /// `max_count`. Without `max_count` every such edit is appended.
    pub fn ranked<V>(
        &self,
        trie: &CharTrie<V>,
        prefix: &str,
        max_count: Option<usize>,
    ) -> Vec<(String, V)>
    where
        V: Ord + Clone,
    {
        let mut results = ranked_completions(trie, prefix, max_count);
        if max_count.is_some_and(|max_count| results.len() >= max_count) {
            return results;
        }

        let mut edits: Vec<(String, V)> = {
            let completed: AHashSet<&str> =
                results.iter().map(|(word, _)| word.as_str()).collect();
            neighborhood(prefix, &self.config)
                .into_iter()
                .filter(|edit| edit != prefix && !completed.contains(edit.as_str()))
                .filter_map(|edit| {
                    let value = trie.get(&edit).ok()?.clone();
                    Some((edit, value))
                })
                .collect()
        };
        edits.sort_by(|a, b| b.1.cmp(&a.1));
        if let Some(max_count) = max_count {
            edits.truncate(max_count - results.len());
        }

        debug!(
            "autocorrect {prefix:?}: {} completions, {} edits",
            results.len(),
            edits.len()
        );
        results.extend(edits);
        results
    }

    /// Like [`Autocorrector::ranked`], keys only.
    pub fn correct<V>(
        &self,
        trie: &CharTrie<V>,
        prefix: &str,
        max_count: Option<usize>,
    ) -> Vec<String>
    where
        V: Ord + Clone,
    {
        self.ranked(trie, prefix, max_count)
            .into_iter()
            .map(|(word, _)| word)
            .collect()
    }
}

/// Autocorrect with every edit family enabled.
///
/// # Examples
///
/// ```
/// use lexitrie::corpus::make_word_trie;
/// use lexitrie::spelling::autocorrect;
///
/// let trie = make_word_trie("bat bat bark bar").unwrap();
/// assert_eq!(autocorrect(&trie, "bat", Some(5)), vec!["bat", "bar"]);
/// ```
pub fn autocorrect<V>(trie: &CharTrie<V>, prefix: &str, max_count: Option<usize>) -> Vec<String>
where
    V: Ord + Clone,
{
    Autocorrector::new().correct(trie, prefix, max_count)
}

/// [`autocorrect`] over a runtime-locked trie.
///
/// Edits are character edits, so a token prefix or a token trie is a type
/// mismatch. An unlocked trie has no corrections.
pub fn autocorrect_any<'k, V>(
    trie: &AnyTrie<V>,
    prefix: impl Into<Key<'k>>,
    max_count: Option<usize>,
) -> Result<Vec<OwnedKey>>
where
    V: Ord + Clone,
{
    let prefix = prefix.into();
    trie.check_kind(prefix.kind())?;

    match (trie, prefix) {
        (AnyTrie::Chars(trie), Key::Chars(prefix)) => Ok(autocorrect(trie, prefix, max_count)
            .into_iter()
            .map(OwnedKey::Chars)
            .collect()),
        (AnyTrie::Unlocked, Key::Chars(_)) => Ok(Vec::new()),
        (_, prefix) => Err(LexitrieError::type_mismatch(KeyKind::Chars, prefix.kind())),
    }
}
