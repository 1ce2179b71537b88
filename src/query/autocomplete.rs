//! Ranked prefix completion.

use log::trace;

use crate::error::Result;
use crate::trie::{AnyTrie, Key, KeyShape, OwnedKey, Trie};

/// Every present key starting with `prefix`, with its value, best first.
///
/// Keys are ranked by value, descending. The sort is stable, so keys with
/// equal values keep the trie's depth-first insertion order. An absent
/// prefix yields an empty list.
pub fn ranked_completions<K, V>(
    trie: &Trie<K, V>,
    prefix: &K::Key,
    max_count: Option<usize>,
) -> Vec<(K::Owned, V)>
where
    K: KeyShape,
    V: Ord + Clone,
{
    let Some(node) = trie.node(prefix) else {
        trace!("prefix {prefix:?} not in trie");
        return Vec::new();
    };

    let mut ranked: Vec<(K::Owned, V)> = node
        .iter()
        .map(|(suffix, value)| (K::join(prefix, suffix), value.clone()))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    if let Some(max_count) = max_count {
        ranked.truncate(max_count);
    }

    trace!("prefix {prefix:?}: {} completions", ranked.len());
    ranked
}

/// The most frequent keys starting with `prefix`, at most `max_count` of them.
///
/// # Examples
///
/// ```
/// use lexitrie::corpus::make_word_trie;
/// use lexitrie::query::autocomplete;
///
/// let trie = make_word_trie("bat bat bark bar").unwrap();
/// assert_eq!(autocomplete(&trie, "ba", Some(1)), vec!["bat"]);
/// assert!(autocomplete(&trie, "be", Some(1)).is_empty());
/// ```
pub fn autocomplete<K, V>(
    trie: &Trie<K, V>,
    prefix: &K::Key,
    max_count: Option<usize>,
) -> Vec<K::Owned>
where
    K: KeyShape,
    V: Ord + Clone,
{
    ranked_completions(trie, prefix, max_count)
        .into_iter()
        .map(|(key, _)| key)
        .collect()
}

/// [`autocomplete`] over a runtime-locked trie.
///
/// Fails with a type mismatch when `prefix` has the other kind than the
/// trie's keys. An unlocked trie has no completions.
pub fn autocomplete_any<'k, V>(
    trie: &AnyTrie<V>,
    prefix: impl Into<Key<'k>>,
    max_count: Option<usize>,
) -> Result<Vec<OwnedKey>>
where
    V: Ord + Clone,
{
    let prefix = prefix.into();
    trie.check_kind(prefix.kind())?;

    Ok(match (trie, prefix) {
        (AnyTrie::Chars(trie), Key::Chars(prefix)) => autocomplete(trie, prefix, max_count)
            .into_iter()
            .map(OwnedKey::Chars)
            .collect(),
        (AnyTrie::Tokens(trie), Key::Tokens(prefix)) => autocomplete(trie, prefix, max_count)
            .into_iter()
            .map(OwnedKey::Tokens)
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trie::{CharTrie, TokenTrie};

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn bat_trie() -> CharTrie<u32> {
        let mut trie = CharTrie::new();
        trie.set("bat", 2);
        trie.set("bark", 1);
        trie.set("bar", 1);
        trie
    }

    #[test]
    fn test_highest_frequency_first() {
        let trie = bat_trie();
        assert_eq!(autocomplete(&trie, "ba", Some(1)), vec!["bat"]);
        assert!(autocomplete(&trie, "be", Some(1)).is_empty());
    }

    #[test]
    fn test_ties_keep_enumeration_order() {
        let trie = bat_trie();
        assert_eq!(autocomplete(&trie, "ba", None), vec!["bat", "bar", "bark"]);
        assert_eq!(
            ranked_completions(&trie, "bar", None),
            vec![("bar".to_string(), 1), ("bark".to_string(), 1)]
        );
    }

    #[test]
    fn test_prefix_is_itself_a_key() {
        let trie = bat_trie();
        assert_eq!(autocomplete(&trie, "bat", None), vec!["bat"]);
    }

    #[test]
    fn test_empty_prefix_and_zero_count() {
        let trie = bat_trie();
        assert_eq!(autocomplete(&trie, "", None).len(), 3);
        assert!(autocomplete(&trie, "ba", Some(0)).is_empty());
    }

    #[test]
    fn test_junction_prefix_after_delete() {
        let mut trie = bat_trie();
        trie.delete("bar").unwrap();
        assert_eq!(autocomplete(&trie, "bar", None), vec!["bark"]);
    }

    #[test]
    fn test_token_prefix() {
        let mut trie = TokenTrie::new();
        trie.set(&tokens(&["said", "alice"]), 3u32);
        trie.set(&tokens(&["said", "the", "caterpillar"]), 1);
        trie.set(&tokens(&["said", "the", "march", "hare"]), 2);
        trie.set(&tokens(&["wow"]), 5);

        assert_eq!(
            autocomplete(&trie, &tokens(&["said", "the"]), None),
            vec![
                tokens(&["said", "the", "march", "hare"]),
                tokens(&["said", "the", "caterpillar"]),
            ]
        );
        assert_eq!(
            autocomplete(&trie, &tokens(&[]), Some(2)),
            vec![tokens(&["wow"]), tokens(&["said", "alice"])]
        );
    }

    #[test]
    fn test_any_trie_kind_check() {
        let mut trie = AnyTrie::new();
        trie.set("bat", 2u32).unwrap();
        trie.set("bar", 1).unwrap();

        let keys = autocomplete_any(&trie, "ba", None).unwrap();
        assert_eq!(
            keys,
            vec![OwnedKey::Chars("bat".into()), OwnedKey::Chars("bar".into())]
        );

        let err = autocomplete_any(&trie, &tokens(&["ba"]), None).unwrap_err();
        assert!(err.is_type_mismatch());

        let unlocked: AnyTrie<u32> = AnyTrie::new();
        assert!(autocomplete_any(&unlocked, "ba", None).unwrap().is_empty());
    }
}
