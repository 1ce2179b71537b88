//! Frequency-weighted prefix tree.
//!
//! [`Trie`] is an ordered associative container keyed by sequences of atoms.
//! Each node holds an optional payload; a key is present exactly when the
//! node at the end of its path carries one. Nodes are created lazily along
//! inserted paths and are never pruned: deleting a key only clears its
//! payload, so a deleted-then-reinserted key reuses the same node.
//!
//! The key shape is fixed by the type parameter: [`CharTrie`] takes `&str`
//! keys, [`TokenTrie`] takes `&[String]` keys. Callers that only know the key
//! shape at runtime use [`AnyTrie`], which locks to the kind of its first key.
//!
//! # Examples
//!
//! ```
//! use lexitrie::trie::CharTrie;
//!
//! let mut trie = CharTrie::new();
//! trie.set("bat", 2);
//! trie.set("bar", 1);
//!
//! assert_eq!(trie.get("bat").unwrap(), &2);
//! assert!(trie.get("ba").unwrap_err().is_not_found());
//!
//! let keys: Vec<String> = trie.iter().map(|(key, _)| key).collect();
//! assert_eq!(keys, vec!["bat", "bar"]);
//! ```

pub mod any;
pub mod iter;
pub mod key;
pub mod node;

pub use any::{AnyIter, AnyTrie, Key, OwnedKey};
pub use iter::Iter;
pub use key::{CharSequence, KeyKind, KeyShape, TokenSequence};
pub use node::TrieNode;

use std::fmt;

use crate::error::{LexitrieError, Result};

/// A trie keyed by strings, one atom per character.
pub type CharTrie<V> = Trie<CharSequence, V>;

/// A trie keyed by token sequences, one atom per token.
pub type TokenTrie<V> = Trie<TokenSequence, V>;

/// Prefix tree over keys of shape `K` with payloads of type `V`.
pub struct Trie<K: KeyShape, V> {
    root: TrieNode<K, V>,
    /// Number of present keys.
    len: usize,
}

impl<K: KeyShape, V> Trie<K, V> {
    /// Create an empty trie.
    pub fn new() -> Self {
        Trie {
            root: TrieNode::new(),
            len: 0,
        }
    }

    /// The key kind this trie accepts.
    pub fn kind(&self) -> KeyKind {
        K::KIND
    }

    /// Insert `key` with `value`, or overwrite its value.
    ///
    /// Returns the previous value if the key was present.
    pub fn set(&mut self, key: &K::Key, value: V) -> Option<V> {
        let previous = self.root.descend_or_insert(key).replace_value(value);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// Get the value stored for `key`.
    ///
    /// Fails with [`LexitrieError::NotFound`] when no node exists for the key
    /// or the node is only a junction.
    pub fn get(&self, key: &K::Key) -> Result<&V> {
        self.root
            .descend(key)
            .and_then(TrieNode::value)
            .ok_or_else(|| LexitrieError::not_found(format!("{key:?}")))
    }

    /// Remove `key`, returning its value.
    ///
    /// The node stays in the tree as a junction.
    pub fn delete(&mut self, key: &K::Key) -> Result<V> {
        let value = self
            .root
            .descend_mut(key)
            .and_then(TrieNode::take_value)
            .ok_or_else(|| LexitrieError::not_found(format!("{key:?}")))?;
        self.len -= 1;
        Ok(value)
    }

    /// Whether `key` is present.
    pub fn contains(&self, key: &K::Key) -> bool {
        self.get(key).is_ok()
    }

    /// Iterate every present key with its value, depth-first in insertion order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.root.iter()
    }

    /// The node reached by walking `prefix` from the root, if every atom exists.
    pub fn node(&self, prefix: &K::Key) -> Option<&TrieNode<K, V>> {
        self.root.descend(prefix)
    }

    /// The root node.
    pub fn root(&self) -> &TrieNode<K, V> {
        &self.root
    }

    /// Number of present keys.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no key is present.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<K: KeyShape, V> Default for Trie<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: KeyShape, V: Clone> Clone for Trie<K, V> {
    fn clone(&self) -> Self {
        Trie {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<K: KeyShape, V: fmt::Debug> fmt::Debug for Trie<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K: KeyShape, V> IntoIterator for &'a Trie<K, V> {
    type Item = (K::Owned, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
