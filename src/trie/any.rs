//! Trie whose key kind is decided by its first insertion.
//!
//! [`AnyTrie`] serves callers that hold keys of either shape behind one
//! value, such as a driver choosing between word and sentence corpora at
//! runtime. It starts unlocked, locks to the kind of the first key written,
//! and rejects keys of the other kind with [`LexitrieError::TypeMismatch`].

use serde::{Deserialize, Serialize};

use crate::error::{LexitrieError, Result};
use crate::trie::iter::Iter;
use crate::trie::key::{CharSequence, KeyKind, TokenSequence};
use crate::trie::{CharTrie, TokenTrie};

/// A borrowed key of either shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    Chars(&'a str),
    Tokens(&'a [String]),
}

impl Key<'_> {
    /// The kind of this key.
    pub fn kind(&self) -> KeyKind {
        match self {
            Key::Chars(_) => KeyKind::Chars,
            Key::Tokens(_) => KeyKind::Tokens,
        }
    }
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(key: &'a str) -> Self {
        Key::Chars(key)
    }
}

impl<'a> From<&'a String> for Key<'a> {
    fn from(key: &'a String) -> Self {
        Key::Chars(key)
    }
}

impl<'a> From<&'a [String]> for Key<'a> {
    fn from(key: &'a [String]) -> Self {
        Key::Tokens(key)
    }
}

impl<'a> From<&'a Vec<String>> for Key<'a> {
    fn from(key: &'a Vec<String>) -> Self {
        Key::Tokens(key)
    }
}

/// An owned key of either shape, as produced by iteration and queries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OwnedKey {
    Chars(String),
    Tokens(Vec<String>),
}

impl OwnedKey {
    /// Borrow this key.
    pub fn as_key(&self) -> Key<'_> {
        match self {
            OwnedKey::Chars(key) => Key::Chars(key),
            OwnedKey::Tokens(key) => Key::Tokens(key),
        }
    }
}

/// A trie locked to the kind of its first inserted key.
#[derive(Debug, Clone, Default)]
pub enum AnyTrie<V> {
    /// Nothing inserted yet; either kind is accepted by the next `set`.
    #[default]
    Unlocked,
    Chars(CharTrie<V>),
    Tokens(TokenTrie<V>),
}

impl<V> AnyTrie<V> {
    /// Create an unlocked trie.
    pub fn new() -> Self {
        AnyTrie::Unlocked
    }

    /// The locked key kind, or `None` before the first insertion.
    pub fn kind(&self) -> Option<KeyKind> {
        match self {
            AnyTrie::Unlocked => None,
            AnyTrie::Chars(_) => Some(KeyKind::Chars),
            AnyTrie::Tokens(_) => Some(KeyKind::Tokens),
        }
    }

    /// Insert or overwrite `key`, locking the trie on first use.
    pub fn set<'k>(&mut self, key: impl Into<Key<'k>>, value: V) -> Result<Option<V>> {
        let key = key.into();
        if let AnyTrie::Unlocked = self {
            *self = match key.kind() {
                KeyKind::Chars => AnyTrie::Chars(CharTrie::new()),
                KeyKind::Tokens => AnyTrie::Tokens(TokenTrie::new()),
            };
        }

        match (self, key) {
            (AnyTrie::Chars(trie), Key::Chars(key)) => Ok(trie.set(key, value)),
            (AnyTrie::Tokens(trie), Key::Tokens(key)) => Ok(trie.set(key, value)),
            (this, key) => Err(this.mismatch(key)),
        }
    }

    /// Get the value for `key`.
    ///
    /// An unlocked trie holds no keys, so every lookup is not-found.
    pub fn get<'k>(&self, key: impl Into<Key<'k>>) -> Result<&V> {
        match (self, key.into()) {
            (AnyTrie::Chars(trie), Key::Chars(key)) => trie.get(key),
            (AnyTrie::Tokens(trie), Key::Tokens(key)) => trie.get(key),
            (AnyTrie::Unlocked, key) => Err(LexitrieError::not_found(format!("{key:?}"))),
            (this, key) => Err(this.mismatch(key)),
        }
    }

    /// Remove `key`, returning its value.
    pub fn delete<'k>(&mut self, key: impl Into<Key<'k>>) -> Result<V> {
        match (self, key.into()) {
            (AnyTrie::Chars(trie), Key::Chars(key)) => trie.delete(key),
            (AnyTrie::Tokens(trie), Key::Tokens(key)) => trie.delete(key),
            (AnyTrie::Unlocked, key) => Err(LexitrieError::not_found(format!("{key:?}"))),
            (this, key) => Err(this.mismatch(key)),
        }
    }

    /// Whether `get(key)` would succeed.
    pub fn contains<'k>(&self, key: impl Into<Key<'k>>) -> bool {
        self.get(key).is_ok()
    }

    /// Iterate every present key; an unlocked trie yields nothing.
    pub fn iter(&self) -> AnyIter<'_, V> {
        match self {
            AnyTrie::Unlocked => AnyIter::Empty,
            AnyTrie::Chars(trie) => AnyIter::Chars(trie.iter()),
            AnyTrie::Tokens(trie) => AnyIter::Tokens(trie.iter()),
        }
    }

    /// Number of present keys.
    pub fn len(&self) -> usize {
        match self {
            AnyTrie::Unlocked => 0,
            AnyTrie::Chars(trie) => trie.len(),
            AnyTrie::Tokens(trie) => trie.len(),
        }
    }

    /// Whether no key is present.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fail with a type mismatch unless `kind` agrees with the lock.
    pub fn check_kind(&self, kind: KeyKind) -> Result<()> {
        match self.kind() {
            Some(expected) if expected != kind => {
                Err(LexitrieError::type_mismatch(expected, kind))
            }
            _ => Ok(()),
        }
    }

    fn mismatch(&self, key: Key<'_>) -> LexitrieError {
        let expected = self.kind().unwrap_or(key.kind());
        LexitrieError::type_mismatch(expected, key.kind())
    }
}

impl<V> From<CharTrie<V>> for AnyTrie<V> {
    fn from(trie: CharTrie<V>) -> Self {
        AnyTrie::Chars(trie)
    }
}

impl<V> From<TokenTrie<V>> for AnyTrie<V> {
    fn from(trie: TokenTrie<V>) -> Self {
        AnyTrie::Tokens(trie)
    }
}

/// Iterator over an [`AnyTrie`].
pub enum AnyIter<'a, V> {
    Empty,
    Chars(Iter<'a, CharSequence, V>),
    Tokens(Iter<'a, TokenSequence, V>),
}

impl<'a, V> Iterator for AnyIter<'a, V> {
    type Item = (OwnedKey, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            AnyIter::Empty => None,
            AnyIter::Chars(iter) => iter.next().map(|(key, v)| (OwnedKey::Chars(key), v)),
            AnyIter::Tokens(iter) => iter.next().map(|(key, v)| (OwnedKey::Tokens(key), v)),
        }
    }
}
