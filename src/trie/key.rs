//! Key shapes accepted by the trie.
//!
//! A trie is keyed either by strings, whose atoms are single characters, or
//! by token sequences, whose atoms are whole tokens. The shape is chosen at
//! the type level through the [`KeyShape`] implementors [`CharSequence`] and
//! [`TokenSequence`], so a trie can never receive a key of the other kind.

use std::borrow::{Borrow, Cow};
use std::fmt::{self, Debug};
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Runtime tag for the two supported key shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyKind {
    /// String keys, one atom per character.
    Chars,
    /// Token-sequence keys, one atom per token.
    Tokens,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyKind::Chars => write!(f, "character"),
            KeyKind::Tokens => write!(f, "token"),
        }
    }
}

/// Describes how a key decomposes into atoms and how atoms reassemble into a key.
pub trait KeyShape {
    /// One indivisible unit of a key.
    type Atom: Clone + Eq + Hash + Debug + 'static;
    /// Borrowed key form passed to lookups.
    type Key: ?Sized + Debug;
    /// Owned key form produced by iteration.
    type Owned: Clone + Debug + Eq + Hash + Borrow<Self::Key>;

    /// The runtime tag of this shape.
    const KIND: KeyKind;

    /// Split a key into its atoms, in order.
    fn atoms(key: &Self::Key) -> impl Iterator<Item = Cow<'_, Self::Atom>>;

    /// Rebuild an owned key from a path of atoms.
    fn collect_key(atoms: &[Self::Atom]) -> Self::Owned;

    /// Concatenate a borrowed prefix and an owned suffix.
    fn join(prefix: &Self::Key, suffix: Self::Owned) -> Self::Owned;
}

/// String keys whose atoms are `char`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CharSequence;

impl KeyShape for CharSequence {
    type Atom = char;
    type Key = str;
    type Owned = String;

    const KIND: KeyKind = KeyKind::Chars;

    fn atoms(key: &str) -> impl Iterator<Item = Cow<'_, char>> {
        key.chars().map(Cow::Owned)
    }

    fn collect_key(atoms: &[char]) -> String {
        atoms.iter().collect()
    }

    fn join(prefix: &str, suffix: String) -> String {
        let mut key = String::with_capacity(prefix.len() + suffix.len());
        key.push_str(prefix);
        key.push_str(&suffix);
        key
    }
}

/// Token-sequence keys whose atoms are whole tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TokenSequence;

impl KeyShape for TokenSequence {
    type Atom = String;
    type Key = [String];
    type Owned = Vec<String>;

    const KIND: KeyKind = KeyKind::Tokens;

    fn atoms(key: &[String]) -> impl Iterator<Item = Cow<'_, String>> {
        key.iter().map(Cow::Borrowed)
    }

    fn collect_key(atoms: &[String]) -> Vec<String> {
        atoms.to_vec()
    }

    fn join(prefix: &[String], suffix: Vec<String>) -> Vec<String> {
        let mut key = Vec::with_capacity(prefix.len() + suffix.len());
        key.extend_from_slice(prefix);
        key.extend(suffix);
        key
    }
}
