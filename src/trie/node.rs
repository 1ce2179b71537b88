//! Trie node.

use std::borrow::Cow;
use std::fmt;

use ahash::AHashMap;

use crate::trie::iter::Iter;
use crate::trie::key::KeyShape;

/// A single trie node: an optional payload plus children keyed by atom.
///
/// A node without a payload is a structural junction only. Children keep the
/// order in which their atoms were first inserted; the hash index is only
/// used for lookup.
pub struct TrieNode<K: KeyShape, V> {
    /// Payload of the key ending here, `None` when no key ends here.
    value: Option<V>,
    /// Children in first-insertion order.
    children: Vec<(K::Atom, TrieNode<K, V>)>,
    /// Atom to position in `children`.
    index: AHashMap<K::Atom, usize>,
}

impl<K: KeyShape, V> TrieNode<K, V> {
    /// Create an empty junction node.
    pub fn new() -> Self {
        TrieNode {
            value: None,
            children: Vec::new(),
            index: AHashMap::new(),
        }
    }

    /// The payload stored at this node, if a key ends here.
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Whether a key ends at this node.
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Look up the child reached by `atom`.
    pub fn child(&self, atom: &K::Atom) -> Option<&TrieNode<K, V>> {
        self.index.get(atom).map(|&slot| &self.children[slot].1)
    }

    /// Children with their atoms, in first-insertion order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = &(K::Atom, TrieNode<K, V>)> {
        self.children.iter()
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Walk down from this node along the atoms of `key`.
    pub fn descend(&self, key: &K::Key) -> Option<&TrieNode<K, V>> {
        let mut node = self;
        for atom in K::atoms(key) {
            node = node.child(&atom)?;
        }
        Some(node)
    }

    /// Present keys of this subtree, relative to this node.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self)
    }

    pub(crate) fn descend_mut(&mut self, key: &K::Key) -> Option<&mut TrieNode<K, V>> {
        let mut node = self;
        for atom in K::atoms(key) {
            let slot = *node.index.get(&*atom)?;
            node = &mut node.children[slot].1;
        }
        Some(node)
    }

    /// Walk down along `key`, creating missing nodes on the way.
    pub(crate) fn descend_or_insert(&mut self, key: &K::Key) -> &mut TrieNode<K, V> {
        let mut node = self;
        for atom in K::atoms(key) {
            node = node.child_or_insert(atom);
        }
        node
    }

    fn child_or_insert(&mut self, atom: Cow<'_, K::Atom>) -> &mut TrieNode<K, V> {
        let existing = self.index.get(atom.as_ref()).copied();
        let slot = match existing {
            Some(slot) => slot,
            None => {
                let slot = self.children.len();
                let atom = atom.into_owned();
                self.index.insert(atom.clone(), slot);
                self.children.push((atom, TrieNode::new()));
                slot
            }
        };
        &mut self.children[slot].1
    }

    pub(crate) fn replace_value(&mut self, value: V) -> Option<V> {
        self.value.replace(value)
    }

    pub(crate) fn take_value(&mut self) -> Option<V> {
        self.value.take()
    }
}

impl<K: KeyShape, V> Default for TrieNode<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: KeyShape, V> Drop for TrieNode<K, V> {
    fn drop(&mut self) {
        // Unlink descendants onto a heap stack; the default recursive drop
        // would overflow on very long keys.
        let mut pending: Vec<TrieNode<K, V>> =
            self.children.drain(..).map(|(_, node)| node).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain(..).map(|(_, child)| child));
        }
    }
}

/// A source node whose children are being copied.
struct CloneFrame<'a, K: KeyShape, V> {
    source: &'a TrieNode<K, V>,
    /// Copies of `source.children[..children.len()]`.
    children: Vec<(K::Atom, TrieNode<K, V>)>,
}

impl<'a, K: KeyShape, V: Clone> CloneFrame<'a, K, V> {
    fn new(source: &'a TrieNode<K, V>) -> Self {
        CloneFrame {
            source,
            children: Vec::with_capacity(source.children.len()),
        }
    }

    fn finish(self) -> TrieNode<K, V> {
        TrieNode {
            value: self.source.value.clone(),
            children: self.children,
            index: self.source.index.clone(),
        }
    }
}

impl<K: KeyShape, V: Clone> Clone for TrieNode<K, V> {
    /// Copies the subtree bottom-up from an explicit stack, so clone depth is
    /// not limited by the call stack.
    fn clone(&self) -> Self {
        let mut stack = vec![CloneFrame::new(self)];
        let mut copy = None;

        while let Some(frame) = stack.last_mut() {
            let source = frame.source;
            if let Some((_, child)) = source.children.get(frame.children.len()) {
                stack.push(CloneFrame::new(child));
                continue;
            }

            let Some(done) = stack.pop() else { break };
            let node = done.finish();
            match stack.last_mut() {
                Some(parent) => {
                    let atom = parent.source.children[parent.children.len()].0.clone();
                    parent.children.push((atom, node));
                }
                None => copy = Some(node),
            }
        }

        copy.unwrap_or_else(TrieNode::new)
    }
}

/// Shows the payload and the atoms of direct children only; use the
/// [`Trie`](crate::trie::Trie) `Debug` impl to list every key.
impl<K: KeyShape, V: fmt::Debug> fmt::Debug for TrieNode<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let atoms: Vec<&K::Atom> = self.children.iter().map(|(atom, _)| atom).collect();
        f.debug_struct("TrieNode")
            .field("value", &self.value)
            .field("children", &atoms)
            .finish()
    }
}
