//! Depth-first iteration over present keys.

use crate::trie::key::KeyShape;
use crate::trie::node::TrieNode;

struct Frame<'a, K: KeyShape, V> {
    /// Length of the path above this node.
    depth: usize,
    /// Atom on the edge into this node; `None` for the starting node.
    atom: Option<&'a K::Atom>,
    node: &'a TrieNode<K, V>,
}

/// Lazy pre-order traversal yielding `(key, value)` for every present key.
///
/// Keys are relative to the node the iterator was created from. Children are
/// visited in first-insertion order. The traversal keeps an explicit stack,
/// so deep keys (long token sequences) cannot overflow the call stack.
/// Every call to `iter()` starts a fresh traversal.
pub struct Iter<'a, K: KeyShape, V> {
    stack: Vec<Frame<'a, K, V>>,
    path: Vec<K::Atom>,
}

impl<'a, K: KeyShape, V> Iter<'a, K, V> {
    pub(crate) fn new(start: &'a TrieNode<K, V>) -> Self {
        Iter {
            stack: vec![Frame {
                depth: 0,
                atom: None,
                node: start,
            }],
            path: Vec::new(),
        }
    }
}

impl<'a, K: KeyShape, V> Iterator for Iter<'a, K, V> {
    type Item = (K::Owned, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(Frame { depth, atom, node }) = self.stack.pop() {
            self.path.truncate(depth);
            if let Some(atom) = atom {
                self.path.push(atom.clone());
            }

            let child_depth = self.path.len();
            // Reversed so the first-inserted child is popped first.
            self.stack
                .extend(node.children().rev().map(|(atom, child)| Frame {
                    depth: child_depth,
                    atom: Some(atom),
                    node: child,
                }));

            if let Some(value) = node.value() {
                return Some((K::collect_key(&self.path), value));
            }
        }
        None
    }
}
