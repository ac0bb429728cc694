// Copyright (c) 2025 Keypath Trie Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Lazy value traversal over a trie.

use hashbrown::hash_map::Values;
use std::iter::FusedIterator;

use super::node::TrieNode;

/// Iterator over the values of a trie, depth-first pre-order.
///
/// The traversal state is a stack holding one child iterator per level of
/// the current path, so no recursion is involved and the stack never grows
/// past the depth of the trie plus one. Each call to
/// [`Trie::value_iter`](super::Trie::value_iter) gets its own independent
/// worklist. A node's value is always yielded before any value in its
/// subtree; sibling order is unspecified.
#[derive(Debug)]
pub struct ValueIter<'a, K, V> {
    /// Node whose value has not been looked at yet, set until the first step
    start: Option<&'a TrieNode<K, V>>,

    /// Remaining children at each level of the current path
    levels: Vec<Values<'a, K, TrieNode<K, V>>>,

    /// Value found by `has_next` and not yet returned
    peeked: Option<&'a V>,
}

impl<'a, K, V> ValueIter<'a, K, V> {
    pub(crate) fn new(root: &'a TrieNode<K, V>) -> Self {
        Self {
            start: Some(root),
            levels: Vec::new(),
            peeked: None,
        }
    }

    /// Whether another value remains.
    ///
    /// Looking ahead may advance the traversal, but the value found is kept
    /// and returned by the next call to `next`.
    pub fn has_next(&mut self) -> bool {
        if self.peeked.is_none() {
            self.peeked = self.advance();
        }
        self.peeked.is_some()
    }

    fn advance(&mut self) -> Option<&'a V> {
        if let Some(start) = self.start.take() {
            self.levels.push(start.child_values());
            if let Some(value) = start.value() {
                return Some(value);
            }
        }

        while let Some(siblings) = self.levels.last_mut() {
            match siblings.next() {
                Some(node) => {
                    // Descend before yielding so the subtree follows the value
                    self.levels.push(node.child_values());
                    if let Some(value) = node.value() {
                        return Some(value);
                    }
                }
                None => {
                    self.levels.pop();
                }
            }
        }
        None
    }
}

impl<'a, K, V> Iterator for ValueIter<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.peeked.take().or_else(|| self.advance())
    }
}

impl<K, V> FusedIterator for ValueIter<'_, K, V> {}
