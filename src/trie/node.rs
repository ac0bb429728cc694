// Copyright (c) 2025 Keypath Trie Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Node implementation for the keypath trie.
//!
//! Each node owns an optional value and the map of its children. Nodes never
//! hold a reference to their parent; the tree is navigated top-down only.

use hashbrown::hash_map::Values;
use hashbrown::HashMap;
use std::hash::Hash;

use super::iter::ValueIter;

/// A node in the keypath trie.
///
/// Intermediate nodes created while inserting a longer path carry no value
/// until a later insertion targets them directly.
#[derive(Debug, Clone)]
pub struct TrieNode<K, V> {
    /// Value stored at the exact path leading to this node
    value: Option<V>,

    /// Child nodes keyed by the next path element
    children: HashMap<K, TrieNode<K, V>>,
}

impl<K, V> TrieNode<K, V> {
    /// Creates a node holding the given value and no children.
    pub fn new(value: Option<V>) -> Self {
        Self {
            value,
            children: HashMap::new(),
        }
    }

    /// Returns the value stored at this node, if any.
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Returns a mutable reference to the value stored at this node, if any.
    pub fn value_mut(&mut self) -> Option<&mut V> {
        self.value.as_mut()
    }

    /// Replaces the value of this node, returning the previous one.
    ///
    /// Children are left untouched.
    pub fn set_value(&mut self, value: V) -> Option<V> {
        self.value.replace(value)
    }

    /// Whether a value has been stored at this node.
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Iterates over the direct children of this node in unspecified order.
    pub fn children(&self) -> impl Iterator<Item = (&K, &TrieNode<K, V>)> {
        self.children.iter()
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Collects this node's value followed by the values of all descendants.
    ///
    /// A node's own value always precedes the values below it. The relative
    /// order of sibling subtrees follows the child map and is unspecified.
    pub fn value_list(&self) -> Vec<&V> {
        ValueIter::new(self).collect()
    }

    /// Iterator over the child nodes only, used by the value iterator.
    pub(crate) fn child_values(&self) -> Values<'_, K, TrieNode<K, V>> {
        self.children.values()
    }
}

impl<K: Eq + Hash, V> TrieNode<K, V> {
    /// Returns the child for `key`, if present.
    pub fn child(&self, key: &K) -> Option<&TrieNode<K, V>> {
        self.children.get(key)
    }

    /// Returns a mutable reference to the child for `key`, if present.
    pub fn child_mut(&mut self, key: &K) -> Option<&mut TrieNode<K, V>> {
        self.children.get_mut(key)
    }

    /// Returns the child for `key`, creating it with `value` when absent.
    ///
    /// An existing child is returned as is: its value and subtree are kept
    /// and `value` is dropped.
    pub fn set_child(&mut self, key: K, value: Option<V>) -> &mut TrieNode<K, V> {
        self.children
            .entry(key)
            .or_insert_with(|| TrieNode::new(value))
    }
}

impl<K, V> Default for TrieNode<K, V> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<K, V> Drop for TrieNode<K, V> {
    fn drop(&mut self) {
        if self.children.is_empty() {
            return;
        }
        // Detach descendants into a flat worklist so each node is dropped
        // with no children left, keeping the stack flat on deep paths.
        let mut pending: Vec<TrieNode<K, V>> =
            self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}
