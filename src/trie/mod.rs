// Copyright (c) 2025 Keypath Trie Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Keypath Trie Implementation
//!
//! This module provides a plain, uncompressed prefix tree keyed by sequences
//! of arbitrary hashable elements. Any node may hold a value, so both exact
//! lookups and longest-prefix lookups are supported.
//!
//! # Example
//!
//! ```
//! use keypath_trie::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.put(&["user", "add"], "add a user");
//! trie.put(&["user"], "user commands");
//!
//! assert_eq!(trie.get(&["user", "add"]), Ok(&"add a user"));
//! assert_eq!(trie.deepest_match(&["user", "remove", "bob"]), &["user"]);
//! assert_eq!(trie.find(&["user", "remove", "bob"]), Ok(&"user commands"));
//! ```

mod error;
mod iter;
mod node;

use std::hash::Hash;

pub use error::TrieError;
pub use iter::ValueIter;
pub use node::TrieNode;

/// Result type for trie lookups
pub type TrieResult<T, K> = Result<T, TrieError<K>>;

/// A prefix tree mapping key paths to values.
///
/// Key features:
/// * Values may live at any depth, including the root (the empty path)
/// * Longest-prefix matching through [`Trie::deepest_match`] and [`Trie::find`]
/// * Values are traversed parent-before-child, either lazily or eagerly
///
/// Paths are never removed once created, and intermediate nodes created
/// along the way hold no value until assigned one.
#[derive(Debug, Clone)]
pub struct Trie<K, V> {
    /// The root node, corresponding to the empty path
    root: TrieNode<K, V>,
}

impl<K, V> Trie<K, V> {
    /// Creates a new empty trie whose root holds no value.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(None),
        }
    }

    /// Returns the root node.
    pub fn root(&self) -> &TrieNode<K, V> {
        &self.root
    }

    /// Returns a lazy iterator over all values, parent before child.
    ///
    /// Every call starts a fresh traversal.
    pub fn value_iter(&self) -> ValueIter<'_, K, V> {
        ValueIter::new(&self.root)
    }

    /// Collects all values, parent before child.
    pub fn values(&self) -> Vec<&V> {
        self.root.value_list()
    }

    /// Number of values stored in the trie.
    ///
    /// This walks the whole tree, so it's an O(n) operation.
    pub fn len(&self) -> usize {
        self.value_iter().count()
    }

    /// Whether the trie holds no value at all.
    pub fn is_empty(&self) -> bool {
        self.value_iter().next().is_none()
    }
}

impl<K: Eq + Hash + Clone, V> Trie<K, V> {
    /// Returns the longest prefix of `keys` that exists as a chain of nodes.
    ///
    /// The walk stops at the first element without a matching child. An empty
    /// slice is returned when `keys` is empty or its first element is unknown.
    pub fn deepest_match<'k>(&self, keys: &'k [K]) -> &'k [K] {
        let mut current = &self.root;
        let mut matched = 0;

        for key in keys {
            match current.child(key) {
                Some(next) => {
                    current = next;
                    matched += 1;
                }
                None => break,
            }
        }

        &keys[..matched]
    }

    /// Returns the value stored at exactly `path`.
    ///
    /// # Errors
    ///
    /// * `TrieError::PathNotFound` with the failing key if some element of
    ///   `path` has no matching child.
    /// * `TrieError::PathNotFound` without a key if the node reached holds no
    ///   value.
    pub fn get(&self, path: &[K]) -> TrieResult<&V, K> {
        self.node(path)?.value().ok_or(TrieError::PathNotFound {
            key: None,
            depth: path.len(),
        })
    }

    /// Returns a mutable reference to the value stored at exactly `path`.
    ///
    /// Fails the same way as [`Trie::get`].
    pub fn get_mut(&mut self, path: &[K]) -> TrieResult<&mut V, K> {
        let mut current = &mut self.root;
        for (depth, key) in path.iter().enumerate() {
            current = current
                .child_mut(key)
                .ok_or_else(|| TrieError::PathNotFound {
                    key: Some(key.clone()),
                    depth,
                })?;
        }
        current.value_mut().ok_or(TrieError::PathNotFound {
            key: None,
            depth: path.len(),
        })
    }

    /// Returns the value at the deepest node reachable along `keys`.
    ///
    /// This is [`Trie::get`] applied to [`Trie::deepest_match`], so a missing
    /// child can never cause the failure.
    ///
    /// # Errors
    ///
    /// `TrieError::PathNotFound` without a key if the deepest matched node
    /// holds no value. When nothing matches, that node is the root.
    pub fn find(&self, keys: &[K]) -> TrieResult<&V, K> {
        self.get(self.deepest_match(keys))
    }

    /// Whether a value is stored at exactly `path`.
    pub fn contains(&self, path: &[K]) -> bool {
        self.get(path).is_ok()
    }

    /// Stores `value` at `keys`, creating empty intermediate nodes as needed.
    ///
    /// An existing value at `keys` is replaced and returned; the children of
    /// that node are not touched.
    pub fn put(&mut self, keys: &[K], value: V) -> Option<V> {
        let mut current = &mut self.root;
        for (depth, key) in keys.iter().enumerate() {
            if current.child(key).is_none() {
                tracing::trace!(depth, "Creating intermediate trie node");
            }
            current = current.set_child(key.clone(), None);
        }
        current.set_value(value)
    }

    fn node(&self, path: &[K]) -> TrieResult<&TrieNode<K, V>, K> {
        let mut current = &self.root;
        for (depth, key) in path.iter().enumerate() {
            current = current.child(key).ok_or_else(|| TrieError::PathNotFound {
                key: Some(key.clone()),
                depth,
            })?;
        }
        Ok(current)
    }
}

impl<K, V> Default for Trie<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone, V> Extend<(Vec<K>, V)> for Trie<K, V> {
    fn extend<I: IntoIterator<Item = (Vec<K>, V)>>(&mut self, iter: I) {
        for (path, value) in iter {
            self.put(&path, value);
        }
    }
}

impl<K: Eq + Hash + Clone, V> FromIterator<(Vec<K>, V)> for Trie<K, V> {
    fn from_iter<I: IntoIterator<Item = (Vec<K>, V)>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

impl<'a, K, V> IntoIterator for &'a Trie<K, V> {
    type Item = &'a V;
    type IntoIter = ValueIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.value_iter()
    }
}
