// Copyright (c) 2025 Keypath Trie Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Error types for the keypath trie.

/// Errors that can occur in trie lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieError<K> {
    /// No value is reachable at the requested path.
    ///
    /// `key` is the first path element without a matching child. It is `None`
    /// when every element matched but the node reached holds no value.
    #[error("Path not found at depth {depth}, missing key: {key:?}")]
    PathNotFound {
        /// The failing key element, if the walk stopped on a missing child.
        key: Option<K>,
        /// Number of path elements consumed before the failure.
        depth: usize,
    },
}

impl<K> TrieError<K> {
    /// Depth at which the lookup failed.
    pub fn depth(&self) -> usize {
        match self {
            Self::PathNotFound { depth, .. } => *depth,
        }
    }

    /// The key element that had no matching child, if any.
    pub fn key(&self) -> Option<&K> {
        match self {
            Self::PathNotFound { key, .. } => key.as_ref(),
        }
    }
}
