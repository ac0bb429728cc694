//! Keypath Trie Library
//!
//! A generic prefix tree keyed by sequences of hashable elements, storing a
//! value at any node. The [`trie`] module is the core of the crate; the
//! [`routes`] module builds a string route table on top of it, loaded through
//! [`config`] and used by the `keypath` binary.
//!
//! # Architecture
//!
//! - Nodes exclusively own their children; there are no parent links
//! - Lookups walk from the root one key element at a time
//! - Value traversal is parent-before-child and never recurses

pub mod config;
pub mod error;
pub mod routes;
pub mod trie;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use routes::RouteTable;
pub use trie::{Trie, TrieError, TrieNode, TrieResult, ValueIter};

/// Version information for keypath-trie.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
