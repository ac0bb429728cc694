//! Route table built on top of the keypath trie.
//!
//! A route table stores string values at separator-delimited paths such as
//! `user/add`, and resolves arbitrary input paths to the closest configured
//! route. It is what the `keypath` binary loads from configuration.

use crate::config::{RouteEntry, RoutesConfig};
use crate::error::KeypathResult;
use crate::trie::Trie;

/// String-keyed trie plus the rules used to split paths into segments.
#[derive(Debug, Clone)]
pub struct RouteTable {
    trie: Trie<String, String>,
    separator: String,
    trim_segments: bool,
}

impl RouteTable {
    /// Creates an empty route table using `separator` between segments.
    pub fn new<S: Into<String>>(separator: S, trim_segments: bool) -> Self {
        Self {
            trie: Trie::new(),
            separator: separator.into(),
            trim_segments,
        }
    }

    /// Builds a route table from configuration, inserting every entry in order.
    pub fn from_config(config: &RoutesConfig) -> Self {
        let mut table = Self::new(config.separator.clone(), config.trim_segments);
        for entry in &config.entries {
            table.insert_entry(entry);
        }
        tracing::info!(routes = config.entries.len(), "Route table loaded");
        table
    }

    fn insert_entry(&mut self, entry: &RouteEntry) {
        if let Some(previous) = self.insert(&entry.path, entry.value.clone()) {
            tracing::warn!(path = %entry.path, %previous, "Route defined twice, keeping the later value");
        }
    }

    /// Splits `path` into its segments.
    ///
    /// Empty segments are skipped, so `""`, `"/"` and `"//"` all name the root.
    pub fn segments(&self, path: &str) -> Vec<String> {
        path.split(self.separator.as_str())
            .map(|segment| {
                if self.trim_segments {
                    segment.trim()
                } else {
                    segment
                }
            })
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Stores `value` at `path`, returning the value it replaced.
    pub fn insert<V: Into<String>>(&mut self, path: &str, value: V) -> Option<String> {
        let segments = self.segments(path);
        self.trie.put(&segments, value.into())
    }

    /// Returns the value stored at exactly `path`.
    pub fn get(&self, path: &str) -> KeypathResult<&str> {
        let segments = self.segments(path);
        Ok(self.trie.get(&segments)?.as_str())
    }

    /// Returns the value of the longest configured prefix of `path`.
    pub fn find(&self, path: &str) -> KeypathResult<&str> {
        let segments = self.segments(path);
        Ok(self.trie.find(&segments)?.as_str())
    }

    /// Returns the longest configured prefix of `path`, joined by the separator.
    pub fn deepest_match(&self, path: &str) -> String {
        let segments = self.segments(path);
        self.trie.deepest_match(&segments).join(self.separator.as_str())
    }

    /// All route values, each before the values of its sub-routes.
    pub fn values(&self) -> Vec<&str> {
        self.trie.value_iter().map(String::as_str).collect()
    }

    /// Number of routes stored.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Whether no route is stored.
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// The underlying trie.
    pub fn trie(&self) -> &Trie<String, String> {
        &self.trie
    }
}
