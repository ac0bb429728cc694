//! Route table configuration module.
//!
//! This module defines how route paths are written in configuration files
//! and the list of routes loaded into the trie at startup.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// A single route: a separator-delimited path and the value stored there.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteEntry {
    /// Path of the route, e.g. `user/add`
    pub path: String,

    /// Value stored at the path
    pub value: String,
}

impl RouteEntry {
    /// Creates a new route entry.
    pub fn new<P: Into<String>, V: Into<String>>(path: P, value: V) -> Self {
        Self {
            path: path.into(),
            value: value.into(),
        }
    }
}

/// Route table configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutesConfig {
    /// Separator between path segments
    pub separator: String,

    /// Whether to trim surrounding whitespace from each segment
    pub trim_segments: bool,

    /// Routes to load, applied in order (later entries overwrite earlier ones)
    pub entries: Vec<RouteEntry>,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            separator: "/".to_string(),
            trim_segments: true,
            entries: vec![
                RouteEntry::new("", "keypath"),
                RouteEntry::new("help", "show help"),
                RouteEntry::new("user", "user commands"),
                RouteEntry::new("user/add", "add a user"),
                RouteEntry::new("user/remove", "remove a user"),
            ],
        }
    }
}

impl Validate for RoutesConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.separator.is_empty() {
            return Err(ConfigError::ValidationError(
                "separator cannot be empty".to_string(),
            ));
        }

        for entry in &self.entries {
            if entry.value.trim().is_empty() {
                return Err(ConfigError::InvalidRoute {
                    path: entry.path.clone(),
                    message: "value cannot be empty".to_string(),
                });
            }
        }

        Ok(())
    }
}
