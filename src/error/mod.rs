//! Error module for keypath-trie.
//!
//! This module provides the application-level error type used by the route
//! table and the command-line tool. Trie lookups keep their own generic
//! [`TrieError`](crate::trie::TrieError), which converts into [`KeypathError`]
//! for string-keyed tries.

use std::fmt::{Display, Formatter};
use thiserror::Error;

use crate::trie::TrieError;

pub mod config;

/// Result type alias used throughout keypath-trie.
pub type KeypathResult<T> = Result<T, KeypathError>;

/// Core error enum for keypath-trie.
#[derive(Error, Debug)]
pub enum KeypathError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Lookup failures in a string-keyed trie.
    #[error("Lookup error: {0}")]
    Trie(#[from] TrieError<String>),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure to render a configuration as TOML.
    #[error("Serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure carrying the component an error came from.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: KeypathError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    pub fn new<S: Into<String>>(error: KeypathError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
pub trait ErrorReporter: std::fmt::Debug {
    /// Report an error with context.
    fn report(&self, context: ErrorContext);
}

/// Error reporter that logs errors using the tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}
