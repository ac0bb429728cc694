//! Test modules for keypath-trie.
//!
//! This module contains crate-level tests that span more than one module:
//! - Property-based tests of the trie using proptest
//! - Configuration loading tests against temporary files
//! - Error conversion and reporting tests
//! - Shared strategies and fixtures

pub mod config_tests;
pub mod trie_property_tests;

pub use test_utils::{path_strategy, paths_strategy, TestFixture};
