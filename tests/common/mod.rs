//! Shared test utilities for git-file-switcher integration tests
//!
//! Every test runs against a real git repository in a temporary directory,
//! with cache and config directories isolated per test.

pub mod assertions;
pub mod fixtures;
pub mod repository;
