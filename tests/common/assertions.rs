//! Common assertion helpers for command output

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for git repository error messages
pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("Not in a git repository")
}

/// Creates a predicate that checks for a missing snapshot cache
pub fn cache_error() -> impl Predicate<str> {
    predicates::str::contains("No cached snapshot")
}

/// Creates a predicate that checks for a section header
pub fn has_section(header: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("➤ {header}:"))
}

/// Creates a predicate that checks for a model line, e.g. `credit [dmn]`
pub fn has_model(name: &str, extension: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("{name} [{extension}]"))
}

/// Creates a predicate that checks for the empty-section message
pub fn no_files_found() -> impl Predicate<str> {
    predicates::str::contains("No files found.")
}
