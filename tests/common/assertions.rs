//! Common assertion helpers for test output validation

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for the formatted error prefix
pub fn has_error(message: &str) -> impl Predicate<str> {
    predicates::str::contains("Error:").and(predicates::str::contains(message.to_string()))
}

/// Creates a predicate that checks for the success line of a run
pub fn run_completed() -> impl Predicate<str> {
    predicates::str::contains("Done")
}

/// Creates a predicate that checks for the generated-by stamp
pub fn has_credentials() -> impl Predicate<str> {
    predicates::str::contains("<!-- Generated by wiki-sidebar")
}
