//! Parsing of user-entered page orderings.
//!
//! This module provides [`OrderParser`] which turns input like `"2 0 1"` into
//! validated zero-based indices, and [`resolve_order`] which maps those indices
//! onto the filtered page list.
//!
//! # Public API
//! - [`OrderParser`]: Parser with static methods for parsing and validation
//! - [`resolve_order`]: Indices text to ordered page names
//!
//! # Supported Format
//! - **Empty input**: keep the previously configured order
//! - **Space-separated indices**: `2 0 1`, each a non-negative integer
//!
//! Indices refer to the list left after exclusions. Repeated indices keep
//! their first position only.

use crate::core::{
    error::{Result, SidebarError},
    pages::Page,
};
use std::collections::HashSet;

pub struct OrderParser;

impl OrderParser {
    pub fn parse(input: &str) -> Result<Vec<usize>> {
        input
            .split_whitespace()
            .map(|part| {
                if !part.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(SidebarError::invalid_number(part));
                }
                part.parse::<usize>()
                    .map_err(|_| SidebarError::invalid_number(part))
            })
            .collect()
    }

    pub fn validate(indices: &[usize], page_count: usize) -> Result<()> {
        if page_count == 0 {
            return Err(SidebarError::NoPagesAvailable);
        }

        for &index in indices {
            if index >= page_count {
                return Err(SidebarError::index_out_of_range(index, page_count - 1));
            }
        }
        Ok(())
    }

    /// Parse and validate in one step, as used by prompt validators
    pub fn check(input: &str, page_count: usize) -> Result<Vec<usize>> {
        let indices = Self::parse(input)?;
        Self::validate(&indices, page_count)?;
        Ok(indices)
    }
}

/// Resolve an order input against the filtered pages.
///
/// Returns `Ok(None)` for blank input, meaning the configured order stays
/// untouched.
pub fn resolve_order(input: &str, pages: &[Page]) -> Result<Option<Vec<String>>> {
    let indices = OrderParser::check(input, pages.len())?;
    if indices.is_empty() {
        return Ok(None);
    }

    let mut seen = HashSet::new();
    let order = indices
        .into_iter()
        .filter(|index| seen.insert(*index))
        .map(|index| pages[index].name().to_string())
        .collect();

    Ok(Some(order))
}
