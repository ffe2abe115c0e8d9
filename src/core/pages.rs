//! Wiki page discovery and exclusion filtering.
//!
//! # Public API
//! - [`Page`]: One markdown source file of the wiki
//! - [`list_pages`]: One-shot listing of the pages in a directory
//! - [`filter_pages`]: Drop pages matched by exclusion rules
//!
//! # Exclusion rules
//! An entry such as `guides.md` removes the page `guides.md` itself and every
//! page in its category, i.e. every name starting with `guides<separator>`.

use crate::core::error::{Result, SidebarError};
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

/// Extension of wiki page sources
pub const PAGE_EXTENSION: &str = "md";

/// Prefix of reserved or generated files that are never pages
pub const RESERVED_PREFIX: char = '_';

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Page(String);

impl Page {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// True for a page in the category named by `stem`
    fn in_category(&self, stem: &str, separator: &str) -> bool {
        self.0
            .strip_prefix(stem)
            .is_some_and(|rest| rest.starts_with(separator))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Category stem of an exclusion entry: the name without a trailing `.md`
fn category_stem(name: &str) -> &str {
    name.strip_suffix(PAGE_EXTENSION)
        .and_then(|rest| rest.strip_suffix('.'))
        .filter(|stem| !stem.is_empty())
        .unwrap_or(name)
}

fn is_page_name(name: &str) -> bool {
    !name.starts_with(RESERVED_PREFIX)
        && Path::new(name)
            .extension()
            .is_some_and(|ext| ext == PAGE_EXTENSION)
}

/// List the markdown pages directly inside `dir`, sorted by file name.
///
/// Files starting with `_` (such as `_Sidebar.md`) are skipped. The returned
/// iterator is consumed once; call again to list afresh.
pub fn list_pages(dir: &Path) -> Result<impl Iterator<Item = Page>> {
    let mut names = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            log::warn!("Skipping non UTF-8 file name: {:?}", file_name);
            continue;
        };

        if is_page_name(name) {
            names.push(name.to_string());
        }
    }

    names.sort();
    log::debug!("Found {} page(s) in {}", names.len(), dir.display());

    Ok(names.into_iter().map(Page))
}

/// Keep the pages not matched by any exclusion entry, preserving order
pub fn filter_pages<I>(pages: I, exclude: &BTreeSet<String>, separator: &str) -> Vec<Page>
where
    I: IntoIterator<Item = Page>,
{
    let stems: Vec<&str> = exclude.iter().map(|e| category_stem(e)).collect();

    pages
        .into_iter()
        .filter(|page| {
            !exclude.contains(page.name())
                && !stems
                    .iter()
                    .any(|stem| page.in_category(stem, separator))
        })
        .collect()
}

/// Fail when exclusions left nothing to order
pub fn ensure_not_empty(pages: &[Page]) -> Result<()> {
    if pages.is_empty() {
        return Err(SidebarError::NoPagesAfterFiltering);
    }
    Ok(())
}
