//! Non-interactive configuration from `_options.json` and flags.

use crate::core::{
    config::{self, PartialConfig, PartialMenu, SidebarConfig, DEFAULTS},
    error::Result,
    order_parser::resolve_order,
    pages,
};
use std::path::Path;

/// Values given on the command line in silent mode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SilentOverrides {
    pub separator: Option<String>,
    pub link_template: Option<String>,
    pub menu_template: Option<String>,
    /// Space-separated indices into the filtered pages
    pub order: Option<String>,
}

impl SilentOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn to_partial(&self) -> PartialConfig {
        PartialConfig {
            separator: self.separator.clone(),
            link_template: self.link_template.clone(),
            menu: PartialMenu {
                category_1: self.menu_template.clone(),
            },
            ..Default::default()
        }
    }
}

/// Resolve the configuration for a silent run.
///
/// Returns `Ok(None)` when there is neither a saved configuration nor any
/// flag, in which case nothing is written and the renderer uses its own
/// defaults. Malformed templates and order indices fail the run.
pub fn execute_silent(
    workdir: &Path,
    persisted: Option<PartialConfig>,
    overrides: &SilentOverrides,
) -> Result<Option<SidebarConfig>> {
    let mut partial = overrides.to_partial();
    let base = config::resolve(&DEFAULTS, persisted.clone(), partial.clone());
    base.validate()?;

    let filtered = pages::filter_pages(
        pages::list_pages(workdir)?,
        &base.rules.exclude,
        &base.separator,
    );
    pages::ensure_not_empty(&filtered)?;

    if persisted.is_none() && overrides.is_empty() {
        log::info!("No saved options and no flags, leaving configuration to the renderer");
        return Ok(None);
    }

    if let Some(order) = &overrides.order {
        partial.rules.order = resolve_order(order, &filtered)?;
    }

    Ok(Some(config::resolve(&DEFAULTS, persisted, partial)))
}
