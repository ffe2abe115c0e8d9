//! Sidebar configuration: defaults, persisted layer, overrides and merging.
//!
//! The effective [`SidebarConfig`] is produced once per run by [`resolve`] from
//! three layers: the static [`DEFAULTS`], the optional `_options.json` found in
//! the wiki directory, and the answers or flags given for this run. Both
//! optional layers are [`PartialConfig`] values.
//!
//! # On-disk shape
//! ```json
//! {
//!   "separator": "-",
//!   "linkTemplate": "[[%s]]",
//!   "menu": { "category-1": "**%s**" },
//!   "rules": { "exclude": ["Home.md"], "order": ["Setup.md"] }
//! }
//! ```

use crate::core::error::{Result, SidebarError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// File name of the persisted configuration inside the wiki directory.
pub const OPTIONS_FILE: &str = "_options.json";

/// Token replaced by the page name (link) or nested content (menu).
pub const PLACEHOLDER: &str = "%s";

/// Built-in defaults, kept as static data
pub struct DefaultConfig {
    pub separator: &'static str,
    pub link_template: &'static str,
    pub category_template: &'static str,
}

/// Global defaults instance
pub static DEFAULTS: DefaultConfig = DefaultConfig {
    separator: "-",
    link_template: "[[%s]]",
    category_template: "**%s**",
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuTemplates {
    #[serde(rename = "category-1")]
    pub category_1: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rules {
    pub exclude: BTreeSet<String>,
    pub order: Vec<String>,
}

/// Effective configuration with every field present
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarConfig {
    pub separator: String,
    pub link_template: String,
    pub menu: MenuTemplates,
    pub rules: Rules,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PartialMenu {
    #[serde(rename = "category-1", default, skip_serializing_if = "Option::is_none")]
    pub category_1: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PartialRules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<BTreeSet<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Vec<String>>,
}

/// One configuration layer where every field may be absent
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_template: Option<String>,
    #[serde(default)]
    pub menu: PartialMenu,
    #[serde(default)]
    pub rules: PartialRules,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULTS.separator.to_string(),
            link_template: DEFAULTS.link_template.to_string(),
            menu: MenuTemplates {
                category_1: DEFAULTS.category_template.to_string(),
            },
            rules: Rules::default(),
        }
    }
}

impl PartialConfig {
    fn apply_to(self, config: &mut SidebarConfig) {
        if let Some(separator) = self.separator {
            config.separator = separator;
        }
        if let Some(link_template) = self.link_template {
            config.link_template = link_template;
        }
        if let Some(category_1) = self.menu.category_1 {
            config.menu.category_1 = category_1;
        }
        if let Some(exclude) = self.rules.exclude {
            config.rules.exclude = exclude;
        }
        if let Some(order) = self.rules.order {
            config.rules.order = dedup_first_occurrence(order);
        }
    }
}

impl From<SidebarConfig> for PartialConfig {
    fn from(config: SidebarConfig) -> Self {
        Self {
            separator: Some(config.separator),
            link_template: Some(config.link_template),
            menu: PartialMenu {
                category_1: Some(config.menu.category_1),
            },
            rules: PartialRules {
                exclude: Some(config.rules.exclude),
                order: Some(config.rules.order),
            },
        }
    }
}

/// Merge the three configuration layers into the effective configuration.
///
/// Later layers win field by field. Exclusions and order are replaced
/// wholesale, never unioned. Separators coming from `overrides` are stored in
/// canonical form.
pub fn resolve(
    defaults: &DefaultConfig,
    persisted: Option<PartialConfig>,
    mut overrides: PartialConfig,
) -> SidebarConfig {
    let mut config = SidebarConfig {
        separator: defaults.separator.to_string(),
        link_template: defaults.link_template.to_string(),
        menu: MenuTemplates {
            category_1: defaults.category_template.to_string(),
        },
        rules: Rules::default(),
    };

    if let Some(persisted) = persisted {
        persisted.apply_to(&mut config);
    }

    overrides.separator = overrides.separator.map(|s| canonical_separator(&s));
    overrides.apply_to(&mut config);

    config
}

/// Storage form of a separator: every whitespace char becomes a hyphen
pub fn canonical_separator(input: &str) -> String {
    input
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect()
}

/// Display form of a separator: hyphens are shown as spaces
pub fn display_separator(stored: &str) -> String {
    stored.replace('-', " ")
}

/// Check that a template carries the placeholder exactly once
pub fn validate_template(field: &str, template: &str) -> Result<()> {
    match template.matches(PLACEHOLDER).count() {
        0 => Err(SidebarError::TemplateMissingPlaceholder {
            field: field.to_string(),
            template: template.to_string(),
            placeholder: PLACEHOLDER,
        }),
        1 => Ok(()),
        _ => Err(SidebarError::TemplateRepeatedPlaceholder {
            field: field.to_string(),
            template: template.to_string(),
            placeholder: PLACEHOLDER,
        }),
    }
}

pub fn validate_separator(separator: &str) -> Result<()> {
    if separator.is_empty() {
        return Err(SidebarError::EmptySeparator);
    }
    Ok(())
}

fn dedup_first_occurrence(names: Vec<String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

pub fn options_path(dir: &Path) -> PathBuf {
    dir.join(OPTIONS_FILE)
}

/// Load the persisted layer from `dir`, `Ok(None)` when there is none
pub fn load_persisted(dir: &Path) -> Result<Option<PartialConfig>> {
    let path = options_path(dir);
    if !path.exists() {
        log::debug!("No persisted configuration at {}", path.display());
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)
        .map_err(|e| SidebarError::config_read_failed(&path, e))?;
    let partial = serde_json::from_str(&content)
        .map_err(|e| SidebarError::config_parse_failed(&path, e))?;

    log::debug!("Loaded persisted configuration from {}", path.display());
    Ok(Some(partial))
}

/// Remove the persisted configuration; a missing file is not an error
pub fn remove_persisted(dir: &Path) -> Result<()> {
    match std::fs::remove_file(options_path(dir)) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(SidebarError::Io(e)),
    }
}

impl SidebarConfig {
    /// Validate both templates and the separator
    pub fn validate(&self) -> Result<()> {
        validate_separator(&self.separator)?;
        validate_template("linkTemplate", &self.link_template)?;
        validate_template("menu.category-1", &self.menu.category_1)
    }

    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        let path = options_path(dir);
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content).map_err(|e| SidebarError::config_write_failed(&path, e))?;
        log::debug!("Wrote configuration to {}", path.display());
        Ok(path)
    }
}
