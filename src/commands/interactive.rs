//! Interactive configuration: ask, filter, ask again, resolve.
//!
//! The flow runs in two phases. Settings and exclusions come first; the
//! remaining pages are then listed with their indices and the user may enter
//! a custom order over them.

use crate::core::{
    config::{self, PartialConfig, PartialMenu, PartialRules, SidebarConfig, DEFAULTS},
    error::Result,
    order_parser::{resolve_order, OrderParser},
    pages::{self, Page},
    print_page_list, print_section_header,
    prompt::{self, Answers, Prompter, Question},
};
use std::collections::BTreeSet;
use std::path::Path;

pub const KEY_SEPARATOR: &str = "separator";
pub const KEY_LINK_TEMPLATE: &str = "link_template";
pub const KEY_MENU_TEMPLATE: &str = "menu_template";
pub const KEY_EXCLUDE: &str = "exclude";
pub const KEY_CUSTOMIZE_ORDER: &str = "customize_order";
pub const KEY_ORDER: &str = "order";

fn template_validator(field: &'static str) -> impl Fn(&str) -> std::result::Result<(), String> {
    move |value| config::validate_template(field, value).map_err(|e| e.to_string())
}

/// Questions asked before filtering
pub fn settings_questions(current: &SidebarConfig, all_pages: &[Page]) -> Vec<Question> {
    let items: Vec<String> = all_pages.iter().map(|p| p.name().to_string()).collect();
    let defaults: Vec<bool> = items
        .iter()
        .map(|name| current.rules.exclude.contains(name))
        .collect();

    vec![
        Question::input(
            KEY_SEPARATOR,
            "Category separator (spaces are stored as hyphens)",
            config::display_separator(&current.separator),
        )
        .with_validator(|value| {
            config::validate_separator(value).map_err(|e| e.to_string())
        }),
        Question::input(
            KEY_LINK_TEMPLATE,
            format!("Link template ({} is the page name)", config::PLACEHOLDER),
            current.link_template.clone(),
        )
        .with_validator(template_validator("linkTemplate")),
        Question::input(
            KEY_MENU_TEMPLATE,
            format!("Category template ({} is the category content)", config::PLACEHOLDER),
            current.menu.category_1.clone(),
        )
        .with_validator(template_validator("menu.category-1")),
        Question::multi_select(
            KEY_EXCLUDE,
            "Pages to exclude (a page also excludes its category)",
            items,
            defaults,
        ),
    ]
}

/// Questions asked over the filtered pages
pub fn order_questions(filtered: &[Page]) -> Vec<Question> {
    let page_count = filtered.len();

    vec![
        Question::confirm(KEY_CUSTOMIZE_ORDER, "Customize the page order?", false),
        Question::input(
            KEY_ORDER,
            "Page indices in sidebar order, separated by spaces (empty keeps the saved order)",
            "",
        )
        .with_validator(move |value| {
            OrderParser::check(value, page_count)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .when(|answers| answers.flag(KEY_CUSTOMIZE_ORDER) == Some(true)),
    ]
}

/// Turn the settings answers into an override layer
pub fn settings_overrides(answers: &Answers, all_pages: &[Page]) -> PartialConfig {
    let exclude = answers.selection(KEY_EXCLUDE).map(|selection| {
        selection
            .iter()
            .filter_map(|&index| all_pages.get(index))
            .map(|page| page.name().to_string())
            .collect::<BTreeSet<String>>()
    });

    PartialConfig {
        separator: answers.text(KEY_SEPARATOR).map(str::to_string),
        link_template: answers.text(KEY_LINK_TEMPLATE).map(str::to_string),
        menu: PartialMenu {
            category_1: answers.text(KEY_MENU_TEMPLATE).map(str::to_string),
        },
        rules: PartialRules {
            exclude,
            order: None,
        },
    }
}

/// Run the whole interactive flow and return the effective configuration
pub fn execute_interactive(
    workdir: &Path,
    persisted: Option<PartialConfig>,
    prompter: &mut dyn Prompter,
) -> Result<SidebarConfig> {
    let current = config::resolve(&DEFAULTS, persisted.clone(), PartialConfig::default());
    let all_pages: Vec<Page> = pages::list_pages(workdir)?.collect();

    let mut answers = Answers::default();
    prompt::ask(&settings_questions(&current, &all_pages), prompter, &mut answers)?;
    let mut overrides = settings_overrides(&answers, &all_pages);

    // Filter with the values this run will store
    let settings = config::resolve(&DEFAULTS, persisted.clone(), overrides.clone());
    let filtered = pages::filter_pages(all_pages, &settings.rules.exclude, &settings.separator);
    pages::ensure_not_empty(&filtered)?;

    print_section_header("Pages");
    print_page_list(&filtered);

    prompt::ask(&order_questions(&filtered), prompter, &mut answers)?;
    if let Some(text) = answers.text(KEY_ORDER) {
        overrides.rules.order = resolve_order(text, &filtered)?;
    }

    Ok(config::resolve(&DEFAULTS, persisted, overrides))
}
