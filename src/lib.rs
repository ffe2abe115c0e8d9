//! Wiki Sidebar - generates the `_Sidebar.md` navigation file of a wiki.
//!
//! The library lists the markdown pages of a wiki, lets the user exclude and
//! order them (interactively or from saved options), writes `_options.json`
//! for an external renderer, runs it, and optionally syncs the wiki with git.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Configuration resolution and persistence
//! - Page discovery, filtering and order resolution
//! - The prompt flow and the renderer/git collaborator traits
//!
//! The [`commands`] module holds the interactive and silent flows and the job
//! driver that runs the external steps.

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use crate::core::{
    // Configuration and pages
    filter_pages,
    list_pages,
    resolve,
    resolve_order,
    Answer,
    Answers,
    GitClient,
    GitRepo,
    OrderParser,
    Page,
    PartialConfig,
    ProcessRenderer,
    Prompter,
    Question,
    RenderOutcome,
    Renderer,
    // Error handling
    Result,
    ScriptedPrompter,
    SidebarConfig,
    SidebarError,
    TerminalPrompter,
    DEFAULTS,
};
