//! Core functionality for the wiki-sidebar tool.
//!
//! This module provides the building blocks used by the commands: the
//! configuration model, page discovery, order parsing, prompting and the
//! renderer and git collaborators.

pub mod config;
pub mod error;
pub mod git;
pub mod order_parser;
pub mod output;
pub mod pages;
pub mod prompt;
pub mod renderer;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{Result, SidebarError};

// === Configuration ===
// Layered configuration: static defaults, saved _options.json, this run's answers
pub use config::{resolve, PartialConfig, SidebarConfig, DEFAULTS};

// === Pages ===
// Markdown page listing and exclusion filtering
pub use pages::{filter_pages, list_pages, Page};

// === Order parsing ===
// Parser for user input like "2 0 1" -> ordered page names
pub use order_parser::{resolve_order, OrderParser};

// === Prompting ===
// Data-driven question flow and its terminal/scripted prompters
pub use prompt::{Answer, Answers, Prompter, Question, ScriptedPrompter, TerminalPrompter};

// === Collaborators ===
// External renderer and git, behind narrow traits
pub use git::{GitClient, GitRepo};
pub use renderer::{ProcessRenderer, RenderOutcome, Renderer};

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{
    print_error, print_page_list, print_section_header, print_success, print_warning,
};
