//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`SidebarError`] which covers every failure mode of a
//! sidebar run. It uses `thiserror` for ergonomic error definitions and
//! includes constructors for the variants that carry context.
//!
//! # Public API
//! - [`SidebarError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, SidebarError>`
//!
//! # Error Categories
//! - **Environment**: git missing, not inside a repository
//! - **Configuration**: unreadable or unwritable `_options.json`, bad templates
//! - **Pages**: nothing left to order after exclusions
//! - **Order input**: malformed or out-of-range indices
//! - **Collaborators**: renderer and git subprocess failures

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for wiki-sidebar
#[derive(Error, Debug)]
pub enum SidebarError {
    // Environment errors
    #[error("git is required for --git-push but was not found in PATH")]
    GitUnavailable,

    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("Git repository error: {0}")]
    GitRepo(#[from] git2::Error),

    #[error("git {command} failed: {message}")]
    GitCommandFailed { command: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Configuration errors
    #[error("Failed to read configuration file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write configuration file '{path}': {source}")]
    ConfigWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize configuration: {0}")]
    ConfigSerializationFailed(#[from] serde_json::Error),

    #[error("{field} must contain the placeholder '{placeholder}' (got '{template}')")]
    TemplateMissingPlaceholder {
        field: String,
        template: String,
        placeholder: &'static str,
    },

    #[error("{field} must contain the placeholder '{placeholder}' exactly once (got '{template}')")]
    TemplateRepeatedPlaceholder {
        field: String,
        template: String,
        placeholder: &'static str,
    },

    #[error("Separator cannot be empty")]
    EmptySeparator,

    // Page errors
    #[error("No pages left after applying exclusions, nothing to order")]
    NoPagesAfterFiltering,

    // Order input errors
    #[error("Invalid number: '{number}'. Enter space-separated indices like: 2 0 1")]
    InvalidNumber { number: String },

    #[error("Index {index} is out of range (0-{max} available)")]
    IndexOutOfRange { index: usize, max: usize },

    #[error("No pages available to order")]
    NoPagesAvailable,

    // Collaborator errors
    #[error("Could not start renderer '{program}': {source}")]
    RendererSpawnFailed {
        program: String,
        source: std::io::Error,
    },

    #[error("Renderer did not report success:\n{output}")]
    RendererFailed { output: String },

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Convenience type alias for Results using SidebarError
pub type Result<T> = std::result::Result<T, SidebarError>;

impl SidebarError {
    /// Create a git command failed error
    pub fn git_command_failed(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::GitCommandFailed {
            command: command.into(),
            message: message.into(),
        }
    }

    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config write failed error
    pub fn config_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid number error
    pub fn invalid_number(number: impl Into<String>) -> Self {
        Self::InvalidNumber {
            number: number.into(),
        }
    }

    /// Create an index out of range error
    pub fn index_out_of_range(index: usize, max: usize) -> Self {
        Self::IndexOutOfRange { index, max }
    }

    /// Create a renderer spawn failed error
    pub fn renderer_spawn_failed(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::RendererSpawnFailed {
            program: program.into(),
            source,
        }
    }
}
