//! Git synchronization of the wiki working copy.
//!
//! This module provides the [`GitClient`] seam used by the job driver and its
//! production implementation [`GitRepo`]. Repository discovery and branch
//! lookup go through `git2`; network and index operations shell out to the
//! `git` executable so the user's credentials and hooks apply.
//!
//! # Public API
//! - [`GitClient`]: Narrow interface for the pull-before / push-after steps
//! - [`GitRepo`]: `git2`-backed implementation
//! - [`ensure_git_available`]: Environment check for `--git-push`

use crate::core::error::{Result, SidebarError};
use git2::{ErrorCode, Repository};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Commit message used for the generated sidebar
pub const COMMIT_MESSAGE: &str = "Update wiki sidebar";

/// Remote that receives the push
pub const REMOTE: &str = "origin";

/// Branch pushed when HEAD does not name one
pub const FALLBACK_BRANCH: &str = "master";

pub trait GitClient {
    fn fetch(&self) -> Result<()>;
    fn pull(&self) -> Result<()>;
    fn add_all(&self) -> Result<()>;
    fn commit(&self, message: &str) -> Result<()>;
    fn push(&self) -> Result<()>;
}

/// Fail unless a `git` executable is on PATH
pub fn ensure_git_available() -> Result<PathBuf> {
    which::which("git").map_err(|e| {
        log::debug!("git lookup failed: {e}");
        SidebarError::GitUnavailable
    })
}

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path).map_err(|_| SidebarError::NotInGitRepo)?;
        Ok(GitRepo { repo })
    }

    pub fn workdir(&self) -> Result<&Path> {
        self.repo.workdir().ok_or(SidebarError::NotInGitRepo)
    }

    /// Execute a git command in the repository's working directory
    fn execute_git_command(&self, args: &[&str]) -> Result<()> {
        let workdir = self.workdir()?;
        log::debug!("Running git {} in {}", args.join(" "), workdir.display());

        let output = Command::new("git")
            .args(args)
            .current_dir(workdir)
            .output()?;

        if !output.status.success() {
            let error_msg = String::from_utf8_lossy(&output.stderr);
            return Err(SidebarError::git_command_failed(
                args.first().copied().unwrap_or_default(),
                error_msg.trim(),
            ));
        }

        Ok(())
    }

    pub fn get_current_branch(&self) -> Result<String> {
        let head = match self.repo.head() {
            Ok(head) => head,
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                return Ok(FALLBACK_BRANCH.to_string());
            }
            Err(e) => return Err(e.into()),
        };

        match head.shorthand() {
            Some(branch_name) if head.is_branch() => Ok(branch_name.to_string()),
            _ => Ok(FALLBACK_BRANCH.to_string()),
        }
    }
}

impl GitClient for GitRepo {
    fn fetch(&self) -> Result<()> {
        self.execute_git_command(&["fetch", REMOTE])
    }

    fn pull(&self) -> Result<()> {
        self.execute_git_command(&["pull"])
    }

    fn add_all(&self) -> Result<()> {
        self.execute_git_command(&["add", "--all"])
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.execute_git_command(&["commit", "-m", message])
    }

    fn push(&self) -> Result<()> {
        let branch = self.get_current_branch()?;
        self.execute_git_command(&["push", REMOTE, &branch])
    }
}
