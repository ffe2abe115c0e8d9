//! Git repository management and setup utilities
//!
//! Provides functions for turning a test wiki into a git working copy with a
//! bare `origin` remote, so push and pull run against local paths only.

#![allow(dead_code)]

use std::path::Path;
use std::process::Command;
use tempfile::TempDir;
use wiki_sidebar::core::error::{Result, SidebarError};

/// Runs git with `args` in `dir`, failing on a non-zero exit
pub fn git(dir: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git").args(args).current_dir(dir).output()?;
    if !output.status.success() {
        return Err(SidebarError::git_command_failed(
            args.join(" "),
            String::from_utf8_lossy(&output.stderr).trim(),
        ));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Initializes a git repository with a local identity to avoid prompts
pub fn init_repo(path: &Path) -> Result<()> {
    git(path, &["init"])?;
    git(path, &["config", "user.name", "Test User"])?;
    git(path, &["config", "user.email", "test@example.com"])?;
    git(path, &["config", "commit.gpgsign", "false"])?;
    Ok(())
}

/// Creates a bare repository to act as `origin`
pub fn setup_remote() -> Result<TempDir> {
    let remote = TempDir::new()?;
    git(remote.path(), &["init", "--bare"])?;
    Ok(remote)
}

/// Makes `wiki` a working copy of `remote` with one commit pushed upstream
pub fn connect_to_remote(wiki: &Path, remote: &Path) -> Result<()> {
    init_repo(wiki)?;
    git(wiki, &["remote", "add", "origin", &remote.to_string_lossy()])?;
    git(wiki, &["add", "--all"])?;
    git(wiki, &["commit", "-m", "Initial pages"])?;
    git(wiki, &["push", "-u", "origin", "HEAD"])?;
    Ok(())
}

/// Commit subjects on every branch of the remote, newest first
pub fn remote_subjects(remote: &Path) -> Result<Vec<String>> {
    let log = git(remote, &["log", "--all", "--format=%s"])?;
    Ok(log.lines().map(str::to_string).collect())
}

/// Files tracked at the tip of the wiki's HEAD
pub fn tracked_files(wiki: &Path) -> Result<Vec<String>> {
    let files = git(wiki, &["ls-files"])?;
    Ok(files.lines().map(str::to_string).collect())
}
