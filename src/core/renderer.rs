//! External sidebar renderer.
//!
//! The renderer is a separate program that reads `_options.json` and the wiki
//! pages and writes `_Sidebar.md`. It reports success by printing
//! [`SUCCESS_MARKER`]; nothing else of its output is interpreted.

use crate::core::error::{Result, SidebarError};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Generated sidebar file inside the wiki directory
pub const SIDEBAR_FILE: &str = "_Sidebar.md";

pub const DEFAULT_RENDERER: &str = "wiki-sidebar-render";

/// Flag selecting the sidebar template in the renderer
pub const TEMPLATING_FLAG: &str = "--templating";

pub const SUCCESS_MARKER: &str = "Sidebar generated";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Success,
    /// The renderer ran but did not print the marker; holds its raw output
    Failed { output: String },
}

pub trait Renderer {
    fn render(&self, workdir: &Path) -> Result<RenderOutcome>;
}

/// Renderer backed by an external process
pub struct ProcessRenderer {
    program: String,
}

impl ProcessRenderer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for ProcessRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_RENDERER)
    }
}

impl Renderer for ProcessRenderer {
    fn render(&self, workdir: &Path) -> Result<RenderOutcome> {
        log::debug!("Running {} {} {}", self.program, TEMPLATING_FLAG, workdir.display());

        let output = Command::new(&self.program)
            .arg(TEMPLATING_FLAG)
            .arg(workdir)
            .current_dir(workdir)
            .output()
            .map_err(|e| SidebarError::renderer_spawn_failed(&self.program, e))?;

        let mut captured = String::from_utf8_lossy(&output.stdout).into_owned();
        captured.push_str(&String::from_utf8_lossy(&output.stderr));

        if captured.contains(SUCCESS_MARKER) {
            Ok(RenderOutcome::Success)
        } else {
            Ok(RenderOutcome::Failed { output: captured })
        }
    }
}

pub fn sidebar_path(dir: &Path) -> PathBuf {
    dir.join(SIDEBAR_FILE)
}

/// The two-line generated-by stamp
pub fn credentials_comment() -> String {
    format!(
        "<!-- Generated by {} v{} -->\n<!-- Rerun {} to regenerate; manual edits will be lost -->\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_NAME"),
    )
}

/// Append the stamp to the sidebar, after a blank line
pub fn append_credentials(dir: &Path) -> Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .append(true)
        .open(sidebar_path(dir))?;
    write!(file, "\n{}", credentials_comment())?;
    Ok(())
}
