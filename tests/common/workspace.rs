//! Wiki directories and fake renderer programs
//!
//! Renderers are small shell scripts kept outside the wiki directory so they
//! never show up as pages or get committed.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wiki_sidebar::core::error::Result;

pub const OPTIONS_FILE: &str = "_options.json";
pub const SIDEBAR_FILE: &str = "_Sidebar.md";

/// Copy of the options file as the renderer saw it, written by the fake renderer
pub const OPTIONS_SEEN_FILE: &str = "options-seen.json";

/// A wiki directory plus a separate directory for helper programs.
/// Both TempDirs must be kept alive for the duration of the test.
pub struct TestWiki {
    pub wiki_dir: TempDir,
    pub bin_dir: TempDir,
}

impl TestWiki {
    pub fn path(&self) -> &Path {
        self.wiki_dir.path()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.wiki_dir.path().join(name)
    }

    pub fn read(&self, name: &str) -> Result<String> {
        Ok(fs::read_to_string(self.file(name))?)
    }

    pub fn write(&self, name: &str, content: &str) -> Result<()> {
        fs::write(self.file(name), content)?;
        Ok(())
    }

    /// Renderer that writes a one-line sidebar and prints the success marker
    pub fn succeeding_renderer(&self) -> Result<String> {
        self.script(
            "render-ok",
            &format!(
                "#!/bin/sh\n\
                 [ \"$1\" = \"--templating\" ] || exit 2\n\
                 [ -f {OPTIONS_FILE} ] && cp {OPTIONS_FILE} {OPTIONS_SEEN_FILE}\n\
                 printf '* [[Home]]\\n' > {SIDEBAR_FILE}\n\
                 echo 'Sidebar generated'\n"
            ),
        )
    }

    /// Renderer that reports success on stderr only
    pub fn stderr_renderer(&self) -> Result<String> {
        self.script(
            "render-stderr",
            &format!(
                "#!/bin/sh\n\
                 printf '* [[Home]]\\n' > {SIDEBAR_FILE}\n\
                 echo 'Sidebar generated' >&2\n"
            ),
        )
    }

    /// Renderer that never prints the success marker
    pub fn failing_renderer(&self) -> Result<String> {
        self.script("render-fail", "#!/bin/sh\necho 'template sidebar not found'\nexit 1\n")
    }

    fn script(&self, name: &str, body: &str) -> Result<String> {
        let path = self.bin_dir.path().join(name);
        fs::write(&path, body)?;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
        Ok(path.to_string_lossy().into_owned())
    }
}

/// Creates a wiki with the given pages, each holding a small heading
pub fn setup_wiki(pages: &[&str]) -> Result<TestWiki> {
    let wiki = TestWiki {
        wiki_dir: TempDir::new()?,
        bin_dir: TempDir::new()?,
    };
    for page in pages {
        wiki.write(page, &format!("# {page}\n"))?;
    }
    Ok(wiki)
}
