//! The job driver: git pull, options file, renderer, cleanup, git push.
//!
//! Steps run strictly in sequence with no retries or rollback:
//! 1. **Sync down**: `git fetch` and `git pull` (best effort)
//! 2. **Persist**: write `_options.json` (fatal on failure)
//! 3. **Render**: run the renderer and stamp the sidebar on success
//! 4. **Clean**: delete the `_options.json` written in step 2
//! 5. **Sync up**: `git add`, `git commit`, `git push` (best effort)
//!
//! A renderer failure is reported and cleanup still runs, but nothing is
//! committed or pushed and the run ends with [`SidebarError::RendererFailed`].

use crate::core::{
    config::{self, SidebarConfig},
    error::{Result, SidebarError},
    git::{GitClient, COMMIT_MESSAGE},
    print_success, print_warning,
    renderer::{self, RenderOutcome, Renderer},
};
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct JobOptions {
    pub do_sidebar: bool,
    pub do_clean: bool,
    pub configuration: Option<SidebarConfig>,
    pub do_git_sync: bool,
    pub skip_credentials: bool,
}

/// What a completed run actually did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobReport {
    pub config_written: bool,
    pub rendered: bool,
    pub credentials_appended: bool,
    pub cleaned: bool,
    pub pushed: bool,
    pub git_warnings: Vec<String>,
}

pub struct JobDriver<'a> {
    workdir: &'a Path,
    renderer: &'a dyn Renderer,
    git: Option<&'a dyn GitClient>,
}

impl<'a> JobDriver<'a> {
    pub fn new(workdir: &'a Path, renderer: &'a dyn Renderer) -> Self {
        Self {
            workdir,
            renderer,
            git: None,
        }
    }

    pub fn with_git(mut self, git: &'a dyn GitClient) -> Self {
        self.git = Some(git);
        self
    }

    pub fn run(&self, options: &JobOptions) -> Result<JobReport> {
        let mut report = JobReport::default();

        let git = if options.do_git_sync {
            Some(self.git.ok_or(SidebarError::GitUnavailable)?)
        } else {
            None
        };

        if let Some(git) = git {
            log::info!("Pulling latest wiki changes");
            best_effort(&mut report, "fetch", git.fetch());
            best_effort(&mut report, "pull", git.pull());
        }

        if let Some(configuration) = &options.configuration {
            let path = configuration.save(self.workdir).inspect_err(|e| {
                log::error!("Could not persist configuration: {e}");
            })?;
            log::info!("Saved options to {}", path.display());
            report.config_written = true;
        }

        let mut render_failure = None;
        if options.do_sidebar {
            if let Err(e) = self.render(options, &mut report) {
                render_failure = Some(e);
            }
        }

        // Only a file this run wrote is removed
        if options.do_clean && report.config_written {
            match config::remove_persisted(self.workdir) {
                Ok(()) => {
                    log::debug!("Removed temporary options file");
                    report.cleaned = true;
                }
                // The renderer error is the one worth reporting
                Err(e) if render_failure.is_some() => {
                    log::warn!("Could not remove options file: {e}");
                }
                Err(e) => return Err(e),
            }
        }

        if let Some(git) = git {
            if render_failure.is_some() {
                print_warning("Skipping git commit and push because the sidebar was not generated");
            } else {
                log::info!("Pushing wiki changes");
                best_effort(&mut report, "add", git.add_all());
                best_effort(&mut report, "commit", git.commit(COMMIT_MESSAGE));
                let pushed = best_effort(&mut report, "push", git.push());
                report.pushed = pushed;
            }
        }

        match render_failure {
            Some(e) => Err(e),
            None => Ok(report),
        }
    }

    fn render(&self, options: &JobOptions, report: &mut JobReport) -> Result<()> {
        match self.renderer.render(self.workdir)? {
            RenderOutcome::Success => {
                report.rendered = true;
                if !options.skip_credentials {
                    renderer::append_credentials(self.workdir)?;
                    report.credentials_appended = true;
                }
                print_success(&format!("{} generated", renderer::SIDEBAR_FILE));
                Ok(())
            }
            RenderOutcome::Failed { output } => {
                log::debug!("Renderer output without success marker: {output}");
                Err(SidebarError::RendererFailed { output })
            }
        }
    }
}

/// Record a failed git step as a warning; returns whether it succeeded
fn best_effort(report: &mut JobReport, step: &str, result: Result<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::warn!("git {step} failed: {e}");
            report.git_warnings.push(e.to_string());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use tempfile::TempDir;

    struct FakeRenderer {
        succeed: bool,
    }

    impl Renderer for FakeRenderer {
        fn render(&self, workdir: &Path) -> Result<RenderOutcome> {
            if self.succeed {
                std::fs::write(renderer::sidebar_path(workdir), "* [[Home]]\n")?;
                Ok(RenderOutcome::Success)
            } else {
                Ok(RenderOutcome::Failed {
                    output: "boom".to_string(),
                })
            }
        }
    }

    #[derive(Default)]
    struct RecordingGit {
        calls: RefCell<Vec<String>>,
        fail_pull: bool,
    }

    impl RecordingGit {
        fn record(&self, call: &str) {
            self.calls.borrow_mut().push(call.to_string());
        }
    }

    impl GitClient for RecordingGit {
        fn fetch(&self) -> Result<()> {
            self.record("fetch");
            Ok(())
        }
        fn pull(&self) -> Result<()> {
            self.record("pull");
            if self.fail_pull {
                return Err(SidebarError::git_command_failed("pull", "no upstream"));
            }
            Ok(())
        }
        fn add_all(&self) -> Result<()> {
            self.record("add");
            Ok(())
        }
        fn commit(&self, message: &str) -> Result<()> {
            self.record(&format!("commit:{message}"));
            Ok(())
        }
        fn push(&self) -> Result<()> {
            self.record("push");
            Ok(())
        }
    }

    fn options() -> JobOptions {
        JobOptions {
            do_sidebar: true,
            do_clean: false,
            configuration: Some(SidebarConfig::default()),
            do_git_sync: false,
            skip_credentials: false,
        }
    }

    #[test]
    fn test_full_run_writes_options_and_stamped_sidebar() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let renderer = FakeRenderer { succeed: true };

        let report = JobDriver::new(temp_dir.path(), &renderer).run(&options())?;

        assert!(report.config_written && report.rendered && report.credentials_appended);
        assert!(config::options_path(temp_dir.path()).exists());
        let sidebar = std::fs::read_to_string(renderer::sidebar_path(temp_dir.path()))?;
        assert!(sidebar.contains("Generated by wiki-sidebar"));
        Ok(())
    }

    #[test]
    fn test_skip_credentials() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let renderer = FakeRenderer { succeed: true };
        let options = JobOptions {
            skip_credentials: true,
            ..options()
        };

        JobDriver::new(temp_dir.path(), &renderer).run(&options)?;

        let sidebar = std::fs::read_to_string(renderer::sidebar_path(temp_dir.path()))?;
        assert_eq!(sidebar, "* [[Home]]\n");
        Ok(())
    }

    #[test]
    fn test_clean_removes_options_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let renderer = FakeRenderer { succeed: true };
        let options = JobOptions {
            do_clean: true,
            ..options()
        };

        let report = JobDriver::new(temp_dir.path(), &renderer).run(&options)?;

        assert!(report.config_written && report.cleaned);
        assert!(!config::options_path(temp_dir.path()).exists());
        Ok(())
    }

    #[test]
    fn test_clean_keeps_options_file_it_did_not_write() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let options_file = config::options_path(temp_dir.path());
        std::fs::write(&options_file, "{ not json")?;
        let renderer = FakeRenderer { succeed: true };
        let options = JobOptions {
            do_clean: true,
            configuration: None,
            ..options()
        };

        let report = JobDriver::new(temp_dir.path(), &renderer).run(&options)?;

        assert!(!report.cleaned);
        assert_eq!(std::fs::read_to_string(&options_file)?, "{ not json");
        Ok(())
    }

    #[test]
    fn test_without_configuration_nothing_is_written() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let renderer = FakeRenderer { succeed: true };
        let options = JobOptions {
            configuration: None,
            ..options()
        };

        let report = JobDriver::new(temp_dir.path(), &renderer).run(&options)?;

        assert!(!report.config_written);
        assert!(report.rendered);
        assert!(!config::options_path(temp_dir.path()).exists());
        Ok(())
    }

    #[test]
    fn test_skip_sidebar_does_not_render() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let renderer = FakeRenderer { succeed: true };
        let options = JobOptions {
            do_sidebar: false,
            ..options()
        };

        let report = JobDriver::new(temp_dir.path(), &renderer).run(&options)?;

        assert!(!report.rendered);
        assert!(!renderer::sidebar_path(temp_dir.path()).exists());
        Ok(())
    }

    #[test]
    fn test_git_sync_order() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let renderer = FakeRenderer { succeed: true };
        let git = RecordingGit::default();
        let options = JobOptions {
            do_git_sync: true,
            ..options()
        };

        let report = JobDriver::new(temp_dir.path(), &renderer)
            .with_git(&git)
            .run(&options)?;

        assert!(report.pushed);
        assert_eq!(
            *git.calls.borrow(),
            vec![
                "fetch".to_string(),
                "pull".to_string(),
                "add".to_string(),
                format!("commit:{COMMIT_MESSAGE}"),
                "push".to_string(),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_git_failures_are_best_effort() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let renderer = FakeRenderer { succeed: true };
        let git = RecordingGit {
            fail_pull: true,
            ..Default::default()
        };
        let options = JobOptions {
            do_git_sync: true,
            ..options()
        };

        let report = JobDriver::new(temp_dir.path(), &renderer)
            .with_git(&git)
            .run(&options)?;

        assert_eq!(report.git_warnings.len(), 1);
        assert!(report.pushed);
        Ok(())
    }

    #[test]
    fn test_git_sync_without_client_fails() {
        let temp_dir = TempDir::new().unwrap();
        let renderer = FakeRenderer { succeed: true };
        let options = JobOptions {
            do_git_sync: true,
            ..options()
        };

        let result = JobDriver::new(temp_dir.path(), &renderer).run(&options);
        assert!(matches!(result, Err(SidebarError::GitUnavailable)));
    }

    #[test]
    fn test_renderer_failure_cleans_up_but_does_not_push() {
        let temp_dir = TempDir::new().unwrap();
        let renderer = FakeRenderer { succeed: false };
        let git = RecordingGit::default();
        let options = JobOptions {
            do_clean: true,
            do_git_sync: true,
            ..options()
        };

        let result = JobDriver::new(temp_dir.path(), &renderer)
            .with_git(&git)
            .run(&options);

        assert!(matches!(result, Err(SidebarError::RendererFailed { .. })));
        assert!(!config::options_path(temp_dir.path()).exists());
        assert_eq!(*git.calls.borrow(), vec!["fetch".to_string(), "pull".to_string()]);
    }

    #[test]
    fn test_config_write_failure_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");
        let renderer = FakeRenderer { succeed: true };

        let result = JobDriver::new(&missing, &renderer).run(&options());
        assert!(matches!(result, Err(SidebarError::ConfigWriteFailed { .. })));
    }
}
