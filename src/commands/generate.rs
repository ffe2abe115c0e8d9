use crate::commands::{
    interactive::execute_interactive,
    job::{JobDriver, JobOptions, JobReport},
    silent::{execute_silent, SilentOverrides},
};
use crate::core::{
    config::{self, PartialConfig},
    error::Result,
    git::{ensure_git_available, GitRepo},
    prompt::TerminalPrompter,
    renderer::{ProcessRenderer, DEFAULT_RENDERER},
};
use clap::Args;
use std::path::Path;

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Pull before and commit + push after generating
    #[arg(long)]
    pub git_push: bool,

    /// Remove _options.json after the run instead of keeping it
    #[arg(long)]
    pub skip_options: bool,

    /// Only save options, do not generate _Sidebar.md
    #[arg(long)]
    pub skip_save: bool,

    /// Do not append the generated-by comment to _Sidebar.md
    #[arg(long)]
    pub skip_credentials: bool,

    /// Run without prompts, using saved options and flags only
    #[arg(long)]
    pub silent: bool,

    /// Category separator (silent mode)
    #[arg(long, requires = "silent")]
    pub separator: Option<String>,

    /// Link template containing %s (silent mode)
    #[arg(long, requires = "silent")]
    pub link_template: Option<String>,

    /// Category menu template containing %s (silent mode)
    #[arg(long, requires = "silent")]
    pub menu_template: Option<String>,

    /// Space-separated page indices in sidebar order (silent mode)
    #[arg(long, requires = "silent")]
    pub order: Option<String>,

    /// Program that renders the sidebar
    #[arg(long, default_value = DEFAULT_RENDERER)]
    pub renderer: String,
}

impl GenerateArgs {
    fn silent_overrides(&self) -> SilentOverrides {
        SilentOverrides {
            separator: self.separator.clone(),
            link_template: self.link_template.clone(),
            menu_template: self.menu_template.clone(),
            order: self.order.clone(),
        }
    }
}

/// Read `_options.json`; problems are reported and treated as "no file"
pub fn read_persisted(workdir: &Path) -> Option<PartialConfig> {
    match config::load_persisted(workdir) {
        Ok(persisted) => persisted,
        Err(e) => {
            log::info!("Ignoring saved options: {e}");
            None
        }
    }
}

pub fn execute_generate(args: &GenerateArgs, workdir: &Path) -> Result<JobReport> {
    let git_repo = if args.git_push {
        ensure_git_available()?;
        Some(GitRepo::open(workdir)?)
    } else {
        None
    };

    let persisted = read_persisted(workdir);

    let configuration = if args.silent {
        execute_silent(workdir, persisted, &args.silent_overrides())?
    } else {
        let mut prompter = TerminalPrompter::default();
        Some(execute_interactive(workdir, persisted, &mut prompter)?)
    };

    let options = JobOptions {
        do_sidebar: !args.skip_save,
        do_clean: args.skip_options,
        configuration,
        do_git_sync: args.git_push,
        skip_credentials: args.skip_credentials,
    };

    let renderer = ProcessRenderer::new(&args.renderer);
    let mut driver = JobDriver::new(workdir, &renderer);
    if let Some(repo) = &git_repo {
        driver = driver.with_git(repo);
    }

    driver.run(&options)
}
