use clap::Parser;
use wiki_sidebar::commands::{execute_generate, GenerateArgs};
use wiki_sidebar::core::{print_error, print_success, SidebarError};
use std::env;

#[derive(Parser)]
#[command(name = "wiki-sidebar")]
#[command(about = "Generate the _Sidebar.md navigation file of a wiki")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(flatten)]
    generate: GenerateArgs,
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let result = env::current_dir()
        .map_err(SidebarError::Io)
        .and_then(|workdir| execute_generate(&cli.generate, &workdir));

    match result {
        Ok(report) => {
            log::debug!("Run report: {report:?}");
            print_success("Done");
        }
        Err(e) => {
            print_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
