//! Inertia Tools CLI - Front-end stack installation for application skeletons

use anyhow::Result;
use clap::{Parser, Subcommand};
use installer_core::tui::InstallArgs;
use installer_core::{TestFramework, Variant};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "inertia-tools")]
#[command(about = "Install an Inertia front-end stack into a fresh application skeleton")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Install a front-end stack into the target skeleton
    Install(CliInstallArgs),
}

#[derive(Parser, Debug)]
pub struct CliInstallArgs {
    /// Stack variant to install (prompts when omitted)
    #[arg(value_enum)]
    pub variant: Option<Variant>,

    /// Scaffold with TypeScript support
    #[arg(long)]
    pub typescript: bool,

    /// Scaffold ESLint and Prettier configuration
    #[arg(long)]
    pub eslint: bool,

    /// Scaffold server-side rendering support
    #[arg(long)]
    pub ssr: bool,

    /// Feature-test framework whose stubs get installed
    #[arg(long = "test-framework", value_enum, default_value = "php-unit")]
    pub test_framework: TestFramework,

    /// Install Pest feature tests (shorthand for --test-framework pest)
    #[arg(long)]
    pub pest: bool,

    /// Target project directory
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Local directory to read stubs from instead of the bundled tree (for development use)
    #[arg(long = "stub-dir")]
    pub stub_dir: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliInstallArgs> for InstallArgs {
    fn from(args: CliInstallArgs) -> Self {
        InstallArgs {
            variant: args.variant,
            typescript: args.typescript,
            eslint: args.eslint,
            ssr: args.ssr,
            pest: args.pest || args.test_framework == TestFramework::Pest,
            directory: args.directory,
            stub_dir: args.stub_dir,
            yes: args.yes,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    let result = match args.command {
        Some(Command::Install(install_args)) => installer_core::run(install_args.into()).await,
        None => {
            // No subcommand provided, default to install behavior (interactive mode)
            installer_core::run(InstallArgs::default()).await
        }
    };

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
