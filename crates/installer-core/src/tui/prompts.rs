//! Interactive install flow using cliclack

use crate::install::Installer;
use crate::options::{InstallOptions, StackSelection, TestFramework, Variant};
use crate::paths::{ProjectPaths, StubPaths};
use anyhow::Result;
use std::path::PathBuf;

/// Environment variable overriding the stub tree location.
pub const STUB_DIR_ENV: &str = "INERTIA_TOOLS_STUB_DIR";

/// CLI arguments for the install command
#[derive(Debug, Clone, Default)]
pub struct InstallArgs {
    /// Stack variant; prompts interactively when absent
    pub variant: Option<Variant>,

    /// Scaffold with TypeScript support
    pub typescript: bool,

    /// Scaffold ESLint and Prettier configuration
    pub eslint: bool,

    /// Scaffold server-side rendering support
    pub ssr: bool,

    /// Install Pest feature tests instead of PHPUnit
    pub pest: bool,

    /// Target project directory (defaults to the current directory)
    pub directory: Option<PathBuf>,

    /// Local directory to read stubs from instead of the bundled tree
    pub stub_dir: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Run the install flow with interactive prompts filling in missing flags.
pub async fn run(args: InstallArgs) -> Result<()> {
    cliclack::intro("inertia-tools")?;

    // Step 1: Locate the target skeleton
    let project_dir = select_directory(&args)?;

    // Step 2: Collect and validate the option set, once, up front
    let selection = select_stack(&args)?;

    cliclack::log::success(format!(
        "Installing {}{}{}{} ({} tests)",
        selection.variant.display_name(),
        if selection.typescript { " + TypeScript" } else { "" },
        if selection.eslint { " + ESLint" } else { "" },
        if selection.ssr { " + SSR" } else { "" },
        selection.test_framework.display_name(),
    ))?;

    // Step 3: Run the install sequence
    let stub_root = resolve_stub_dir(&args);
    let installer = Installer::new(
        ProjectPaths::new(project_dir),
        StubPaths::new(stub_root),
        selection,
    );
    installer.run().await?;

    cliclack::outro("Happy coding!")?;
    Ok(())
}

fn resolve_stub_dir(args: &InstallArgs) -> PathBuf {
    args.stub_dir
        .clone()
        .or_else(|| std::env::var_os(STUB_DIR_ENV).map(PathBuf::from))
        .unwrap_or_else(bundled_stub_dir)
}

/// The bundled tree ships next to the binary, not in the target skeleton
/// the command runs from. Falls back to a cwd-relative `stubs/` when the
/// executable path is unavailable.
fn bundled_stub_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("stubs")))
        .unwrap_or_else(|| PathBuf::from("stubs"))
}

fn select_directory(args: &InstallArgs) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let path = if let Some(dir) = &args.directory {
        let p = if dir.is_absolute() {
            dir.clone()
        } else {
            current_dir.join(dir)
        };
        cliclack::log::info(format!("Using directory: {}", p.display()))?;
        p
    } else if args.yes {
        current_dir
    } else {
        let input: String = cliclack::input("Application directory")
            .placeholder(".")
            .default_input(".")
            .interact()?;

        if input.is_empty() || input == "." {
            current_dir
        } else {
            let p = PathBuf::from(&input);
            if p.is_absolute() {
                p
            } else {
                current_dir.join(p)
            }
        }
    };

    // The installer runs against an existing skeleton; a missing manifest
    // means this is not one.
    if !path.join("package.json").is_file() {
        anyhow::bail!(
            "No package.json found in {} - run this inside a freshly created application skeleton.",
            path.display()
        );
    }

    Ok(path)
}

fn select_stack(args: &InstallArgs) -> Result<StackSelection> {
    let options = if let Some(variant) = args.variant {
        // Flags given: non-interactive
        InstallOptions {
            variant,
            typescript: args.typescript,
            eslint: args.eslint,
            ssr: args.ssr,
            test_framework: test_framework_from(args.pest),
        }
    } else if args.yes {
        anyhow::bail!("A stack variant is required with --yes (blade, react or vue).");
    } else {
        prompt_options(args)?
    };

    match options.validate() {
        Ok(selection) => Ok(selection),
        Err(e) => {
            cliclack::log::error(format!("{}", e))?;
            anyhow::bail!("Invalid option combination.");
        }
    }
}

fn test_framework_from(pest: bool) -> TestFramework {
    if pest {
        TestFramework::Pest
    } else {
        TestFramework::PhpUnit
    }
}

fn prompt_options(args: &InstallArgs) -> Result<InstallOptions> {
    let variant: Variant = cliclack::select("Which stack would you like to install?")
        .item(Variant::Blade, Variant::Blade.display_name(), "")
        .item(Variant::React, Variant::React.display_name(), "Inertia")
        .item(Variant::Vue, Variant::Vue.display_name(), "Inertia")
        .interact()?;

    let (typescript, eslint, ssr) = if variant.is_inertia() {
        let typescript: bool = cliclack::confirm("Use TypeScript?")
            .initial_value(args.typescript)
            .interact()?;
        let eslint: bool = cliclack::confirm("Install ESLint and Prettier?")
            .initial_value(args.eslint)
            .interact()?;
        let ssr: bool = cliclack::confirm("Enable server-side rendering?")
            .initial_value(args.ssr)
            .interact()?;
        (typescript, eslint, ssr)
    } else {
        (false, false, false)
    };

    let test_framework: TestFramework = cliclack::select("Which test framework?")
        .item(TestFramework::PhpUnit, "PHPUnit", "")
        .item(TestFramework::Pest, "Pest", "")
        .interact()?;

    Ok(InstallOptions {
        variant,
        typescript,
        eslint,
        ssr,
        test_framework,
    })
}
