//! External package-manager invocation
//!
//! The install run ends by delegating to whatever Node package manager the
//! skeleton already committed to, detected by lock file. Commands run
//! sequentially with inherited stdio; a non-zero exit aborts the run.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use thiserror::Error;
use tokio::process::Command;

/// Supported Node package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Pnpm,
    Yarn,
    Bun,
    Deno,
    Npm,
}

/// Lock files checked in priority order; npm is the fallback.
const LOCK_FILES: &[(&str, PackageManager)] = &[
    ("pnpm-lock.yaml", PackageManager::Pnpm),
    ("yarn.lock", PackageManager::Yarn),
    ("bun.lockb", PackageManager::Bun),
    ("deno.lock", PackageManager::Deno),
];

impl PackageManager {
    /// Pick the package manager by the lock file present in the project root.
    pub fn detect(root: &Path) -> Self {
        for (lock_file, manager) in LOCK_FILES {
            if root.join(lock_file).exists() {
                return *manager;
            }
        }
        PackageManager::Npm
    }

    pub fn binary(&self) -> &'static str {
        match self {
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
            PackageManager::Deno => "deno",
            PackageManager::Npm => "npm",
        }
    }

    pub fn install_args(&self) -> &'static [&'static str] {
        &["install"]
    }

    pub fn build_args(&self) -> &'static [&'static str] {
        match self {
            PackageManager::Deno => &["task", "build"],
            PackageManager::Yarn => &["run", "build"],
            PackageManager::Pnpm => &["run", "build"],
            PackageManager::Bun => &["run", "build"],
            PackageManager::Npm => &["run", "build"],
        }
    }
}

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("required package installation failed: `{command}` exited with status {status}")]
    DependencyInstall { command: String, status: i32 },

    #[error("`{command}` exited with status {status}")]
    CommandFailed { command: String, status: i32 },
}

fn render_command(program: &str, args: &[&str]) -> String {
    let mut rendered = program.to_string();
    for arg in args {
        rendered.push(' ');
        rendered.push_str(arg);
    }
    rendered
}

/// Run one external command in `cwd`, streaming its output to the terminal.
pub async fn run_command(program: &str, args: &[&str], cwd: &Path) -> Result<()> {
    let rendered = render_command(program, args);
    println!("{} {}", "Running:".dimmed(), rendered.yellow());

    let status = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .status()
        .await
        .with_context(|| format!("Failed to spawn `{}`", rendered))?;

    if !status.success() {
        return Err(InstallError::CommandFailed {
            command: rendered,
            status: status.code().unwrap_or(-1),
        }
        .into());
    }
    Ok(())
}

/// `composer require` the server-side packages the stack depends on.
/// Failure here is the distinguished dependency-install error: nothing has
/// been written to the project yet, so the run can abort cleanly.
pub async fn require_composer_packages(root: &Path, packages: &[&str]) -> Result<()> {
    let mut args = vec!["require"];
    args.extend_from_slice(packages);
    let rendered = render_command("composer", &args);
    println!("{} {}", "Running:".dimmed(), rendered.yellow());

    let status = Command::new("composer")
        .args(&args)
        .current_dir(root)
        .status()
        .await
        .with_context(|| format!("Failed to spawn `{}`", rendered))?;

    if !status.success() {
        return Err(InstallError::DependencyInstall {
            command: rendered,
            status: status.code().unwrap_or(-1),
        }
        .into());
    }
    Ok(())
}

/// Install and build front-end assets with the detected package manager.
pub async fn install_and_build(manager: PackageManager, root: &Path) -> Result<()> {
    run_command(manager.binary(), manager.install_args(), root).await?;
    run_command(manager.binary(), manager.build_args(), root).await
}
