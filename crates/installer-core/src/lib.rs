//! Installer Core - Library for installing front-end stacks into a fresh
//! application skeleton
//!
//! This library provides the core functionality for the `inertia-tools` CLI:
//! given a freshly created web-application skeleton, it merges dependency
//! manifests, copies stub trees, rewrites generated source files by literal
//! block substitution, and delegates to the project's package manager to
//! install and build front-end assets.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Pure utilities: the ordered manifest
//!   merger ([`manifest`]), the literal block patcher ([`patch`]), stub
//!   copying ([`stubs`]) and package-manager detection ([`runner`])
//! - **Layer 2: Workflow Orchestration** - [`options`] validates the flag
//!   bag into an immutable [`StackSelection`]; [`install::Installer`] drives
//!   the per-variant sequences against explicit [`paths::ProjectPaths`]
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts
//!   (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompt module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use installer_core::{Installer, InstallOptions, ProjectPaths, StubPaths};
//!
//! let selection = InstallOptions { /* from your own flag parsing */ }.validate()?;
//! let installer = Installer::new(
//!     ProjectPaths::new(project_dir),
//!     StubPaths::new(stub_dir),
//!     selection,
//! );
//! installer.run().await?;
//! ```

pub mod install;
pub mod manifest;
pub mod options;
pub mod patch;
pub mod paths;
pub mod runner;
pub mod stubs;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use install::Installer;
pub use manifest::{Manifest, ManifestError, Placement};
pub use options::{InstallOptions, OptionsError, StackSelection, TestFramework, Variant};
pub use patch::{patch, patch_file, PatchError, PatchMode};
pub use paths::{ProjectPaths, StubPaths};
pub use runner::{InstallError, PackageManager};

#[cfg(feature = "tui")]
pub use tui::{run, InstallArgs};
