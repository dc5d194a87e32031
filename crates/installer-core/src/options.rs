//! Install option set
//!
//! User-supplied flags are validated once, up front, into an immutable
//! `StackSelection`. Every later step branches on the closed enums here
//! instead of re-checking raw flags, so an invalid combination (SSR on a
//! Blade stack) is rejected before a single file is touched.

use clap::ValueEnum;
use std::fmt;
use thiserror::Error;

/// Front-end stack variants the installer can scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// Server-rendered Blade views with Alpine.js
    Blade,
    /// Inertia with React
    React,
    /// Inertia with Vue
    Vue,
}

impl Variant {
    pub fn display_name(&self) -> &'static str {
        match self {
            Variant::Blade => "Blade with Alpine",
            Variant::React => "React with Inertia",
            Variant::Vue => "Vue with Inertia",
        }
    }

    /// Inertia variants support SSR, TypeScript and ESLint scaffolding.
    pub fn is_inertia(&self) -> bool {
        matches!(self, Variant::React | Variant::Vue)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Back-end test framework whose feature-test stubs get installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TestFramework {
    PhpUnit,
    Pest,
}

impl TestFramework {
    pub fn display_name(&self) -> &'static str {
        match self {
            TestFramework::PhpUnit => "PHPUnit",
            TestFramework::Pest => "Pest",
        }
    }
}

impl fmt::Display for TestFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Raw flag bag as collected from the CLI or the interactive prompts.
#[derive(Debug, Clone)]
pub struct InstallOptions {
    pub variant: Variant,
    pub typescript: bool,
    pub eslint: bool,
    pub ssr: bool,
    pub test_framework: TestFramework,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("--ssr requires an Inertia variant (react or vue), got {0}")]
    SsrRequiresInertia(Variant),

    #[error("--typescript requires an Inertia variant (react or vue), got {0}")]
    TypeScriptRequiresInertia(Variant),

    #[error("--eslint requires an Inertia variant (react or vue), got {0}")]
    EslintRequiresInertia(Variant),
}

/// Validated, read-only selection driving the whole install run.
#[derive(Debug, Clone)]
pub struct StackSelection {
    pub variant: Variant,
    pub typescript: bool,
    pub eslint: bool,
    pub ssr: bool,
    pub test_framework: TestFramework,
}

impl InstallOptions {
    /// Validate the flag combination once, at the start of the run.
    pub fn validate(self) -> Result<StackSelection, OptionsError> {
        if !self.variant.is_inertia() {
            if self.ssr {
                return Err(OptionsError::SsrRequiresInertia(self.variant));
            }
            if self.typescript {
                return Err(OptionsError::TypeScriptRequiresInertia(self.variant));
            }
            if self.eslint {
                return Err(OptionsError::EslintRequiresInertia(self.variant));
            }
        }

        Ok(StackSelection {
            variant: self.variant,
            typescript: self.typescript,
            eslint: self.eslint,
            ssr: self.ssr,
            test_framework: self.test_framework,
        })
    }
}
