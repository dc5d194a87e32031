//! Explicit path configuration
//!
//! The installer never reaches for ambient globals to locate the target
//! project or the stub tree; both roots are captured here once and passed
//! down. All helpers return joined paths and do no I/O.

use std::path::{Path, PathBuf};

/// Well-known locations inside the target application skeleton.
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    root: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path relative to the project root.
    pub fn base_path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    /// Path inside `app/`.
    pub fn app_path(&self, rel: &str) -> PathBuf {
        self.root.join("app").join(rel)
    }

    /// Path inside `resources/`.
    pub fn resource_path(&self, rel: &str) -> PathBuf {
        self.root.join("resources").join(rel)
    }

    /// Path inside `bootstrap/`.
    pub fn bootstrap_path(&self, rel: &str) -> PathBuf {
        self.root.join("bootstrap").join(rel)
    }

    pub fn package_json(&self) -> PathBuf {
        self.root.join("package.json")
    }
}

/// Root of the shipped stub tree (`stubs/` next to the binary by default,
/// overridable with `--stub-dir` for development).
#[derive(Debug, Clone)]
pub struct StubPaths {
    root: PathBuf,
}

impl StubPaths {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// A stub group directory, e.g. `inertia-common`.
    pub fn dir(&self, group: &str) -> PathBuf {
        self.root.join(group)
    }

    /// A single stub file inside a group.
    pub fn file(&self, group: &str, rel: &str) -> PathBuf {
        self.root.join(group).join(rel)
    }
}
