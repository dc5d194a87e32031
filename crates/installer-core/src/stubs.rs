//! Stub file and directory copying

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use walkdir::WalkDir;

/// Copy a single stub file, creating parent directories as needed.
pub async fn copy_stub_file(source: &Path, target: &Path) -> Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::copy(source, target)
        .await
        .with_context(|| format!("Failed to copy {} to {}", source.display(), target.display()))?;
    Ok(())
}

/// Recursively copy a stub directory tree into the target directory.
/// Returns the relative paths of the files copied.
pub async fn copy_stub_dir(source: &Path, target: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(target)
        .await
        .with_context(|| format!("Failed to create directory: {}", target.display()))?;

    let mut copied = Vec::new();
    for entry in WalkDir::new(source) {
        let entry =
            entry.with_context(|| format!("Failed to walk stub directory {}", source.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let rel = entry.path().strip_prefix(source)?.to_path_buf();
        let target_path = target.join(&rel);
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::copy(entry.path(), &target_path)
            .await
            .with_context(|| format!("Failed to write file: {}", target_path.display()))?;
        copied.push(rel);
    }

    Ok(copied)
}
