//! Literal block patching for generated source files
//!
//! Optional features (SSR, TypeScript) are toggled by replacing exact text
//! blocks in files the stubs just produced. Matching is literal: no regex, no
//! whitespace normalization, no line-ending fixup. A search block that does
//! not occur is a hard error so the install sequence can abort instead of
//! shipping a half-configured project.

use anyhow::Context;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// How many occurrences of the search block to replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchMode {
    FirstOccurrence,
    AllOccurrences,
}

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("search block not found")]
    NotFound,

    #[error("search block not found in {}", path.display())]
    NotFoundInFile { path: PathBuf },
}

/// Replace an exact literal block inside `contents`.
///
/// Returns the patched text, or `PatchError::NotFound` with the input left
/// untouched on the caller's side when the block does not occur.
pub fn patch(
    contents: &str,
    search: &str,
    replacement: &str,
    mode: PatchMode,
) -> Result<String, PatchError> {
    if !contents.contains(search) {
        return Err(PatchError::NotFound);
    }

    Ok(match mode {
        PatchMode::FirstOccurrence => contents.replacen(search, replacement, 1),
        PatchMode::AllOccurrences => contents.replace(search, replacement),
    })
}

/// Patch a file in place. The not-found error names the file so the
/// orchestration can report which step broke.
pub fn patch_file(
    path: &Path,
    search: &str,
    replacement: &str,
    mode: PatchMode,
) -> anyhow::Result<()> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let patched = match patch(&contents, search, replacement, mode) {
        Ok(patched) => patched,
        Err(PatchError::NotFound) => {
            return Err(PatchError::NotFoundInFile {
                path: path.to_path_buf(),
            }
            .into());
        }
        Err(e) => return Err(e.into()),
    };

    std::fs::write(path, patched)
        .with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_occurrence_replaced_exactly() {
        let text = "import { createRoot } from 'react-dom/client';";
        let patched = patch(
            text,
            "import { createRoot } from 'react-dom/client';",
            "import { createRoot, hydrateRoot } from 'react-dom/client';",
            PatchMode::AllOccurrences,
        )
        .unwrap();
        assert_eq!(
            patched,
            "import { createRoot, hydrateRoot } from 'react-dom/client';"
        );
    }

    #[test]
    fn test_length_identity() {
        let text = "aaa needle bbb";
        let patched = patch(text, "needle", "replacement", PatchMode::AllOccurrences).unwrap();
        assert_eq!(
            patched.len(),
            text.len() - "needle".len() + "replacement".len()
        );
    }

    #[test]
    fn test_all_occurrences() {
        let patched = patch(".jsx .jsx .jsx", ".jsx", ".tsx", PatchMode::AllOccurrences).unwrap();
        assert_eq!(patched, ".tsx .tsx .tsx");
    }

    #[test]
    fn test_first_occurrence_only() {
        let patched = patch(".jsx .jsx", ".jsx", ".tsx", PatchMode::FirstOccurrence).unwrap();
        assert_eq!(patched, ".tsx .jsx");
    }

    #[test]
    fn test_missing_block_is_not_found() {
        let err = patch("unrelated text", "needle", "x", PatchMode::AllOccurrences).unwrap_err();
        assert!(matches!(err, PatchError::NotFound));
    }

    #[test]
    fn test_multiline_block_is_matched_literally() {
        let text = "        const root = createRoot(el);\n\n        root.render(<App {...props} />);\n";
        let patched = patch(
            text,
            "const root = createRoot(el);\n\n        root.render(<App {...props} />);",
            "createRoot(el).render(<App {...props} />);",
            PatchMode::AllOccurrences,
        )
        .unwrap();
        assert_eq!(patched, "        createRoot(el).render(<App {...props} />);\n");
    }

    #[test]
    fn test_no_whitespace_normalization() {
        // A block that differs only in indentation must not match
        assert!(patch("  foo();", "foo ();", "bar();", PatchMode::AllOccurrences).is_err());
    }

    #[test]
    fn test_patch_file_not_found_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vite.config.js");
        std::fs::write(&path, "export default {};\n").unwrap();

        let err = patch_file(&path, "input: 'resources/js/app.tsx',", "x", PatchMode::AllOccurrences)
            .unwrap_err();
        assert!(err.to_string().contains("vite.config.js"));
        // file untouched on failure
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "export default {};\n"
        );
    }

    #[test]
    fn test_patch_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(&path, "{\n    \"build\": \"vite build\"\n}\n").unwrap();

        patch_file(&path, "\"vite build", "\"tsc && vite build", PatchMode::AllOccurrences)
            .unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "{\n    \"build\": \"tsc && vite build\"\n}\n"
        );
    }
}
