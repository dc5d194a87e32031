//! Node package manifest merging
//!
//! `package.json` is treated as an ordered document: merging a fragment of
//! dependency or script entries must never reorder the keys the fragment does
//! not mention. Fragments win on conflict, but a conflicting key keeps its
//! original position so repeated installs stay diff-friendly.

use serde_json::{Map, Value};
use std::path::Path;
use thiserror::Error;

/// Well-known manifest sections.
pub const DEPENDENCIES: &str = "dependencies";
pub const DEV_DEPENDENCIES: &str = "devDependencies";
pub const SCRIPTS: &str = "scripts";

/// Where new keys land relative to the entries already in a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// New keys go before every existing key (package lists).
    Prepend,
    /// New keys go after every existing key (script entries).
    Append,
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to parse manifest: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("manifest root is not a JSON object")]
    NotAnObject,

    #[error("manifest section '{0}' is not a JSON object")]
    SectionNotAnObject(String),
}

/// An ordered `package.json` document.
///
/// Only the sections a merge touches are interpreted; everything else is kept
/// verbatim so re-serializing is lossless for untouched fields.
#[derive(Debug, Clone)]
pub struct Manifest {
    root: Map<String, Value>,
}

impl Manifest {
    /// Parse a manifest document. Malformed input is fatal for the caller;
    /// there is no recovery path for a broken `package.json`.
    pub fn parse(contents: &str) -> Result<Self, ManifestError> {
        let value: Value = serde_json::from_str(contents)?;
        match value {
            Value::Object(root) => Ok(Self { root }),
            _ => Err(ManifestError::NotAnObject),
        }
    }

    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Write the manifest back out, pretty-printed with a trailing newline.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        use anyhow::Context;
        let rendered = self.to_string_pretty()?;
        std::fs::write(path, rendered)
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Merge `fragment` into the named section, creating the section if it
    /// does not exist yet. A created section is appended after the existing
    /// top-level keys.
    pub fn merge_section(
        &mut self,
        section: &str,
        fragment: &[(&str, &str)],
        placement: Placement,
    ) -> Result<(), ManifestError> {
        let entry = self
            .root
            .entry(section.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        let map = entry
            .as_object_mut()
            .ok_or_else(|| ManifestError::SectionNotAnObject(section.to_string()))?;
        merge_entries(map, fragment, placement);
        Ok(())
    }

    /// Access a section as an ordered map, if present and an object.
    pub fn section(&self, name: &str) -> Option<&Map<String, Value>> {
        self.root.get(name).and_then(Value::as_object)
    }

    pub fn to_string_pretty(&self) -> Result<String, ManifestError> {
        let mut rendered = serde_json::to_string_pretty(&self.root)?;
        rendered.push('\n');
        Ok(rendered)
    }
}

/// Merge string entries into an ordered map.
///
/// For every fragment key: if the key already exists, its value is
/// overwritten in place and its position is untouched. New keys are inserted
/// as a block, in fragment order, before (`Prepend`) or after (`Append`) the
/// existing entries. Keys not named by the fragment keep value and position.
pub fn merge_entries(existing: &mut Map<String, Value>, fragment: &[(&str, &str)], placement: Placement) {
    match placement {
        Placement::Append => {
            for (key, value) in fragment {
                // insert() overwrites in place for known keys, appends new ones
                existing.insert((*key).to_string(), Value::String((*value).to_string()));
            }
        }
        Placement::Prepend => {
            let mut merged = Map::new();
            for (key, value) in fragment {
                if !existing.contains_key(*key) {
                    merged.insert((*key).to_string(), Value::String((*value).to_string()));
                }
            }
            for (key, value) in std::mem::take(existing) {
                merged.insert(key, value);
            }
            for (key, value) in fragment {
                merged.insert((*key).to_string(), Value::String((*value).to_string()));
            }
            *existing = merged;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(map: &Map<String, Value>) -> Vec<&str> {
        map.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_disjoint_prepend_puts_fragment_first() {
        let mut manifest = Manifest::parse(r#"{"dependencies": {"vue": "^3.0.0"}}"#).unwrap();
        manifest
            .merge_section(DEPENDENCIES, &[("react", "^18.2.0")], Placement::Prepend)
            .unwrap();

        let deps = manifest.section(DEPENDENCIES).unwrap();
        assert_eq!(keys(deps), vec!["react", "vue"]);
        assert_eq!(deps.len(), 2);
    }

    #[test]
    fn test_disjoint_append_puts_fragment_last() {
        let mut manifest = Manifest::parse(r#"{"scripts": {"dev": "vite"}}"#).unwrap();
        manifest
            .merge_section(SCRIPTS, &[("lint", "eslint resources/js --fix")], Placement::Append)
            .unwrap();

        let scripts = manifest.section(SCRIPTS).unwrap();
        assert_eq!(keys(scripts), vec!["dev", "lint"]);
    }

    #[test]
    fn test_conflicting_key_fragment_wins_position_kept() {
        let mut manifest = Manifest::parse(
            r#"{"devDependencies": {"axios": "^1.0.0", "vite": "^4.0.0", "postcss": "^8.0.0"}}"#,
        )
        .unwrap();
        manifest
            .merge_section(
                DEV_DEPENDENCIES,
                &[("vite", "^5.0.0"), ("tailwindcss", "^3.2.1")],
                Placement::Prepend,
            )
            .unwrap();

        let deps = manifest.section(DEV_DEPENDENCIES).unwrap();
        // vite keeps its slot with the new version; only tailwindcss is new
        assert_eq!(keys(deps), vec!["tailwindcss", "axios", "vite", "postcss"]);
        assert_eq!(deps["vite"], "^5.0.0");
    }

    #[test]
    fn test_untouched_fields_round_trip() {
        let source = r#"{
  "name": "example-app",
  "private": true,
  "scripts": {
    "build": "vite build"
  }
}"#;
        let mut manifest = Manifest::parse(source).unwrap();
        manifest
            .merge_section(DEPENDENCIES, &[("react", "^18.2.0")], Placement::Prepend)
            .unwrap();

        let reparsed = Manifest::parse(&manifest.to_string_pretty().unwrap()).unwrap();
        assert_eq!(reparsed.root["name"], "example-app");
        assert_eq!(reparsed.root["private"], true);
        assert_eq!(reparsed.section(SCRIPTS).unwrap()["build"], "vite build");
        // top-level order survives, new section lands last
        assert_eq!(
            keys(&reparsed.root),
            vec!["name", "private", "scripts", "dependencies"]
        );
    }

    #[test]
    fn test_merge_creates_missing_section() {
        let mut manifest = Manifest::parse(r#"{"name": "example-app"}"#).unwrap();
        manifest
            .merge_section(SCRIPTS, &[("build", "vite build")], Placement::Append)
            .unwrap();
        assert_eq!(manifest.section(SCRIPTS).unwrap()["build"], "vite build");
    }

    #[test]
    fn test_fragment_order_preserved_within_block() {
        let mut manifest = Manifest::parse(r#"{"dependencies": {}}"#).unwrap();
        manifest
            .merge_section(
                DEPENDENCIES,
                &[("autoprefixer", "^10.4.12"), ("postcss", "^8.4.31"), ("tailwindcss", "^3.2.1")],
                Placement::Prepend,
            )
            .unwrap();
        let deps = manifest.section(DEPENDENCIES).unwrap();
        assert_eq!(keys(deps), vec!["autoprefixer", "postcss", "tailwindcss"]);
    }

    #[test]
    fn test_parse_failure_is_fatal() {
        assert!(Manifest::parse("{ not json").is_err());
        assert!(matches!(
            Manifest::parse("[1, 2, 3]"),
            Err(ManifestError::NotAnObject)
        ));
    }

    #[test]
    fn test_scalar_section_is_rejected() {
        let mut manifest = Manifest::parse(r#"{"scripts": "nope"}"#).unwrap();
        let err = manifest
            .merge_section(SCRIPTS, &[("build", "vite build")], Placement::Append)
            .unwrap_err();
        assert!(matches!(err, ManifestError::SectionNotAnObject(_)));
    }
}
