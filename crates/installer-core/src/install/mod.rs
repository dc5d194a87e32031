//! Install orchestration
//!
//! One `Installer` per run, built from a validated `StackSelection` and the
//! explicit path configuration. Each variant module drives the same fixed
//! sequence: merge manifest fragments, copy stub trees, apply literal
//! patches, then hand off to the package manager. Any failing step aborts
//! the run; nothing is rolled back.

pub mod blade;
pub mod fragments;
pub mod react;
pub mod vue;

use crate::manifest::{Manifest, Placement, DEV_DEPENDENCIES, SCRIPTS};
use crate::options::{StackSelection, Variant};
use crate::patch::{patch_file, PatchMode};
use crate::paths::{ProjectPaths, StubPaths};
use crate::runner;
use anyhow::{Context, Result};
use colored::Colorize;
use tokio::fs;

const MIDDLEWARE_SEARCH: &str = "->withMiddleware(function (Middleware $middleware) {";

const MIDDLEWARE_REPLACEMENT: &str = "->withMiddleware(function (Middleware $middleware) {
        $middleware->web(append: [
            \\App\\Http\\Middleware\\HandleInertiaRequests::class,
            \\Illuminate\\Http\\Middleware\\AddLinkHeadersForPreloadedAssets::class,
        ]);";

pub struct Installer {
    paths: ProjectPaths,
    stubs: StubPaths,
    selection: StackSelection,
}

impl Installer {
    pub fn new(paths: ProjectPaths, stubs: StubPaths, selection: StackSelection) -> Self {
        Self {
            paths,
            stubs,
            selection,
        }
    }

    pub fn paths(&self) -> &ProjectPaths {
        &self.paths
    }

    pub fn stubs(&self) -> &StubPaths {
        &self.stubs
    }

    pub fn selection(&self) -> &StackSelection {
        &self.selection
    }

    /// Run the full install sequence for the selected variant.
    pub async fn run(&self) -> Result<()> {
        match self.selection.variant {
            Variant::Blade => blade::install(self).await,
            Variant::React => react::install(self).await,
            Variant::Vue => vue::install(self).await,
        }
    }

    /// Merge a package fragment into `devDependencies`, new entries first.
    /// The manifest is re-read every call; call sites accumulate.
    pub(crate) fn update_node_packages(&self, fragment: &[(&str, &str)]) -> Result<()> {
        let path = self.paths.package_json();
        let mut manifest = Manifest::load(&path)?;
        manifest.merge_section(DEV_DEPENDENCIES, fragment, Placement::Prepend)?;
        manifest.save(&path)
    }

    /// Merge a script fragment into `scripts`, new entries last.
    pub(crate) fn update_node_scripts(&self, fragment: &[(&str, &str)]) -> Result<()> {
        let path = self.paths.package_json();
        let mut manifest = Manifest::load(&path)?;
        manifest.merge_section(SCRIPTS, fragment, Placement::Append)?;
        manifest.save(&path)
    }

    /// Register the Inertia middleware in the skeleton's `bootstrap/app.php`.
    pub(crate) fn register_inertia_middleware(&self) -> Result<()> {
        patch_file(
            &self.paths.bootstrap_path("app.php"),
            MIDDLEWARE_SEARCH,
            MIDDLEWARE_REPLACEMENT,
            PatchMode::FirstOccurrence,
        )
        .context("Failed to register Inertia middleware")
    }

    /// Require the server-side packages every Inertia stack needs.
    pub(crate) async fn require_composer_packages(&self) -> Result<()> {
        runner::require_composer_packages(self.paths.root(), fragments::COMPOSER_PACKAGES).await
    }

    /// Final step: install and build front-end assets with the package
    /// manager the skeleton's lock file selects.
    pub(crate) async fn install_node_dependencies(&self) -> Result<()> {
        println!(
            "{}",
            "Installing and building Node dependencies.".cyan().bold()
        );
        let manager = runner::PackageManager::detect(self.paths.root());
        runner::install_and_build(manager, self.paths.root()).await
    }

    /// Remove a file the stack replaces, ignoring a missing one.
    pub(crate) async fn remove_stale_file(&self, rel: &str) -> Result<()> {
        let path = self.paths.base_path(rel);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to remove {}", path.display()))
            }
        }
    }

    /// Rename `resources/js/bootstrap.js` to `.ts` when present.
    pub(crate) async fn rename_bootstrap_to_typescript(&self) -> Result<()> {
        let source = self.paths.resource_path("js/bootstrap.js");
        if fs::try_exists(&source).await.unwrap_or(false) {
            let target = self.paths.resource_path("js/bootstrap.ts");
            fs::rename(&source, &target)
                .await
                .with_context(|| format!("Failed to rename {}", source.display()))?;
        }
        Ok(())
    }

    /// Share Ziggy's route table with the client for SSR: extend the Inertia
    /// middleware, and the page-props type declaration on TypeScript stacks.
    pub(crate) fn configure_ziggy_for_ssr(&self) -> Result<()> {
        let middleware = self
            .paths
            .app_path("Http/Middleware/HandleInertiaRequests.php");

        patch_file(
            &middleware,
            "use Inertia\\Middleware;",
            "use Inertia\\Middleware;\nuse Tighten\\Ziggy\\Ziggy;",
            PatchMode::AllOccurrences,
        )?;

        patch_file(
            &middleware,
            "            'auth' => [
                'user' => $request->user(),
            ],",
            "            'auth' => [
                'user' => $request->user(),
            ],
            'ziggy' => fn () => [
                ...(new Ziggy)->toArray(),
                'location' => $request->url(),
            ],",
            PatchMode::AllOccurrences,
        )?;

        if self.selection.typescript {
            let types = self.paths.resource_path("js/types/index.d.ts");

            patch_file(
                &types,
                "export interface User {",
                "import { Config } from 'ziggy-js';\n\nexport interface User {",
                PatchMode::AllOccurrences,
            )?;

            patch_file(
                &types,
                "    auth: {
        user: User;
    };",
                "    auth: {
        user: User;
    };
    ziggy: Config & { location: string };",
                PatchMode::AllOccurrences,
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::TestFramework;
    use std::path::{Path, PathBuf};

    fn stub_root() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../stubs")
    }

    fn selection(typescript: bool) -> StackSelection {
        StackSelection {
            variant: Variant::React,
            typescript,
            eslint: false,
            ssr: true,
            test_framework: TestFramework::PhpUnit,
        }
    }

    fn installer(root: &Path, typescript: bool) -> Installer {
        Installer::new(
            ProjectPaths::new(root.to_path_buf()),
            StubPaths::new(stub_root()),
            selection(typescript),
        )
    }

    const SKELETON_BOOTSTRAP: &str = r#"<?php

use Illuminate\Foundation\Application;
use Illuminate\Foundation\Configuration\Exceptions;
use Illuminate\Foundation\Configuration\Middleware;

return Application::configure(basePath: dirname(__DIR__))
    ->withRouting(
        web: __DIR__.'/../routes/web.php',
    )
    ->withMiddleware(function (Middleware $middleware) {
        //
    })
    ->withExceptions(function (Exceptions $exceptions) {
        //
    })->create();
"#;

    #[test]
    fn test_register_inertia_middleware() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("bootstrap")).unwrap();
        std::fs::write(dir.path().join("bootstrap/app.php"), SKELETON_BOOTSTRAP).unwrap();

        installer(dir.path(), false)
            .register_inertia_middleware()
            .unwrap();

        let patched = std::fs::read_to_string(dir.path().join("bootstrap/app.php")).unwrap();
        assert!(patched.contains("$middleware->web(append: ["));
        assert!(patched.contains("HandleInertiaRequests::class"));
        assert!(patched.contains("AddLinkHeadersForPreloadedAssets::class"));
    }

    #[test]
    fn test_register_middleware_fails_on_unexpected_skeleton() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("bootstrap")).unwrap();
        std::fs::write(dir.path().join("bootstrap/app.php"), "<?php return [];\n").unwrap();

        let err = installer(dir.path(), false)
            .register_inertia_middleware()
            .unwrap_err();
        assert!(format!("{:#}", err).contains("search block not found"));
    }

    #[test]
    fn test_update_node_packages_accumulates() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("package.json"),
            r#"{"private": true, "devDependencies": {"vite": "^5.0.0"}}"#,
        )
        .unwrap();

        let installer = installer(dir.path(), false);
        installer
            .update_node_packages(&[("react", "^18.2.0"), ("react-dom", "^18.2.0")])
            .unwrap();
        installer
            .update_node_scripts(&[("lint", "eslint resources/js --fix")])
            .unwrap();

        let manifest = Manifest::load(&dir.path().join("package.json")).unwrap();
        let deps = manifest.section(DEV_DEPENDENCIES).unwrap();
        let keys: Vec<&str> = deps.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["react", "react-dom", "vite"]);
        assert_eq!(
            manifest.section(SCRIPTS).unwrap()["lint"],
            "eslint resources/js --fix"
        );
    }

    #[test]
    fn test_configure_ziggy_patches_shipped_middleware_stub() {
        let dir = tempfile::tempdir().unwrap();
        let middleware = dir.path().join("app/Http/Middleware/HandleInertiaRequests.php");
        std::fs::create_dir_all(middleware.parent().unwrap()).unwrap();
        std::fs::copy(
            stub_root().join("inertia-common/app/Http/Middleware/HandleInertiaRequests.php"),
            &middleware,
        )
        .unwrap();

        installer(dir.path(), false).configure_ziggy_for_ssr().unwrap();

        let patched = std::fs::read_to_string(&middleware).unwrap();
        assert!(patched.contains("use Tighten\\Ziggy\\Ziggy;"));
        assert!(patched.contains("'ziggy' => fn () => ["));
        // the auth block is still there, once
        assert_eq!(patched.matches("'auth' => [").count(), 1);
    }

    #[test]
    fn test_configure_ziggy_extends_type_declaration() {
        let dir = tempfile::tempdir().unwrap();
        let middleware = dir.path().join("app/Http/Middleware/HandleInertiaRequests.php");
        std::fs::create_dir_all(middleware.parent().unwrap()).unwrap();
        std::fs::copy(
            stub_root().join("inertia-common/app/Http/Middleware/HandleInertiaRequests.php"),
            &middleware,
        )
        .unwrap();

        let types = dir.path().join("resources/js/types/index.d.ts");
        std::fs::create_dir_all(types.parent().unwrap()).unwrap();
        std::fs::copy(
            stub_root().join("inertia-react-ts/resources/js/types/index.d.ts"),
            &types,
        )
        .unwrap();

        installer(dir.path(), true).configure_ziggy_for_ssr().unwrap();

        let patched = std::fs::read_to_string(&types).unwrap();
        assert!(patched.starts_with("import { Config } from 'ziggy-js';"));
        assert!(patched.contains("ziggy: Config & { location: string };"));
    }

    #[test]
    fn test_every_variant_ships_the_pages_the_routes_render() {
        // The shipped routes/web.php renders Welcome, and ProfileController
        // renders Profile/Edit; page resolution crashes at runtime if a
        // variant directory is missing either component.
        for (variant_dir, ext) in [
            ("inertia-react", "jsx"),
            ("inertia-react-ts", "tsx"),
            ("inertia-vue", "vue"),
            ("inertia-vue-ts", "vue"),
        ] {
            for page in ["Welcome", "Profile/Edit"] {
                let path = stub_root()
                    .join(variant_dir)
                    .join(format!("resources/js/Pages/{}.{}", page, ext));
                assert!(path.is_file(), "missing page stub: {}", path.display());
            }
        }
    }
}
