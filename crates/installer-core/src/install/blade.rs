//! Blade stack installation
//!
//! The lightest variant: no Inertia, no composer additions, no patches on
//! generated source beyond what the stubs already contain.

use super::{fragments, Installer};
use crate::options::TestFramework;
use crate::stubs::{copy_stub_dir, copy_stub_file};
use anyhow::Result;
use colored::Colorize;

pub(crate) async fn install(installer: &Installer) -> Result<()> {
    let selection = installer.selection();
    let paths = installer.paths();
    let stubs = installer.stubs();

    // NPM packages
    installer.update_node_packages(fragments::BLADE_PACKAGES)?;

    // Views + routes + JS entry (the stub welcome view overwrites the
    // skeleton's)
    copy_stub_dir(
        &stubs.file("blade", "resources/views"),
        &paths.resource_path("views"),
    )
    .await?;
    copy_stub_file(
        &stubs.file("blade", "routes/web.php"),
        &paths.base_path("routes/web.php"),
    )
    .await?;
    copy_stub_file(
        &stubs.file("blade", "resources/js/app.js"),
        &paths.resource_path("js/app.js"),
    )
    .await?;

    // Feature tests
    let tests_dir = match selection.test_framework {
        TestFramework::Pest => "pest-tests/Feature",
        TestFramework::PhpUnit => "tests/Feature",
    };
    copy_stub_dir(
        &stubs.file("blade", tests_dir),
        &paths.base_path("tests/Feature"),
    )
    .await?;

    // Tailwind / Vite
    copy_stub_file(
        &stubs.file("default", "resources/css/app.css"),
        &paths.resource_path("css/app.css"),
    )
    .await?;
    copy_stub_file(
        &stubs.file("default", "postcss.config.js"),
        &paths.base_path("postcss.config.js"),
    )
    .await?;
    copy_stub_file(
        &stubs.file("blade", "tailwind.config.js"),
        &paths.base_path("tailwind.config.js"),
    )
    .await?;
    copy_stub_file(
        &stubs.file("blade", "vite.config.js"),
        &paths.base_path("vite.config.js"),
    )
    .await?;

    installer.install_node_dependencies().await?;

    println!();
    println!(
        "{}",
        "Blade scaffolding installed successfully.".green().bold()
    );
    Ok(())
}
