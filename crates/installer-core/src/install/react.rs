//! Inertia React stack installation

use super::{fragments, Installer};
use crate::options::TestFramework;
use crate::patch::{patch_file, PatchMode};
use crate::stubs::{copy_stub_dir, copy_stub_file};
use anyhow::Result;
use colored::Colorize;

const CREATE_ROOT_IMPORT: &str = "import { createRoot } from 'react-dom/client';";

const HYDRATE_ROOT_IMPORT: &str = "import { createRoot, hydrateRoot } from 'react-dom/client';";

const CLIENT_RENDER_BLOCK: &str = "        const root = createRoot(el);

        root.render(<App {...props} />);";

const SSR_RENDER_BLOCK: &str = "        if (import.meta.env.SSR) {
            hydrateRoot(el, <App {...props} />);
            return;
        }

        createRoot(el).render(<App {...props} />);";

pub(crate) async fn install(installer: &Installer) -> Result<()> {
    let selection = installer.selection();
    let paths = installer.paths();
    let stubs = installer.stubs();
    let typescript = selection.typescript;
    let variant_dir = if typescript {
        "inertia-react-ts"
    } else {
        "inertia-react"
    };

    // Server-side packages
    installer.require_composer_packages().await?;

    // NPM packages
    installer.update_node_packages(fragments::REACT_PACKAGES)?;
    if typescript {
        installer.update_node_packages(fragments::REACT_TYPESCRIPT_PACKAGES)?;
    }

    if selection.eslint {
        installer.update_node_packages(fragments::REACT_ESLINT_PACKAGES)?;
        if typescript {
            installer.update_node_packages(fragments::REACT_ESLINT_TYPESCRIPT_PACKAGES)?;
        }
        installer.update_node_scripts(fragments::REACT_LINT_SCRIPT)?;

        copy_stub_file(
            &stubs.file("inertia-react-ts", ".eslintrc.json"),
            &paths.base_path(".eslintrc.json"),
        )
        .await?;
        copy_stub_file(
            &stubs.file("inertia-common", ".prettierrc"),
            &paths.base_path(".prettierrc"),
        )
        .await?;
    }

    // Providers + controllers
    copy_stub_dir(
        &stubs.file("inertia-common", "app/Providers"),
        &paths.app_path("Providers"),
    )
    .await?;
    copy_stub_dir(
        &stubs.file("inertia-common", "app/Http/Controllers"),
        &paths.app_path("Http/Controllers"),
    )
    .await?;

    // Middleware
    installer.register_inertia_middleware()?;
    copy_stub_file(
        &stubs.file("inertia-common", "app/Http/Middleware/HandleInertiaRequests.php"),
        &paths.app_path("Http/Middleware/HandleInertiaRequests.php"),
    )
    .await?;

    // Views
    copy_stub_file(
        &stubs.file("inertia-react", "resources/views/app.blade.php"),
        &paths.resource_path("views/app.blade.php"),
    )
    .await?;
    installer
        .remove_stale_file("resources/views/welcome.blade.php")
        .await?;

    // Components + Pages
    for dir in ["Components", "Layouts", "Pages"] {
        copy_stub_dir(
            &stubs.file(variant_dir, &format!("resources/js/{}", dir)),
            &paths.resource_path(&format!("js/{}", dir)),
        )
        .await?;
    }
    if typescript {
        copy_stub_dir(
            &stubs.file(variant_dir, "resources/js/types"),
            &paths.resource_path("js/types"),
        )
        .await?;
    }

    // Feature tests
    let tests_dir = match selection.test_framework {
        TestFramework::Pest => "pest-tests/Feature",
        TestFramework::PhpUnit => "tests/Feature",
    };
    copy_stub_dir(
        &stubs.file("inertia-common", tests_dir),
        &paths.base_path("tests/Feature"),
    )
    .await?;

    // Routes
    copy_stub_file(
        &stubs.file("inertia-common", "routes/web.php"),
        &paths.base_path("routes/web.php"),
    )
    .await?;
    copy_stub_file(
        &stubs.file("inertia-common", "routes/auth.php"),
        &paths.base_path("routes/auth.php"),
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
        &stubs.file("inertia-common", "tailwind.config.js"),
        &paths.base_path("tailwind.config.js"),
    )
    .await?;
    copy_stub_file(
        &stubs.file(variant_dir, "vite.config.js"),
        &paths.base_path("vite.config.js"),
    )
    .await?;

    if typescript {
        copy_stub_file(
            &stubs.file(variant_dir, "tsconfig.json"),
            &paths.base_path("tsconfig.json"),
        )
        .await?;
        copy_stub_file(
            &stubs.file(variant_dir, "resources/js/app.tsx"),
            &paths.resource_path("js/app.tsx"),
        )
        .await?;

        installer.rename_bootstrap_to_typescript().await?;

        patch_file(
            &paths.package_json(),
            "\"vite build",
            "\"tsc && vite build",
            PatchMode::AllOccurrences,
        )?;
        patch_file(
            &paths.base_path("vite.config.js"),
            ".jsx",
            ".tsx",
            PatchMode::AllOccurrences,
        )?;
        patch_file(
            &paths.resource_path("views/app.blade.php"),
            ".jsx",
            ".tsx",
            PatchMode::AllOccurrences,
        )?;
        patch_file(
            &paths.base_path("tailwind.config.js"),
            ".vue",
            ".tsx",
            PatchMode::AllOccurrences,
        )?;
    } else {
        copy_stub_file(
            &stubs.file(variant_dir, "resources/js/app.jsx"),
            &paths.resource_path("js/app.jsx"),
        )
        .await?;

        patch_file(
            &paths.base_path("tailwind.config.js"),
            ".vue",
            ".jsx",
            PatchMode::AllOccurrences,
        )?;
    }

    // The skeleton's plain JS entry is superseded by the copied one
    installer.remove_stale_file("resources/js/app.js").await?;

    if selection.ssr {
        install_ssr(installer).await?;
    }

    installer.install_node_dependencies().await?;

    println!();
    println!(
        "{}",
        "Inertia React scaffolding installed successfully."
            .green()
            .bold()
    );
    Ok(())
}

/// SSR extras: server entry, vite SSR input, client hydration, Ziggy routes,
/// build script and gitignore adjustments.
async fn install_ssr(installer: &Installer) -> Result<()> {
    let paths = installer.paths();
    let stubs = installer.stubs();
    let typescript = installer.selection().typescript;
    let ext = if typescript { "tsx" } else { "jsx" };
    let variant_dir = if typescript {
        "inertia-react-ts"
    } else {
        "inertia-react"
    };

    copy_stub_file(
        &stubs.file(variant_dir, &format!("resources/js/ssr.{}", ext)),
        &paths.resource_path(&format!("js/ssr.{}", ext)),
    )
    .await?;

    patch_file(
        &paths.base_path("vite.config.js"),
        &format!("input: 'resources/js/app.{}',", ext),
        &format!(
            "input: 'resources/js/app.{}',\n            ssr: 'resources/js/ssr.{}',",
            ext, ext
        ),
        PatchMode::AllOccurrences,
    )?;

    let app_entry = paths.resource_path(&format!("js/app.{}", ext));
    patch_file(
        &app_entry,
        CREATE_ROOT_IMPORT,
        HYDRATE_ROOT_IMPORT,
        PatchMode::AllOccurrences,
    )?;
    patch_file(
        &app_entry,
        CLIENT_RENDER_BLOCK,
        SSR_RENDER_BLOCK,
        PatchMode::AllOccurrences,
    )?;

    installer.configure_ziggy_for_ssr()?;

    patch_file(
        &paths.package_json(),
        "vite build",
        "vite build && vite build --ssr",
        PatchMode::AllOccurrences,
    )?;
    patch_file(
        &paths.base_path(".gitignore"),
        "/node_modules",
        "/bootstrap/ssr\n/node_modules",
        PatchMode::AllOccurrences,
    )?;

    Ok(())
}
