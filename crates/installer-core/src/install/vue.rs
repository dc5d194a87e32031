//! Inertia Vue stack installation

use super::{fragments, Installer};
use crate::options::TestFramework;
use crate::patch::{patch_file, PatchMode};
use crate::stubs::{copy_stub_dir, copy_stub_file};
use anyhow::Result;
use colored::Colorize;

const CREATE_APP_IMPORT: &str = "import { createApp, h } from 'vue';";

const SSR_APP_IMPORT: &str = "import { createApp, createSSRApp, h } from 'vue';";

const CLIENT_MOUNT_BLOCK: &str = "        createApp({ render: () => h(App, props) })
            .use(plugin)
            .mount(el);";

const SSR_MOUNT_BLOCK: &str = "        const app = import.meta.env.SSR
            ? createSSRApp({ render: () => h(App, props) })
            : createApp({ render: () => h(App, props) });

        app.use(plugin).mount(el);";

pub(crate) async fn install(installer: &Installer) -> Result<()> {
    let selection = installer.selection();
    let paths = installer.paths();
    let stubs = installer.stubs();
    let typescript = selection.typescript;
    let variant_dir = if typescript {
        "inertia-vue-ts"
    } else {
        "inertia-vue"
    };

    // Server-side packages
    installer.require_composer_packages().await?;

    // NPM packages
    installer.update_node_packages(fragments::VUE_PACKAGES)?;
    if typescript {
        installer.update_node_packages(fragments::VUE_TYPESCRIPT_PACKAGES)?;
    }

    if selection.eslint {
        installer.update_node_packages(fragments::VUE_ESLINT_PACKAGES)?;
        if typescript {
            installer.update_node_packages(fragments::VUE_ESLINT_TYPESCRIPT_PACKAGES)?;
        }
        installer.update_node_scripts(fragments::VUE_LINT_SCRIPT)?;

        copy_stub_file(
            &stubs.file("inertia-vue-ts", ".eslintrc.cjs"),
            &paths.base_path(".eslintrc.cjs"),
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
        &stubs.file(variant_dir, "resources/views/app.blade.php"),
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
            &stubs.file(variant_dir, "resources/js/app.ts"),
            &paths.resource_path("js/app.ts"),
        )
        .await?;

        installer.rename_bootstrap_to_typescript().await?;

        patch_file(
            &paths.package_json(),
            "\"vite build",
            "\"vue-tsc && vite build",
            PatchMode::AllOccurrences,
        )?;
        patch_file(
            &paths.base_path("vite.config.js"),
            "input: 'resources/js/app.js',",
            "input: 'resources/js/app.ts',",
            PatchMode::AllOccurrences,
        )?;

        // The skeleton's JS entry is superseded by app.ts
        installer.remove_stale_file("resources/js/app.js").await?;
    } else {
        copy_stub_file(
            &stubs.file(variant_dir, "resources/js/app.js"),
            &paths.resource_path("js/app.js"),
        )
        .await?;
    }

    if selection.ssr {
        install_ssr(installer).await?;
    }

    installer.install_node_dependencies().await?;

    println!();
    println!(
        "{}",
        "Inertia Vue scaffolding installed successfully."
            .green()
            .bold()
    );
    Ok(())
}

/// SSR extras, mirroring the React sequence with `createSSRApp` hydration.
async fn install_ssr(installer: &Installer) -> Result<()> {
    let paths = installer.paths();
    let stubs = installer.stubs();
    let typescript = installer.selection().typescript;
    let ext = if typescript { "ts" } else { "js" };
    let variant_dir = if typescript {
        "inertia-vue-ts"
    } else {
        "inertia-vue"
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
        CREATE_APP_IMPORT,
        SSR_APP_IMPORT,
        PatchMode::AllOccurrences,
    )?;
    patch_file(
        &app_entry,
        CLIENT_MOUNT_BLOCK,
        SSR_MOUNT_BLOCK,
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
