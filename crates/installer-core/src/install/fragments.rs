//! Dependency and script fragments merged into the target `package.json`
//!
//! Slice order is the insertion order inside each merged block, so these
//! tables are the single source of truth for what each stack pulls in.

/// Server-side packages required by every Inertia stack.
pub const COMPOSER_PACKAGES: &[&str] = &[
    "inertiajs/inertia-laravel:^1.0",
    "laravel/sanctum:^4.0",
    "tightenco/ziggy:^2.0",
];

pub const REACT_PACKAGES: &[(&str, &str)] = &[
    ("@headlessui/react", "^2.0.0"),
    ("@inertiajs/react", "^1.0.0"),
    ("@tailwindcss/forms", "^0.5.3"),
    ("@vitejs/plugin-react", "^4.2.0"),
    ("autoprefixer", "^10.4.12"),
    ("postcss", "^8.4.31"),
    ("tailwindcss", "^3.2.1"),
    ("react", "^18.2.0"),
    ("react-dom", "^18.2.0"),
];

pub const REACT_TYPESCRIPT_PACKAGES: &[(&str, &str)] = &[
    ("@types/node", "^18.13.0"),
    ("@types/react", "^18.0.28"),
    ("@types/react-dom", "^18.0.10"),
    ("typescript", "^5.0.2"),
];

pub const REACT_ESLINT_PACKAGES: &[(&str, &str)] = &[
    ("eslint", "^8.57.0"),
    ("eslint-plugin-react", "^7.34.4"),
    ("eslint-plugin-react-hooks", "^4.6.2"),
    ("eslint-plugin-prettier", "^5.1.3"),
    ("eslint-config-prettier", "^9.1.0"),
    ("prettier", "^3.3.0"),
    ("prettier-plugin-organize-imports", "^4.0.0"),
    ("prettier-plugin-tailwindcss", "^0.6.5"),
];

pub const REACT_ESLINT_TYPESCRIPT_PACKAGES: &[(&str, &str)] = &[
    ("@typescript-eslint/eslint-plugin", "^7.16.0"),
    ("@typescript-eslint/parser", "^7.16.0"),
];

pub const REACT_LINT_SCRIPT: &[(&str, &str)] = &[(
    "lint",
    "eslint resources/js --ext .js,.jsx,.ts,.tsx --ignore-path .gitignore --fix",
)];

pub const VUE_PACKAGES: &[(&str, &str)] = &[
    ("@inertiajs/vue3", "^1.0.0"),
    ("@tailwindcss/forms", "^0.5.3"),
    ("@vitejs/plugin-vue", "^5.0.0"),
    ("autoprefixer", "^10.4.12"),
    ("postcss", "^8.4.31"),
    ("tailwindcss", "^3.2.1"),
    ("vue", "^3.4.0"),
];

pub const VUE_TYPESCRIPT_PACKAGES: &[(&str, &str)] = &[
    ("@types/node", "^18.13.0"),
    ("typescript", "^5.0.2"),
    ("vue-tsc", "^2.0.24"),
];

pub const VUE_ESLINT_PACKAGES: &[(&str, &str)] = &[
    ("eslint", "^8.57.0"),
    ("eslint-plugin-vue", "^9.23.0"),
    ("@vue/eslint-config-prettier", "^9.0.0"),
    ("prettier", "^3.3.0"),
    ("prettier-plugin-organize-imports", "^4.0.0"),
    ("prettier-plugin-tailwindcss", "^0.6.5"),
];

pub const VUE_ESLINT_TYPESCRIPT_PACKAGES: &[(&str, &str)] =
    &[("@vue/eslint-config-typescript", "^13.0.0")];

pub const VUE_LINT_SCRIPT: &[(&str, &str)] = &[(
    "lint",
    "eslint resources/js --ext .js,.vue --ignore-path .gitignore --fix",
)];

pub const BLADE_PACKAGES: &[(&str, &str)] = &[
    ("@tailwindcss/forms", "^0.5.2"),
    ("alpinejs", "^3.4.2"),
    ("autoprefixer", "^10.4.2"),
    ("postcss", "^8.4.31"),
    ("tailwindcss", "^3.1.0"),
];
