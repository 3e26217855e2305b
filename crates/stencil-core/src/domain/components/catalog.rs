//! The starter's static tooling components.
//!
//! Paths and payloads must stay byte-exact: the commit linter, hook runner,
//! staged-file runner, linter, formatter and editor read these files as-is.

use super::{FileSpec, Literal, StaticComponent};

/// Commit-message lint rules extending the conventional rule set.
pub const COMMIT_LINT: StaticComponent = StaticComponent::new(
    "commitlint",
    &[FileSpec::text(
        "commitlint.config.js",
        &[
            "module.exports = {",
            "  extends: ['@commitlint/config-conventional'],",
            "};\n",
        ],
    )],
);

/// Paths the linter skips.
pub const ESLINT_IGNORE: StaticComponent = StaticComponent::new(
    "eslint-ignore",
    &[FileSpec::text(".eslintignore", &["lib", "node_modules"])],
);

/// Git hooks run through husky, plus the ignore stub for its runtime dir.
pub const HUSKY: StaticComponent = StaticComponent::new(
    "husky",
    &[
        FileSpec::text(".husky/.gitignore", &["_\n"]),
        FileSpec::text(
            ".husky/commit-msg",
            &[
                "#!/bin/sh",
                ". \"$(dirname \"$0\")/_/husky.sh\"",
                "npx --no -- commitlint --edit \"\"\n",
            ],
        )
        .executable(),
        FileSpec::text(
            ".husky/pre-commit",
            &[
                "#!/bin/sh",
                ". \"$(dirname \"$0\")/_/husky.sh\"",
                "npm run test && npx lint-staged\n",
            ],
        )
        .executable(),
    ],
);

/// Commands run against staged files, keyed by glob.
pub const LINT_STAGED: StaticComponent = StaticComponent::new(
    "lint-staged",
    &[FileSpec::text(
        "lint-staged.config.js",
        &[
            "module.exports = {",
            "  '*.{js,json,ts,md}': 'prettier --write',",
            "  '*.{js,ts}': 'eslint --fix',",
            "};\n",
        ],
    )],
);

/// Paths the formatter skips, including its own config and lock files.
pub const PRETTIER_IGNORE: StaticComponent = StaticComponent::new(
    "prettier-ignore",
    &[FileSpec::text(
        ".prettierignore",
        &[
            ".eslintrc.json",
            ".husky",
            "jest.config.json",
            "lib",
            "node_modules",
            "package-lock.json",
            "package.json",
            "projen",
            "tsconfig.dev.json",
            "tsconfig.json\n",
        ],
    )],
);

/// Workspace editor settings.
pub const VSCODE: StaticComponent = StaticComponent::new(
    "vscode",
    &[FileSpec::object(
        ".vscode/settings.json",
        &[
            (
                "editor.defaultFormatter",
                Literal::Str("esbenp.prettier-vscode"),
            ),
            ("editor.formatOnPaste", Literal::Bool(true)),
            ("editor.formatOnSave", Literal::Bool(true)),
            ("javascript.validate.enable", Literal::Bool(false)),
            ("typescript.tsdk", Literal::Str("node_modules/typescript/lib")),
        ],
    )],
);

/// Static components in composition order.
pub const STATIC_COMPONENTS: &[StaticComponent] = &[
    COMMIT_LINT,
    ESLINT_IGNORE,
    HUSKY,
    LINT_STAGED,
    PRETTIER_IGNORE,
    VSCODE,
];
