//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "mdxlint",
    version,
    about = "Validate MDX content files for build-breaking syntax",
    long_about = "mdxlint — scan MDX content files against a fixed set of validation rules for syntax patterns known to break the site build, and optionally apply deterministic auto-fixes in place.\n\nConfiguration precedence: CLI > mdxlint.toml > defaults.",
    after_help = "Examples:\n  mdxlint\n  mdxlint 'src/content/**/*.mdx'\n  mdxlint --fix\n  mdxlint 'posts/*.mdx' --fix"
)]
/// Top-level CLI options.
pub struct Cli {
    /// Glob pattern selecting the files to scan (default: src/content/**/*.mdx)
    pub pattern: Option<String>,
    #[arg(
        long,
        action = clap::ArgAction::SetTrue,
        help = "Apply available auto-fixes, overwriting files in place"
    )]
    pub fix: bool,
    #[arg(long, help = "Repository root (default: current dir)")]
    pub repo_root: Option<String>,
}
