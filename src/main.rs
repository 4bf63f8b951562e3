//! mdxlint CLI binary entry point.
//! Resolves configuration, scans files, prints reports, and applies
//! fixes on request.

mod cli;
mod config;
mod models;
mod output;
mod rules;
mod validate;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    let eff = config::resolve_effective(
        cli.repo_root.as_deref(),
        cli.pattern.as_deref(),
        if cli.fix { Some(true) } else { None },
    );
    // Friendly note if no mdxlint config was found
    if config::load_config(&eff.repo_root).is_none() {
        eprintln!(
            "{} {}",
            output::note_prefix(),
            "No mdxlint.toml found; using defaults."
        );
    }

    let files = match validate::matching_files(&eff.repo_root, &eff.pattern) {
        Ok(files) => files,
        Err(e) => {
            eprintln!(
                "{} {}",
                output::error_prefix(),
                format!("Invalid glob pattern '{}': {}", eff.pattern, e)
            );
            std::process::exit(2);
        }
    };

    output::print_header(files.len(), &eff.pattern);
    let mut results = Vec::with_capacity(files.len());
    for path in &files {
        let result = validate::validate_file(path);
        output::print_file_report(&result, &eff.repo_root);
        results.push(result);
    }
    let summary = validate::summarize(&results);
    output::print_summary(&summary);

    // Write-back is a separate pass, never implied by validation alone.
    if eff.fix && summary.auto_fixable > 0 {
        let outcomes = validate::apply_fixes(&results);
        output::print_fix_results(&outcomes, &eff.repo_root);
    } else if summary.auto_fixable > 0 {
        output::print_fix_hint(summary.auto_fixable);
    }

    if summary.with_issues > 0 {
        std::process::exit(1);
    }
}
