//! Human-readable report rendering.
//!
//! The full report goes to standard output; configuration notes and
//! usage errors carry colored prefixes on stderr. Colors are disabled
//! when `NO_COLOR` is set.

use crate::models::{FileResult, Summary, WriteOutcome};
use owo_colors::OwoColorize;
use std::path::Path;

fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Prefix for stderr error lines.
pub fn error_prefix() -> String {
    if use_colors() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

/// Prefix for stderr notes.
pub fn note_prefix() -> String {
    if use_colors() {
        "note:".blue().bold().to_string()
    } else {
        "note:".to_string()
    }
}

/// Path as shown in the report: relative to the invocation root when
/// possible, the raw path otherwise.
pub fn display_path(file: &str, root: &Path) -> String {
    pathdiff::diff_paths(file, root)
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| file.to_string())
}

/// Print the batch header before per-file reports.
pub fn print_header(count: usize, pattern: &str) {
    let line = format!("Validating {} MDX files matching pattern: {}", count, pattern);
    if use_colors() {
        println!("{}\n", line.bold());
    } else {
        println!("{}\n", line);
    }
}

/// Print one file's report as the batch progresses.
pub fn print_file_report(result: &FileResult, root: &Path) {
    let color = use_colors();
    let file = display_path(&result.file, root);
    if let Some(err) = &result.error {
        if color {
            println!("{} {}: ERROR - {}", "✖".red(), file.bold(), err);
        } else {
            println!("✖ {}: ERROR - {}", file, err);
        }
    } else if result.has_issues() {
        if color {
            println!("{} {}:", "▲".yellow(), file.bold());
        } else {
            println!("▲ {}:", file);
        }
        for issue in &result.issues {
            println!("   - {}: {} occurrence(s)", issue.rule, issue.matches);
            println!("     {}", issue.description);
            if issue.can_auto_fix {
                if color {
                    println!("     {}", "can auto-fix".green());
                } else {
                    println!("     can auto-fix");
                }
            } else if color {
                println!("     {}", "manual fix required".yellow());
            } else {
                println!("     manual fix required");
            }
        }
        println!();
    } else if color {
        println!("{} {}: no issues found", "✔".green(), file);
    } else {
        println!("✔ {}: no issues found", file);
    }
}

/// Print the batch summary after all files are reported.
pub fn print_summary(summary: &Summary) {
    let line = format!(
        "— Summary — files={} with_issues={} auto_fixable={}",
        summary.files, summary.with_issues, summary.auto_fixable
    );
    if use_colors() {
        println!("\n{}", line.bold());
    } else {
        println!("\n{}", line);
    }
}

/// Print the outcome of the write-back pass.
pub fn print_fix_results(outcomes: &[WriteOutcome], root: &Path) {
    let color = use_colors();
    println!("\nApplying auto-fixes to {} files...\n", outcomes.len());
    for o in outcomes {
        let file = display_path(&o.file, root);
        match &o.error {
            None => {
                if color {
                    println!("{} {}", "✔ fixed:".green().bold(), file);
                } else {
                    println!("✔ fixed: {}", file);
                }
            }
            Some(err) => {
                if color {
                    println!("{} {}: {}", "✖ failed to fix".red().bold(), file, err);
                } else {
                    println!("✖ failed to fix {}: {}", file, err);
                }
            }
        }
    }
}

/// Suggest `--fix` when fixable issues were found but the flag is off.
pub fn print_fix_hint(fixable: usize) {
    println!(
        "\nRun with --fix to automatically apply fixes to {} files",
        fixable
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_display_path_relative_to_root() {
        let root = PathBuf::from("/repo");
        assert_eq!(
            display_path("/repo/src/content/post.mdx", &root),
            "src/content/post.mdx"
        );
    }

    #[test]
    fn test_display_path_outside_root() {
        let root = PathBuf::from("/repo/src");
        assert_eq!(
            display_path("/repo/other/post.mdx", &root),
            "../other/post.mdx"
        );
    }
}
