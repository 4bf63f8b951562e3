//! Scan engine and batch helpers.
//!
//! `validate_content` is the pure core: text in, (issues, optional fixed
//! text) out. File reads and write-backs live in thin wrappers so the
//! engine stays independently testable. Detection always runs against the
//! pristine input; fixes are chained on a running buffer in rule order.

use crate::models::{FileResult, Issue, Summary, WriteOutcome};
use crate::rules::builtin_rules;
use glob::{glob, PatternError};
use std::fs;
use std::path::{Path, PathBuf};

/// Apply every builtin rule to `content`.
///
/// Returns the accumulated issues and the fixed buffer. The buffer is
/// `Some` whenever at least one fired rule carried a fix, even if the fix
/// left the content unchanged (a no-op fix still marks the file as
/// auto-fixable, matching the write-back contract).
pub fn validate_content(content: &str) -> (Vec<Issue>, Option<String>) {
    let mut issues = Vec::new();
    let mut buffer = content.to_string();
    let mut fixed_any = false;

    for rule in builtin_rules() {
        let matches = rule.matches(content);
        if matches == 0 {
            continue;
        }
        issues.push(Issue {
            rule: rule.name.clone(),
            description: rule.description.clone(),
            matches,
            can_auto_fix: rule.can_auto_fix(),
        });
        if let Some(fix) = rule.fix {
            buffer = fix(&buffer);
            fixed_any = true;
        }
    }

    (issues, if fixed_any { Some(buffer) } else { None })
}

/// Scan a single file. Read failures are captured into the result rather
/// than propagated; the batch never aborts on one bad file.
pub fn validate_file(path: &Path) -> FileResult {
    let file = path.to_string_lossy().to_string();
    match fs::read_to_string(path) {
        Ok(content) => {
            let (issues, fixed) = validate_content(&content);
            FileResult {
                file,
                issues,
                fixed,
                error: None,
            }
        }
        Err(e) => FileResult {
            file,
            issues: Vec::new(),
            fixed: None,
            error: Some(e.to_string()),
        },
    }
}

/// Scan a file set in order. Programmatic batch entry point; printing is
/// the caller's concern.
pub fn validate_files(paths: &[PathBuf]) -> Vec<FileResult> {
    paths.iter().map(|p| validate_file(p)).collect()
}

/// Resolve a glob pattern relative to `root` into file paths.
///
/// Unreadable entries are skipped. Order is whatever the glob crate
/// yields, which is stable run-to-run over an unchanged tree.
pub fn matching_files(root: &Path, pattern: &str) -> Result<Vec<PathBuf>, PatternError> {
    let abs = root.join(pattern);
    let mut targets = Vec::new();
    for entry in glob(&abs.to_string_lossy())? {
        if let Ok(p) = entry {
            targets.push(p);
        }
    }
    Ok(targets)
}

/// Derive batch counts from scan results.
pub fn summarize(results: &[FileResult]) -> Summary {
    Summary {
        files: results.len(),
        with_issues: results.iter().filter(|r| r.has_issues()).count(),
        auto_fixable: results.iter().filter(|r| r.fixed.is_some()).count(),
    }
}

/// Write each fixed buffer back over its original path, one whole-file
/// write per file. Per-file failures are captured and the pass continues.
/// Results without fixed content are skipped entirely.
pub fn apply_fixes(results: &[FileResult]) -> Vec<WriteOutcome> {
    results
        .iter()
        .filter_map(|r| {
            let fixed = r.fixed.as_ref()?;
            Some(match fs::write(&r.file, fixed) {
                Ok(()) => WriteOutcome {
                    file: r.file.clone(),
                    error: None,
                },
                Err(e) => WriteOutcome {
                    file: r.file.clone(),
                    error: Some(e.to_string()),
                },
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_clean_content_is_a_noop() {
        let (issues, fixed) = validate_content("Just a plain paragraph.\n");
        assert!(issues.is_empty());
        assert!(fixed.is_none());
    }

    #[test]
    fn test_escaped_numbered_list_scenario() {
        let (issues, fixed) = validate_content("8\\. Do this thing");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, "Numbered lists in MDX");
        assert_eq!(issues[0].matches, 1);
        assert!(issues[0].can_auto_fix);
        assert_eq!(fixed.as_deref(), Some("8. Do this thing"));
    }

    #[test]
    fn test_fraction_scenario_revalidates_clean() {
        let (_, fixed) = validate_content("Use ½ cup sugar");
        assert_eq!(fixed.as_deref(), Some("Use 1/2 cup sugar"));
        let (issues, _) = validate_content(fixed.as_deref().unwrap());
        assert!(issues.iter().all(|i| i.rule != "Fraction symbols"));
    }

    #[test]
    fn test_unterminated_fence_fires_without_fixed_content() {
        let (issues, fixed) = validate_content("intro\n```sh\nls\n");
        let fence = issues
            .iter()
            .find(|i| i.rule == "Unbalanced backticks in code blocks")
            .expect("fence rule fires");
        assert!(!fence.can_auto_fix);
        assert!(fixed.is_none());
    }

    #[test]
    fn test_fixes_chain_in_rule_order() {
        // Matches rules 1 and 6; the final buffer reflects both rewrites.
        let (issues, fixed) = validate_content("8\\. First — second");
        assert_eq!(issues.len(), 2);
        assert_eq!(fixed.as_deref(), Some("8. First - second"));
    }

    #[test]
    fn test_rule_two_can_reescape_what_rule_one_removed() {
        // "8\. Do" fires rule 1 (unescape to "8. Do"), and rule 2's detect
        // on the ORIGINAL content does not fire (the line starts "8\."
        // rather than "8. "), so the escape stays removed. But "8. Do" on
        // its own fires rule 2 and comes back escaped. Detection on
        // pristine input plus chained fixes makes both outcomes coexist.
        let (_, fixed) = validate_content("8\\. Do this thing");
        assert_eq!(fixed.as_deref(), Some("8. Do this thing"));

        let (issues, fixed) = validate_content("8. Do this thing");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, "Numbered lists causing parser errors");
        assert_eq!(fixed.as_deref(), Some("8\\. Do this thing"));
    }

    #[test]
    fn test_noop_fix_still_marks_content_fixable() {
        // Rule 2 fires but its per-line condition never holds, so the
        // buffer is unchanged while still being reported as fixable.
        let (issues, fixed) = validate_content("1. apples\n2. bananas\n");
        assert_eq!(issues.len(), 1);
        assert!(issues[0].can_auto_fix);
        assert_eq!(fixed.as_deref(), Some("1. apples\n2. bananas\n"));
    }

    #[test]
    fn test_validate_file_captures_read_errors() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.mdx");
        let result = validate_file(&missing);
        assert!(result.error.is_some());
        assert!(result.has_issues());
        assert!(result.issues.is_empty());
        assert!(result.fixed.is_none());
    }

    #[test]
    fn test_batch_summary_over_mixed_file_set() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        // One file with a fixable issue (em dash) and a non-fixable one
        // (unterminated fence); two clean files.
        let mut f = std::fs::File::create(root.join("bad.mdx")).unwrap();
        writeln!(f, "a — b\n```js\nlet x = 1;").unwrap();
        std::fs::write(root.join("clean1.mdx"), "hello\n").unwrap();
        std::fs::write(root.join("clean2.mdx"), "world\n").unwrap();

        let files = matching_files(root, "*.mdx").unwrap();
        assert_eq!(files.len(), 3);
        let results = validate_files(&files);
        let summary = summarize(&results);
        assert_eq!(
            summary,
            Summary {
                files: 3,
                with_issues: 1,
                auto_fixable: 1,
            }
        );
    }

    #[test]
    fn test_apply_fixes_writes_back_and_skips_unfixable() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        std::fs::write(root.join("dash.mdx"), "a — b\n").unwrap();
        std::fs::write(root.join("fence.mdx"), "```js\nopen\n").unwrap();

        let files = matching_files(root, "*.mdx").unwrap();
        let results = validate_files(&files);
        let outcomes = apply_fixes(&results);
        // Only the em-dash file carries fixed content.
        assert_eq!(outcomes.len(), 1);
        assert!(outcomes[0].error.is_none());
        assert_eq!(
            std::fs::read_to_string(root.join("dash.mdx")).unwrap(),
            "a - b\n"
        );
        // The unfixable file is left untouched.
        assert_eq!(
            std::fs::read_to_string(root.join("fence.mdx")).unwrap(),
            "```js\nopen\n"
        );
    }

    #[test]
    fn test_matching_files_rejects_bad_pattern() {
        let dir = tempdir().unwrap();
        assert!(matching_files(dir.path(), "[").is_err());
    }
}
