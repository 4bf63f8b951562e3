//! Shared data models for validation output.

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single fired rule on one file.
pub struct Issue {
    pub rule: String,
    pub description: String,
    pub matches: usize,
    pub can_auto_fix: bool,
}

#[derive(Debug, Clone)]
/// Outcome of scanning one file.
///
/// `fixed` is present whenever at least one fired rule carried a fix,
/// even when the fix turned out to be a no-op on this content. `error`
/// is set instead of `issues` when the file could not be read.
pub struct FileResult {
    pub file: String,
    pub issues: Vec<Issue>,
    pub fixed: Option<String>,
    pub error: Option<String>,
}

impl FileResult {
    /// Unreadable files count as having issues.
    pub fn has_issues(&self) -> bool {
        self.error.is_some() || !self.issues.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Aggregated batch counts used by printers.
pub struct Summary {
    pub files: usize,
    pub with_issues: usize,
    pub auto_fixable: usize,
}

#[derive(Debug, Clone)]
/// Per-file outcome of the write-back pass.
pub struct WriteOutcome {
    pub file: String,
    pub error: Option<String>,
}
