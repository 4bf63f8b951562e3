//! Builtin validation rules for MDX content.
//!
//! The table is fixed and ordered; detection always runs against the
//! original content while fixes are chained on a running buffer, so the
//! declaration order here is load-bearing (rule 2 can re-introduce the
//! escape that rule 1 removed).

use regex::Regex;
use std::sync::OnceLock;

/// How a rule detects its pattern in file content.
///
/// Most rules are a plain regex counted over the whole content. Two rules
/// need a scanner function instead: stray `<` detection (the regex crate
/// has no lookahead) and unterminated code fences (a balance check).
pub enum Check {
    Pattern(Regex),
    Scan(fn(&str) -> usize),
}

/// A single validation rule with an optional deterministic fix.
pub struct ValidationRule {
    pub name: String,
    pub description: String,
    pub check: Check,
    pub fix: Option<fn(&str) -> String>,
}

impl ValidationRule {
    /// Count occurrences of this rule's pattern in `content`.
    pub fn matches(&self, content: &str) -> usize {
        match &self.check {
            Check::Pattern(re) => re.find_iter(content).count(),
            Check::Scan(scan) => scan(content),
        }
    }

    pub fn can_auto_fix(&self) -> bool {
        self.fix.is_some()
    }
}

static BUILTIN_RULES: OnceLock<Vec<ValidationRule>> = OnceLock::new();

/// The ordered rule table, built once per process.
pub fn builtin_rules() -> &'static [ValidationRule] {
    BUILTIN_RULES.get_or_init(|| {
        vec![
            ValidationRule {
                name: "Numbered lists in MDX".to_string(),
                description: "Escaped numbered lists (8\\.) should be unescaped (8.)"
                    .to_string(),
                check: Check::Pattern(
                    Regex::new(r"(?m)^\d+\\\.\s").expect("valid pattern"),
                ),
                fix: Some(unescape_numbered_lists),
            },
            ValidationRule {
                name: "Numbered lists causing parser errors".to_string(),
                description:
                    "Numbered lists at start of line might need escaping or formatting"
                        .to_string(),
                check: Check::Pattern(Regex::new(r"(?m)^\d+\.\s").expect("valid pattern")),
                fix: Some(escape_ambiguous_numbered_lists),
            },
            ValidationRule {
                name: "Unescaped HTML-like characters".to_string(),
                description: "Unescaped < characters that might be confused for HTML tags"
                    .to_string(),
                check: Check::Scan(stray_angle_count),
                fix: Some(escape_stray_angle_brackets),
            },
            ValidationRule {
                name: "JSX-like syntax errors".to_string(),
                description: "Commas in JSX-like tags can cause parser errors".to_string(),
                check: Check::Pattern(Regex::new(r"<(\w+)[^>]*,").expect("valid pattern")),
                fix: None,
            },
            ValidationRule {
                name: "Unbalanced backticks in code blocks".to_string(),
                description: "Code blocks that are not properly closed".to_string(),
                check: Check::Scan(unterminated_fence_count),
                fix: None,
            },
            ValidationRule {
                name: "Em dashes in content".to_string(),
                description: "Em dashes might cause encoding issues".to_string(),
                check: Check::Pattern(Regex::new("—").expect("valid pattern")),
                fix: Some(replace_em_dashes),
            },
            ValidationRule {
                name: "Temperature symbols".to_string(),
                description: "Temperature symbols found - ensure they render correctly"
                    .to_string(),
                check: Check::Pattern(Regex::new("°F|°C").expect("valid pattern")),
                fix: None,
            },
            ValidationRule {
                name: "Fraction symbols".to_string(),
                description:
                    "Unicode fraction symbols found - might need HTML entity conversion"
                        .to_string(),
                check: Check::Pattern(
                    Regex::new("½|¼|¾|⅓|⅔|⅛|⅜|⅝|⅞").expect("valid pattern"),
                ),
                fix: Some(replace_fraction_glyphs),
            },
        ]
    })
}

/// Remove the backslash escape from numbered list markers anywhere in the
/// content. The rewrite is deliberately unanchored while detection is
/// line-anchored; both halves mirror the behavior downstream tooling
/// expects.
fn unescape_numbered_lists(content: &str) -> String {
    let re = Regex::new(r"(\d+)\\\.").expect("valid pattern");
    re.replace_all(content, "${1}.").into_owned()
}

/// Escape numbered list markers on lines where the list text starts with
/// an uppercase letter. The condition looks at the byte two past the FIRST
/// period in the line; lines that do not qualify pass through untouched,
/// and when no line qualifies the original content is returned unchanged.
fn escape_ambiguous_numbered_lists(content: &str) -> String {
    let list_line = Regex::new(r"^\d+\.\s").expect("valid pattern");
    let marker = Regex::new(r"^(\d+)\.").expect("valid pattern");
    let mut changed = false;
    let lines: Vec<String> = content
        .split('\n')
        .map(|line| {
            if list_line.is_match(line) {
                if let Some(dot) = line.find('.') {
                    let upper = line
                        .as_bytes()
                        .get(dot + 2)
                        .map_or(false, |b| b.is_ascii_uppercase());
                    if upper {
                        changed = true;
                        return marker.replace(line, "${1}\\.").into_owned();
                    }
                }
            }
            line.to_string()
        })
        .collect();
    if changed {
        lines.join("\n")
    } else {
        content.to_string()
    }
}

fn well_formed_tag_re() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"^</?\w+[^>]*>").expect("valid pattern"))
}

/// Count `<` characters that do not open a well-formed `<word ...>` or
/// `</word>` tag at their position.
fn stray_angle_count(content: &str) -> usize {
    content
        .char_indices()
        .filter(|&(i, c)| c == '<' && !well_formed_tag_re().is_match(&content[i..]))
        .count()
}

fn escape_stray_angle_brackets(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for (i, c) in content.char_indices() {
        if c == '<' && !well_formed_tag_re().is_match(&content[i..]) {
            out.push_str("&lt;");
        } else {
            out.push(c);
        }
    }
    out
}

/// Line-based fence balance: toggles on every line opening with ```` ``` ````
/// and reports one occurrence when a fence stays open at end of content.
fn unterminated_fence_count(content: &str) -> usize {
    let mut open = false;
    for line in content.lines() {
        if line.trim_start().starts_with("```") {
            open = !open;
        }
    }
    if open {
        1
    } else {
        0
    }
}

fn replace_em_dashes(content: &str) -> String {
    content.replace('—', "-")
}

const FRACTIONS: [(char, &str); 9] = [
    ('½', "1/2"),
    ('¼', "1/4"),
    ('¾', "3/4"),
    ('⅓', "1/3"),
    ('⅔', "2/3"),
    ('⅛', "1/8"),
    ('⅜', "3/8"),
    ('⅝', "5/8"),
    ('⅞', "7/8"),
];

fn replace_fraction_glyphs(content: &str) -> String {
    let mut out = content.to_string();
    for (glyph, ascii) in FRACTIONS {
        out = out.replace(glyph, ascii);
    }
    out
}
