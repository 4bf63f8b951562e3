//! Configuration discovery and effective settings resolution.
//!
//! mdxlint reads `mdxlint.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an
//! `Effective` config. Defaults:
//! - `pattern`: `src/content/**/*.mdx`
//! - `fix`: false
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `mdxlint.toml|yaml`.
pub struct MdxlintConfig {
    pub pattern: Option<String>,
    pub fix: Option<bool>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the driver after applying
/// precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub pattern: String,
    pub fix: bool,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `mdxlint.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("mdxlint.toml").exists()
            || cur.join("mdxlint.yaml").exists()
            || cur.join("mdxlint.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `MdxlintConfig` from `mdxlint.toml` or `mdxlint.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<MdxlintConfig> {
    let toml_path = root.join("mdxlint.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: MdxlintConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["mdxlint.yaml", "mdxlint.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: MdxlintConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and
/// defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_pattern: Option<&str>,
    cli_fix: Option<bool>,
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let cfg = load_config(&repo_root).unwrap_or_default();

    let pattern = cli_pattern
        .map(|s| s.to_string())
        .or(cfg.pattern)
        .unwrap_or_else(|| "src/content/**/*.mdx".to_string());

    let fix = cli_fix.or(cfg.fix).unwrap_or(false);

    Effective {
        repo_root,
        pattern,
        fix,
    }
}
