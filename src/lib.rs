//! mdxlint core library.
//!
//! This crate exposes programmatic APIs for validating MDX content files
//! against a fixed table of syntax rules, with optional deterministic
//! auto-fixes and a write-back pass.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `models`: Data models for issues, per-file results, and summaries.
//! - `rules`: The builtin ordered rule table and fix functions.
//! - `validate`: Pure scan engine, per-file scanner, batch helpers, and
//!   write-back.
//! - `output`: Human-readable report printers.
pub mod cli;
pub mod config;
pub mod models;
pub mod output;
pub mod rules;
pub mod validate;
