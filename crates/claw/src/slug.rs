//! URL-safe slug derivation.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_-]").unwrap());
static HYPHEN_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-{2,}").unwrap());

/// Derive a lowercase, hyphen-delimited identifier from free text.
///
/// Whitespace runs become single hyphens, characters outside
/// `[A-Za-z0-9_-]` are dropped, hyphen runs collapse to one, and leading
/// or trailing hyphens are stripped. The function is pure and idempotent:
/// applying it to its own output returns the output unchanged.
pub fn slugify(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let hyphenated = WHITESPACE_RUN.replace_all(&lowered, "-");
    let cleaned = DISALLOWED.replace_all(&hyphenated, "");
    let collapsed = HYPHEN_RUN.replace_all(&cleaned, "-");
    collapsed.trim_matches('-').to_string()
}
