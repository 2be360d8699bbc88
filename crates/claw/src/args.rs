//! Permissive command-line token normalization.
//!
//! Submission flags are scanned directly instead of being declared up
//! front: `--flag` followed by another `--…` token (or end of input)
//! records a boolean, `--key value` records the value and consumes both
//! tokens. The scan never fails; missing or malformed values surface as
//! absent fields that validation rejects with a readable message.

use indexmap::IndexMap;

/// Value recorded for a single option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    /// Option given without a value (`--anonymous`).
    Flag,
    /// Option given with a value (`--title "…"`).
    Text(String),
}

/// Insertion-ordered map from canonical option name to value.
///
/// Keys are canonicalized by stripping the leading `--` and replacing
/// internal `-` with `_`, so `--author-username` is looked up as
/// `author_username`.
#[derive(Debug, Clone, Default)]
pub struct ArgMap {
    entries: IndexMap<String, ArgValue>,
}

impl ArgMap {
    /// Scan a flat token list into an option map.
    pub fn parse(tokens: &[String]) -> Self {
        let mut entries = IndexMap::new();
        let mut i = 0;

        while i < tokens.len() {
            let token = &tokens[i];
            if !token.starts_with("--") {
                // Stray value token; nothing claims it.
                i += 1;
                continue;
            }

            let key = canonical_key(token);
            match tokens.get(i + 1) {
                Some(next) if !next.starts_with("--") => {
                    entries.insert(key, ArgValue::Text(next.clone()));
                    i += 2;
                }
                _ => {
                    entries.insert(key, ArgValue::Flag);
                    i += 1;
                }
            }
        }

        Self { entries }
    }

    /// Text value recorded for `key`, if one was given.
    pub fn get(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(ArgValue::Text(value)) => Some(value),
            _ => None,
        }
    }

    /// Whether `key` appeared at all, as a flag or with a value.
    pub fn is_set(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of recorded options.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no options were recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Strip the leading `--` and canonicalize `-` separators to `_`.
fn canonical_key(token: &str) -> String {
    token.strip_prefix("--").unwrap_or(token).replace('-', "_")
}
