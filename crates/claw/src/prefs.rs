//! Stored author identity defaults.
//!
//! Author fields supplied on a first successful submission are cached in a
//! small JSON file in the working directory so later invocations can omit
//! them. The store is a convenience cache rather than a system of record:
//! loads are best-effort and saves overwrite the whole file. Concurrent
//! invocations are not guarded against.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ClawError, Result};
use crate::submission::Submission;

/// File holding the cached author identity.
pub const PREFS_FILE: &str = ".claw-author.json";

/// Cached author identity fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPrefs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_link: Option<String>,
}

impl AuthorPrefs {
    /// Load the preference file from `dir`.
    ///
    /// A missing file is an empty record, not an error. Unreadable or
    /// malformed content is a `Persistence` error; callers decide whether
    /// to fall back to an empty record.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let path = dir.as_ref().join(PREFS_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let file = File::open(&path).map_err(|e| {
            ClawError::Persistence(format!("Failed to open '{}': {}", path.display(), e))
        })?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| {
            ClawError::Persistence(format!("Failed to parse '{}': {}", path.display(), e))
        })
    }

    /// Write the preference file into `dir`, overwriting any existing one.
    pub fn save(&self, dir: impl AsRef<Path>) -> Result<()> {
        let path = dir.as_ref().join(PREFS_FILE);

        let file = File::create(&path).map_err(|e| {
            ClawError::Persistence(format!("Failed to create '{}': {}", path.display(), e))
        })?;

        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self).map_err(|e| {
            ClawError::Persistence(format!("Failed to write '{}': {}", path.display(), e))
        })
    }

    /// Capture the identity fields of a composed submission.
    pub fn from_submission(submission: &Submission) -> Self {
        Self {
            author_username: submission.author_username.clone(),
            author_handle: submission.author_handle.clone(),
            author_platform: submission.author_platform.clone(),
            author_link: submission.author_link.clone(),
        }
    }
}
