//! Target API configuration resolution.
//!
//! Every setting resolves with the same precedence: environment variable,
//! then the optional repository `config.json`, then a fixed default. The
//! resolved values are plain structs handed to the driver and transport;
//! nothing reads the environment after startup.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ClawError, Result};

/// Default submission API host.
pub const DEFAULT_API_HOST: &str = "clawusecase.com";

/// Default submission endpoint path.
pub const DEFAULT_API_PATH: &str = "/api/submissions";

/// Default Convex deployment answering credential queries.
pub const DEFAULT_CONVEX_HOST: &str = "benevolent-tortoise-657.convex.cloud";

/// Query endpoint on the Convex deployment.
pub const CONVEX_QUERY_PATH: &str = "/api/query";

/// Name of the optional repository-level configuration file.
pub const CONFIG_FILE: &str = "config.json";

/// Optional settings read from `config.json`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    /// Submission API host, overriding the default.
    pub api_url: Option<String>,
    /// Submission endpoint path, overriding the default.
    pub api_path: Option<String>,
    /// Convex deployment host for credential queries.
    pub convex_url: Option<String>,
}

impl ConfigFile {
    /// Read `config.json` from `dir`.
    ///
    /// A missing file is an empty config. Unreadable or malformed content
    /// is a `Config` error; callers decide whether to downgrade it to a
    /// warning and continue with defaults.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let path = dir.as_ref().join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path).map_err(|e| {
            ClawError::Config(format!("Failed to read '{}': {}", path.display(), e))
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            ClawError::Config(format!("Failed to parse '{}': {}", path.display(), e))
        })
    }
}

/// Resolved submission API target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Host string, possibly carrying a `:port` suffix.
    pub host: String,
    /// Request path on the host.
    pub path: String,
}

impl ApiConfig {
    /// Resolve from the process environment and `file`.
    pub fn resolve(file: &ConfigFile) -> Self {
        Self::resolve_from(
            std::env::var("CLAWUSECASE_API_URL").ok(),
            std::env::var("CLAWUSECASE_API_PATH").ok(),
            file,
        )
    }

    /// Resolution with the environment values passed in explicitly.
    pub fn resolve_from(
        env_host: Option<String>,
        env_path: Option<String>,
        file: &ConfigFile,
    ) -> Self {
        Self {
            host: env_host
                .or_else(|| file.api_url.clone())
                .unwrap_or_else(|| DEFAULT_API_HOST.to_string()),
            path: env_path
                .or_else(|| file.api_path.clone())
                .unwrap_or_else(|| DEFAULT_API_PATH.to_string()),
        }
    }
}

/// Resolved credential backend target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Convex deployment host.
    pub host: String,
    /// Query endpoint path.
    pub path: String,
}

impl AuthConfig {
    /// Resolve from the process environment and `file`.
    pub fn resolve(file: &ConfigFile) -> Self {
        Self::resolve_from(std::env::var("CONVEX_URL").ok(), file)
    }

    /// Resolution with the environment value passed in explicitly.
    pub fn resolve_from(env_host: Option<String>, file: &ConfigFile) -> Self {
        Self {
            host: env_host
                .or_else(|| file.convex_url.clone())
                .unwrap_or_else(|| DEFAULT_CONVEX_HOST.to_string()),
            path: CONVEX_QUERY_PATH.to_string(),
        }
    }
}
