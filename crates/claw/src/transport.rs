//! Single-shot JSON transport to the remote API.

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde_json::Value;

use crate::error::{ClawError, Result};

/// Default development port used for loopback targets.
const DEV_PORT: u16 = 3000;

/// Standard TLS port used for everything else.
const HTTPS_PORT: u16 = 443;

/// Failure categories surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The API rejected the request for quota reasons (HTTP 429).
    RateLimited,
    /// The API rejected the submission contents (HTTP 400).
    ValidationRejected,
    /// Everything else, including connection failures and unparseable
    /// payloads.
    Other,
}

impl FailureKind {
    /// Classify a response status.
    fn from_status(status: StatusCode) -> Self {
        match status.as_u16() {
            429 => FailureKind::RateLimited,
            400 => FailureKind::ValidationRejected,
            _ => FailureKind::Other,
        }
    }
}

/// Wire scheme selected for an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    fn as_str(self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

/// A fully resolved request target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub scheme: Scheme,
    pub host: String,
    pub port: u16,
    pub path: String,
}

impl Endpoint {
    /// Resolve a host string (optionally carrying a `:port` suffix) and a
    /// request path into a concrete target.
    ///
    /// Loopback hosts get plain HTTP on the development port; everything
    /// else gets HTTPS on 443. An embedded port is stripped from the
    /// hostname and overrides either default.
    pub fn resolve(host_spec: &str, path: impl Into<String>) -> Self {
        let (host, embedded_port) = split_port(host_spec);
        let loopback = host == "localhost" || host == "127.0.0.1";
        let (scheme, default_port) = if loopback {
            (Scheme::Http, DEV_PORT)
        } else {
            (Scheme::Https, HTTPS_PORT)
        };

        Self {
            scheme,
            host: host.to_string(),
            port: embedded_port.unwrap_or(default_port),
            path: path.into(),
        }
    }

    /// Full request URL.
    pub fn url(&self) -> String {
        format!(
            "{}://{}:{}{}",
            self.scheme.as_str(),
            self.host,
            self.port,
            self.path
        )
    }
}

/// Split a trailing `:port` suffix off a host string.
///
/// A suffix that does not parse as a port is left in the host string
/// untouched; the request then fails with an ordinary transport error
/// instead of a guessed target.
fn split_port(host_spec: &str) -> (&str, Option<u16>) {
    match host_spec.rsplit_once(':') {
        Some((host, port)) => match port.parse::<u16>() {
            Ok(port) => (host, Some(port)),
            Err(_) => (host_spec, None),
        },
        None => (host_spec, None),
    }
}

/// POST `body` to `endpoint` and interpret the response.
///
/// Status 200 or 201 with a JSON body succeeds; anything else is a
/// classified transport failure carrying the API's `error` string when the
/// body has one. Requests are never retried; timeouts and redirects follow
/// the client's defaults.
pub fn post(endpoint: &Endpoint, body: &Value) -> Result<Value> {
    let client = Client::builder().build().map_err(|e| ClawError::Transport {
        kind: FailureKind::Other,
        message: format!("Request failed: {}", e),
    })?;

    let response = client
        .post(endpoint.url())
        .json(body)
        .send()
        .map_err(|e| ClawError::Transport {
            kind: FailureKind::Other,
            message: format!("Request failed: {}", e),
        })?;

    let status = response.status();
    let raw = response.text().map_err(|e| ClawError::Transport {
        kind: FailureKind::from_status(status),
        message: format!("Request failed: {}", e),
    })?;

    let success = status == StatusCode::OK || status == StatusCode::CREATED;
    match serde_json::from_str::<Value>(&raw) {
        Ok(value) if success => Ok(value),
        Ok(value) => {
            let message = value
                .get("error")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {}: {}", status.as_u16(), raw));
            Err(ClawError::Transport {
                kind: FailureKind::from_status(status),
                message,
            })
        }
        Err(_) => Err(ClawError::Transport {
            kind: if success {
                FailureKind::Other
            } else {
                FailureKind::from_status(status)
            },
            message: format!("Failed to parse response: {}", raw),
        }),
    }
}
