//! Credential command - fetch an OAuth credential by token.

use claw::transport::{self, Endpoint};
use claw::{AuthConfig, ConfigFile, Result};
use colored::Colorize;
use serde_json::json;

/// Convex function answering credential queries.
const GET_TOKEN_FUNCTION: &str = "oauth:getToken";

pub fn run(token: String, verbose: bool) -> Result<()> {
    let config_file = match ConfigFile::load(".") {
        Ok(file) => file,
        Err(e) => {
            eprintln!("{} {}", "Warning:".yellow().bold(), e);
            ConfigFile::default()
        }
    };
    let auth = AuthConfig::resolve(&config_file);

    let endpoint = Endpoint::resolve(&auth.host, auth.path);
    if verbose {
        eprintln!("Target: {}", endpoint.url());
    }
    eprintln!("{}", "Retrieving OAuth credential...".cyan());

    let body = json!({
        "path": GET_TOKEN_FUNCTION,
        "args": [{ "token": token }],
        "format": "json",
    });

    let response = match transport::post(&endpoint, &body) {
        Ok(response) => response,
        Err(e) => {
            eprintln!("{} {}", "Failed to retrieve credential:".red().bold(), e);
            std::process::exit(1);
        }
    };

    let Some(value) = response.get("value").filter(|v| !v.is_null()) else {
        eprintln!("{}", "Token not found or expired".red().bold());
        std::process::exit(1);
    };

    match value.get("credential").filter(|c| !c.is_null()) {
        Some(credential) => {
            println!("{}", serde_json::to_string_pretty(credential)?);
            Ok(())
        }
        None => {
            eprintln!("{}", "Authentication not yet completed".red().bold());
            eprintln!("Make sure the user has clicked the OAuth link and authorized the app.");
            std::process::exit(1);
        }
    }
}
