//! Submit command - compose, validate, and transmit a use case.

use std::path::Path;

use claw::transport::{self, Endpoint, FailureKind};
use claw::{ApiConfig, ArgMap, AuthorPrefs, ClawError, ConfigFile, Result, Submission};
use colored::Colorize;

pub fn run(raw_args: Vec<String>, verbose: bool) -> Result<()> {
    let cwd = Path::new(".");
    let args = ArgMap::parse(&raw_args);

    // Malformed local files are warned about, never fatal.
    let config_file = match ConfigFile::load(cwd) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("{} {}", "Warning:".yellow().bold(), e);
            ConfigFile::default()
        }
    };
    let api = ApiConfig::resolve(&config_file);

    let prefs = match AuthorPrefs::load(cwd) {
        Ok(prefs) => prefs,
        Err(e) => {
            eprintln!("{} {}", "Warning:".yellow().bold(), e);
            AuthorPrefs::default()
        }
    };

    let submission = Submission::compose(&args, &prefs);

    let violations = claw::validate(&submission);
    if !violations.is_empty() {
        eprintln!("{}", "Validation failed:".red().bold());
        for violation in &violations {
            eprintln!("  - {}", violation);
        }
        std::process::exit(1);
    }

    let endpoint = Endpoint::resolve(&api.host, api.path);
    if verbose {
        eprintln!("Target: {}", endpoint.url());
    }
    eprintln!("{}", "Submitting use case...".cyan());

    match transport::post(&endpoint, &serde_json::to_value(&submission)?) {
        Ok(body) => {
            // First successful submission with a fresh identity seeds the
            // preference file; an already-stored identity is never
            // overwritten, and anonymous submissions are never stored.
            if prefs.author_username.is_none() && !args.is_set("anonymous") {
                AuthorPrefs::from_submission(&submission).save(cwd)?;
            }
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(())
        }
        Err(ClawError::Transport { kind, message }) => {
            eprintln!("{} {}", "Submission failed:".red().bold(), message);
            match kind {
                FailureKind::RateLimited => {
                    eprintln!("Rate limit reached (10 submissions per day)");
                    eprintln!("Try again tomorrow!");
                }
                FailureKind::ValidationRejected => {
                    eprintln!("Validation error - check your inputs");
                }
                FailureKind::Other => {}
            }
            std::process::exit(1);
        }
        Err(e) => Err(e),
    }
}
