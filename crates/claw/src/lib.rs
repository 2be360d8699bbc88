//! Client library for the clawusecase.com submission API.
//!
//! The submission pipeline runs in a fixed sequence: normalize command-line
//! tokens, load stored author preferences, compose the submission record
//! (merging, slug and prompt derivation), validate it, and POST it to the
//! API. Validation failures stop the pipeline before any network traffic.
//!
//! # Example
//!
//! ```no_run
//! use claw::{ArgMap, AuthorPrefs, Submission};
//!
//! let tokens: Vec<String> = std::env::args().skip(1).collect();
//! let args = ArgMap::parse(&tokens);
//! let prefs = AuthorPrefs::load(".").unwrap_or_default();
//!
//! let submission = Submission::compose(&args, &prefs);
//! let violations = claw::validate(&submission);
//! assert!(violations.is_empty());
//! ```

pub mod args;
pub mod config;
pub mod error;
pub mod prefs;
pub mod slug;
pub mod submission;
pub mod transport;
pub mod validation;

pub use args::{ArgMap, ArgValue};
pub use config::{ApiConfig, AuthConfig, ConfigFile};
pub use error::{ClawError, Result};
pub use prefs::AuthorPrefs;
pub use slug::slugify;
pub use submission::Submission;
pub use transport::{Endpoint, FailureKind};
pub use validation::validate;
