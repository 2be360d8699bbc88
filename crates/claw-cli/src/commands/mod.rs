//! Subcommand implementations.

pub mod credential;
pub mod submit;
