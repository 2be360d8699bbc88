//! The composed submission record.
//!
//! [`Submission::compose`] is the single place where command-line values,
//! stored preferences, and defaults meet. The derived `slug` and
//! `implementation_prompt` fields are computed here and nowhere else, so
//! they cannot be injected through the argument map.

use serde::Serialize;

use crate::args::ArgMap;
use crate::prefs::AuthorPrefs;
use crate::slug::slugify;

/// Platform recorded when a username is supplied without one.
pub const DEFAULT_AUTHOR_PLATFORM: &str = "twitter";

/// Placeholder interpolated into the prompt when no requirements were given.
const NO_REQUIREMENTS: &str = "None specified";

/// A use-case submission as sent to the API.
///
/// Serialized as camelCase JSON; `None` fields are omitted from the
/// payload entirely rather than sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_link: Option<String>,

    /// URL-safe identifier derived from the title.
    pub slug: String,
    /// Templated prompt text derived from the other fields.
    pub implementation_prompt: String,
}

impl Submission {
    /// Merge command-line values with stored preferences and derive the
    /// computed fields.
    ///
    /// Author identity precedence: explicit flag, then stored preference,
    /// then the fixed platform default (platform only). `--anonymous`
    /// replaces the identity wholesale.
    pub fn compose(args: &ArgMap, prefs: &AuthorPrefs) -> Self {
        let title = args.get("title").map(str::to_string);
        let hook = args.get("hook").map(str::to_string);
        let problem = args.get("problem").map(str::to_string);
        let solution = args.get("solution").map(str::to_string);
        let category = args.get("category").map(str::to_string);
        let requirements = args.get("requirements").map(str::to_string);
        let skills = split_skills(args.get("skills").unwrap_or(""));

        let (author_username, author_handle, author_platform, author_link) =
            if args.is_set("anonymous") {
                (
                    Some("anonymous".to_string()),
                    Some("Anonymous".to_string()),
                    Some("anonymous".to_string()),
                    None,
                )
            } else {
                (
                    merge(args.get("author_username"), &prefs.author_username),
                    merge(args.get("author_handle"), &prefs.author_handle),
                    merge(args.get("author_platform"), &prefs.author_platform)
                        .or_else(|| Some(DEFAULT_AUTHOR_PLATFORM.to_string())),
                    merge(args.get("author_link"), &prefs.author_link),
                )
            };

        let slug = slugify(title.as_deref().unwrap_or(""));
        let implementation_prompt = implementation_prompt(
            title.as_deref(),
            problem.as_deref(),
            solution.as_deref(),
            requirements.as_deref(),
            &skills,
        );

        Self {
            title,
            hook,
            problem,
            solution,
            category,
            skills,
            requirements,
            author_username,
            author_handle,
            author_platform,
            author_link,
            slug,
            implementation_prompt,
        }
    }
}

/// An explicit command-line value wins over the stored preference.
fn merge(cli: Option<&str>, stored: &Option<String>) -> Option<String> {
    cli.map(str::to_string).or_else(|| stored.clone())
}

/// Split a comma-delimited skills list, trimming each element.
///
/// Absent or blank input yields an empty list, which validation rejects.
fn split_skills(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|s| s.trim().to_string()).collect()
}

/// Render the fixed implementation-prompt template.
fn implementation_prompt(
    title: Option<&str>,
    problem: Option<&str>,
    solution: Option<&str>,
    requirements: Option<&str>,
    skills: &[String],
) -> String {
    format!(
        "Build the following use case: {}\n\n\
         Problem it solves: {}\n\n\
         How it works: {}\n\n\
         Requirements: {}\n\n\
         Skills and tools: {}",
        title.unwrap_or(""),
        problem.unwrap_or(""),
        solution.unwrap_or(""),
        requirements.unwrap_or(NO_REQUIREMENTS),
        skills.join(", "),
    )
}
