//! Field rules checked before a submission leaves the machine.

use crate::submission::Submission;

/// Minimum title length, in characters.
pub const MIN_TITLE: usize = 20;
/// Minimum hook length, in characters.
pub const MIN_HOOK: usize = 50;
/// Minimum problem length, in characters.
pub const MIN_PROBLEM: usize = 100;
/// Minimum solution length, in characters.
pub const MIN_SOLUTION: usize = 200;

/// Check `submission` against the field rules.
///
/// Every rule is evaluated independently and all violations are collected,
/// one message per violated rule, in field order. An empty result means
/// the record is submittable.
pub fn validate(submission: &Submission) -> Vec<String> {
    let mut violations = Vec::new();

    if !meets_length(&submission.title, MIN_TITLE) {
        violations.push(format!("Title must be at least {} characters", MIN_TITLE));
    }
    if !meets_length(&submission.hook, MIN_HOOK) {
        violations.push(format!("Hook must be at least {} characters", MIN_HOOK));
    }
    if !meets_length(&submission.problem, MIN_PROBLEM) {
        violations.push(format!("Problem must be at least {} characters", MIN_PROBLEM));
    }
    if !meets_length(&submission.solution, MIN_SOLUTION) {
        violations.push(format!("Solution must be at least {} characters", MIN_SOLUTION));
    }
    if submission.category.as_deref().unwrap_or("").is_empty() {
        violations.push("Category is required".to_string());
    }
    if submission.skills.is_empty() {
        violations.push("At least one skill/tool is required".to_string());
    }
    if submission.author_username.as_deref().unwrap_or("").is_empty() {
        violations.push("Author username is required".to_string());
    }

    violations
}

/// Present and at least `min` characters long.
fn meets_length(field: &Option<String>, min: usize) -> bool {
    field
        .as_deref()
        .is_some_and(|value| value.chars().count() >= min)
}

#[cfg(test)]
mod tests {
    use crate::args::ArgMap;
    use crate::prefs::AuthorPrefs;

    use super::*;

    fn compose(raw: &[&str]) -> Submission {
        let tokens: Vec<String> = raw.iter().map(|s| s.to_string()).collect();
        Submission::compose(&ArgMap::parse(&tokens), &AuthorPrefs::default())
    }

    fn valid_submission() -> Submission {
        compose(&[
            "--title", &"t".repeat(20),
            "--hook", &"h".repeat(50),
            "--problem", &"p".repeat(100),
            "--solution", &"s".repeat(200),
            "--category", "Business/SaaS",
            "--skills", "GitHub,Stripe",
            "--author-username", "alice",
        ])
    }

    #[test]
    fn test_valid_submission_passes() {
        assert!(validate(&valid_submission()).is_empty());
    }

    #[test]
    fn test_empty_submission_violates_every_rule() {
        let violations = validate(&compose(&[]));
        assert_eq!(violations.len(), 7);
    }

    #[test]
    fn test_all_length_rules_reported_together() {
        // One character short on each free-text field; nothing
        // short-circuits, so all four are reported at once.
        let submission = compose(&[
            "--title", &"t".repeat(19),
            "--hook", &"h".repeat(49),
            "--problem", &"p".repeat(99),
            "--solution", &"s".repeat(199),
            "--category", "Business/SaaS",
            "--skills", "GitHub",
            "--author-username", "alice",
        ]);
        let violations = validate(&submission);
        assert_eq!(
            violations,
            vec![
                "Title must be at least 20 characters",
                "Hook must be at least 50 characters",
                "Problem must be at least 100 characters",
                "Solution must be at least 200 characters",
            ]
        );
    }

    #[test]
    fn test_missing_category_and_skills_in_field_order() {
        let submission = compose(&[
            "--title", &"t".repeat(20),
            "--hook", &"h".repeat(50),
            "--problem", &"p".repeat(100),
            "--solution", &"s".repeat(200),
            "--author-username", "alice",
        ]);
        let violations = validate(&submission);
        assert_eq!(
            violations,
            vec![
                "Category is required",
                "At least one skill/tool is required",
            ]
        );
    }

    #[test]
    fn test_missing_username_is_reported() {
        let submission = compose(&[
            "--title", &"t".repeat(20),
            "--hook", &"h".repeat(50),
            "--problem", &"p".repeat(100),
            "--solution", &"s".repeat(200),
            "--category", "Business/SaaS",
            "--skills", "GitHub",
        ]);
        let violations = validate(&submission);
        assert_eq!(violations, vec!["Author username is required"]);
    }

    #[test]
    fn test_lengths_count_characters_not_bytes() {
        let submission = compose(&[
            "--title", &"é".repeat(20),
            "--hook", &"é".repeat(50),
            "--problem", &"é".repeat(100),
            "--solution", &"é".repeat(200),
            "--category", "Business/SaaS",
            "--skills", "GitHub",
            "--author-username", "alice",
        ]);
        assert!(validate(&submission).is_empty());
    }

    #[test]
    fn test_flag_shaped_field_counts_as_missing() {
        // `--title --hook …` records title as a bare flag; the composer
        // sees no text and validation reports the field.
        let submission = compose(&[
            "--title",
            "--hook", &"h".repeat(50),
        ]);
        let violations = validate(&submission);
        assert!(violations.contains(&"Title must be at least 20 characters".to_string()));
    }
}
