use crate::trim_field;
use models::{FieldIssue, ValidationResult};

/// Only checks for an `@`. Addresses like `@` or `a@` pass; structure is
/// left to whoever receives the submission.
pub fn validate_email(email: &str, result: &mut ValidationResult) {
    if !trim_field(email).contains('@') {
        result.add_issue(FieldIssue::EmailMissingAtSign);
    }
}
