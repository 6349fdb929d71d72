use crate::{field_len, trim_field};
use models::{FieldIssue, ValidationResult};

pub fn validate_message(message: &str, min_length: usize, result: &mut ValidationResult) {
    if field_len(trim_field(message)) < min_length {
        result.add_issue(FieldIssue::MessageTooShort { min: min_length });
    }
}
