use crate::{field_len, trim_field};
use models::{FieldIssue, ValidationResult};

pub fn validate_name(name: &str, min_length: usize, result: &mut ValidationResult) {
    if field_len(trim_field(name)) < min_length {
        result.add_issue(FieldIssue::NameTooShort { min: min_length });
    }
}
