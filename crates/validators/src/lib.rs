// validators crate

mod email;
mod message;
mod name;

pub use email::validate_email;
pub use message::validate_message;
pub use name::validate_name;

use models::{ContactSubmission, GuardConfig, ValidationResult};

/// Runs the three field checks with the default minimums.
pub fn validate(name: &str, email: &str, message: &str) -> ValidationResult {
    validate_with(&GuardConfig::default(), name, email, message)
}

/// Runs every check, in name, email, message order. A failing check never
/// skips the ones after it.
pub fn validate_with(
    config: &GuardConfig,
    name: &str,
    email: &str,
    message: &str,
) -> ValidationResult {
    let mut result = ValidationResult::new();

    validate_name(name, config.min_name_length, &mut result);
    validate_email(email, &mut result);
    validate_message(message, config.min_message_length, &mut result);

    result
}

pub fn validate_submission(config: &GuardConfig, submission: &ContactSubmission) -> ValidationResult {
    validate_with(
        config,
        &submission.name,
        &submission.email,
        &submission.message,
    )
}

/// Whitespace stripped by a browser's `String.prototype.trim`: the Zs
/// category, TAB, VT, FF, BOM and the line terminators. U+0085 is not in
/// the set.
fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

pub(crate) fn trim_field(value: &str) -> &str {
    value.trim_matches(is_form_whitespace)
}

/// Length as the page measures it, in UTF-16 code units.
pub(crate) fn field_len(value: &str) -> usize {
    value.encode_utf16().count()
}
