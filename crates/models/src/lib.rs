// models crate

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub mod config;

pub use config::{ConfigError, GuardConfig};

/// Identifiers of the three contact form fields, as addressed in the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    Name,
    Email,
    Message,
}

impl FieldId {
    /// Fields in check order.
    pub const ALL: [FieldId; 3] = [FieldId::Name, FieldId::Email, FieldId::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Message => "message",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single failed field check. The length variants carry the minimum that
/// was enforced so the rendered message matches the active configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIssue {
    NameTooShort { min: usize },
    EmailMissingAtSign,
    MessageTooShort { min: usize },
}

impl FieldIssue {
    pub fn field(&self) -> FieldId {
        match self {
            FieldIssue::NameTooShort { .. } => FieldId::Name,
            FieldIssue::EmailMissingAtSign => FieldId::Email,
            FieldIssue::MessageTooShort { .. } => FieldId::Message,
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldIssue::NameTooShort { min } => {
                write!(f, "Name must be at least {} characters.", min)
            }
            FieldIssue::EmailMissingAtSign => f.write_str("Enter a valid email."),
            FieldIssue::MessageTooShort { min } => {
                write!(f, "Message must be at least {} characters.", min)
            }
        }
    }
}

/// Outcome of one submit attempt's checks. Built fresh per attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<String>,
    issues: Vec<FieldIssue>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        ValidationResult {
            errors: Vec::new(),
            issues: Vec::new(),
        }
    }

    /// Only way to record a failure, so `errors` and `issues` stay in step.
    pub fn add_issue(&mut self, issue: FieldIssue) {
        self.errors.push(issue.to_string());
        self.issues.push(issue);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// User-facing messages in check order; empty when the form is valid.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    /// All messages joined with newlines, as shown to the user.
    pub fn joined_message(&self) -> String {
        self.errors.join("\n")
    }

    /// `Err` exactly when `errors` is non-empty.
    pub fn into_failure(self) -> Result<(), ValidationFailure> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ValidationFailure {
                issues: self.issues,
            })
        }
    }
}

/// One or more field issues that blocked a submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_issues(.issues))]
pub struct ValidationFailure {
    issues: Vec<FieldIssue>,
}

impl ValidationFailure {
    /// Returns `None` for an empty issue list; a failure always names at least one issue.
    pub fn new(issues: Vec<FieldIssue>) -> Option<Self> {
        if issues.is_empty() {
            None
        } else {
            Some(ValidationFailure { issues })
        }
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Raw values of the contact form, untrimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ContactSubmission {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Message => &self.message,
        }
    }
}
