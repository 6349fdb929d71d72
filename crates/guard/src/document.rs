use models::{ContactSubmission, FieldId};
use serde::{Deserialize, Serialize};

/// How far the host has got with parsing the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentState {
    Loading,
    Interactive,
    #[default]
    Complete,
}

impl DocumentState {
    /// The structure is fully parsed once the host leaves `Loading`.
    pub fn is_parsed(&self) -> bool {
        !matches!(self, DocumentState::Loading)
    }
}

/// The page hosting the contact form. The guard only ever reads from it.
pub trait FormDocument {
    fn state(&self) -> DocumentState;

    fn has_form(&self) -> bool;

    /// Current value of the input addressed by `field`, or `None` when the
    /// page has no such element.
    fn field_value(&self, field: FieldId) -> Option<String>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormFields {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl FormFields {
    pub fn get(&self, field: FieldId) -> Option<&str> {
        match field {
            FieldId::Name => self.name.as_deref(),
            FieldId::Email => self.email.as_deref(),
            FieldId::Message => self.message.as_deref(),
        }
    }
}

impl From<ContactSubmission> for FormFields {
    fn from(submission: ContactSubmission) -> Self {
        FormFields {
            name: Some(submission.name),
            email: Some(submission.email),
            message: Some(submission.message),
        }
    }
}

/// A snapshot of a page: its parse state and, if it has one, the form's fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StaticDocument {
    #[serde(default)]
    pub state: DocumentState,
    #[serde(default)]
    pub form: Option<FormFields>,
}

impl StaticDocument {
    pub fn with_form(submission: ContactSubmission) -> Self {
        StaticDocument {
            state: DocumentState::Complete,
            form: Some(submission.into()),
        }
    }

    pub fn without_form() -> Self {
        StaticDocument {
            state: DocumentState::Complete,
            form: None,
        }
    }
}

impl FormDocument for StaticDocument {
    fn state(&self) -> DocumentState {
        self.state
    }

    fn has_form(&self) -> bool {
        self.form.is_some()
    }

    fn field_value(&self, field: FieldId) -> Option<String> {
        self.form
            .as_ref()
            .and_then(|form| form.get(field))
            .map(str::to_string)
    }
}
