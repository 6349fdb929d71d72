use crate::document::FormDocument;
use crate::event::SubmitEvent;
use crate::notify::Notifier;
use models::{ContactSubmission, FieldId, GuardConfig, ValidationFailure, ValidationResult};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    #[error("Document is still loading; attach the form guard once it has been parsed")]
    DocumentNotReady,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was touched; the host submits the form as usual.
    Allowed,
    /// The default submission was cancelled and the user notified.
    Blocked(ValidationFailure),
}

impl SubmitOutcome {
    pub fn is_allowed(&self) -> bool {
        matches!(self, SubmitOutcome::Allowed)
    }
}

/// Acts on a finished check. With errors, the event's default action is
/// cancelled and the newline-joined messages go to `notifier` in a single
/// call. Without errors nothing happens.
pub fn on_submit<E, N>(event: &mut E, result: ValidationResult, notifier: &mut N) -> SubmitOutcome
where
    E: SubmitEvent + ?Sized,
    N: Notifier + ?Sized,
{
    match result.into_failure() {
        Ok(()) => {
            logging::debug("Contact form passed validation, allowing submission");
            SubmitOutcome::Allowed
        }
        Err(failure) => {
            event.prevent_default();
            logging::info(&format!(
                "Blocked contact form submission with {} error(s)",
                failure.issues().len()
            ));
            notifier.notify(&failure.to_string());
            SubmitOutcome::Blocked(failure)
        }
    }
}

/// Submit handler for a page's contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormGuard {
    config: GuardConfig,
}

impl FormGuard {
    pub fn new(config: GuardConfig) -> Self {
        FormGuard { config }
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Registers a guard for `document`'s form.
    ///
    /// A page without a form yields `Ok(None)`: there is nothing to guard and
    /// that is not an error. A page still loading is refused so the host can
    /// retry once parsing finishes.
    pub fn attach<D>(document: &D, config: GuardConfig) -> Result<Option<FormGuard>, GuardError>
    where
        D: FormDocument + ?Sized,
    {
        if !document.state().is_parsed() {
            logging::debug("Document not parsed yet, deferring form guard");
            return Err(GuardError::DocumentNotReady);
        }

        if !document.has_form() {
            logging::debug("No form in document, nothing to guard");
            return Ok(None);
        }

        logging::debug("Form guard attached");
        Ok(Some(FormGuard::new(config)))
    }

    /// Reads the current field values. A missing input reads as empty.
    pub fn read_submission<D>(&self, document: &D) -> ContactSubmission
    where
        D: FormDocument + ?Sized,
    {
        let read = |field: FieldId| {
            document.field_value(field).unwrap_or_else(|| {
                logging::warning(&format!(
                    "Form has no '{}' field, treating it as empty",
                    field
                ));
                String::new()
            })
        };

        ContactSubmission {
            name: read(FieldId::Name),
            email: read(FieldId::Email),
            message: read(FieldId::Message),
        }
    }

    /// Full submit path: read the fields, check them, then block or allow.
    pub fn handle_submit<D, E, N>(&self, document: &D, event: &mut E, notifier: &mut N) -> SubmitOutcome
    where
        D: FormDocument + ?Sized,
        E: SubmitEvent + ?Sized,
        N: Notifier + ?Sized,
    {
        let submission = self.read_submission(document);
        let result = validators::validate_submission(&self.config, &submission);
        on_submit(event, result, notifier)
    }
}
