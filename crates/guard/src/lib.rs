// guard crate

pub mod document;
pub mod event;
pub mod guard;
pub mod notify;

#[cfg(test)]
mod guard_test;

pub use document::{DocumentState, FormDocument, FormFields, StaticDocument};
pub use event::{RecordedSubmit, SubmitEvent};
pub use guard::{on_submit, FormGuard, GuardError, SubmitOutcome};
pub use notify::{Notifier, RecordingNotifier};
