use crate::{
    on_submit, DocumentState, FormDocument, FormFields, FormGuard, GuardError, Notifier,
    RecordedSubmit, RecordingNotifier, StaticDocument, SubmitEvent, SubmitOutcome,
};
use models::{ContactSubmission, FieldId, FieldIssue, GuardConfig, ValidationResult};

const ALL_ERRORS: &str = "Name must be at least 2 characters.\nEnter a valid email.\nMessage must be at least 10 characters.";

fn attached(document: &StaticDocument) -> FormGuard {
    FormGuard::attach(document, GuardConfig::default())
        .expect("document should be parsed")
        .expect("document should have a form")
}

#[test]
fn test_on_submit_blocks_and_notifies_once() {
    let result = validators::validate("A", "bad-email", "short");
    let mut event = RecordedSubmit::new();
    let mut notifier = RecordingNotifier::new();

    let outcome = on_submit(&mut event, result, &mut notifier);

    assert!(event.default_prevented());
    assert_eq!(notifier.messages, vec![ALL_ERRORS.to_string()]);
    match outcome {
        SubmitOutcome::Blocked(failure) => assert_eq!(failure.issues().len(), 3),
        SubmitOutcome::Allowed => panic!("invalid form must be blocked"),
    }
}

#[test]
fn test_on_submit_allows_valid_result_untouched() {
    let mut event = RecordedSubmit::new();
    let mut notifier = RecordingNotifier::new();

    let outcome = on_submit(&mut event, ValidationResult::new(), &mut notifier);

    assert!(outcome.is_allowed());
    assert!(!event.default_prevented());
    assert!(notifier.messages.is_empty());
}

#[test]
fn test_on_submit_blocks_result_built_by_hand() {
    let mut result = ValidationResult::new();
    result.add_issue(FieldIssue::EmailMissingAtSign);
    assert_eq!(result.errors(), ["Enter a valid email.".to_string()]);

    let mut event = RecordedSubmit::new();
    let mut notifier = RecordingNotifier::new();
    let outcome = on_submit(&mut event, result, &mut notifier);

    assert!(!outcome.is_allowed());
    assert!(event.default_prevented());
    assert_eq!(notifier.messages, vec!["Enter a valid email.".to_string()]);
}

#[test]
fn test_attach_without_form_is_a_noop() {
    let document = StaticDocument::without_form();
    let guard = FormGuard::attach(&document, GuardConfig::default());
    assert_eq!(guard, Ok(None));
}

#[test]
fn test_attach_waits_for_parsed_document() {
    let mut document = StaticDocument::with_form(ContactSubmission::default());
    document.state = DocumentState::Loading;
    assert_eq!(
        FormGuard::attach(&document, GuardConfig::default()),
        Err(GuardError::DocumentNotReady)
    );

    document.state = DocumentState::Interactive;
    assert!(matches!(
        FormGuard::attach(&document, GuardConfig::default()),
        Ok(Some(_))
    ));
}

#[test]
fn test_handle_submit_valid_form() {
    let document = StaticDocument::with_form(ContactSubmission::new(
        "Al",
        "a@b.com",
        "Hello there!",
    ));
    let guard = attached(&document);
    let mut event = RecordedSubmit::new();
    let mut notifier = RecordingNotifier::new();

    let outcome = guard.handle_submit(&document, &mut event, &mut notifier);

    assert_eq!(outcome, SubmitOutcome::Allowed);
    assert!(!event.default_prevented());
    assert!(notifier.messages.is_empty());
}

#[test]
fn test_handle_submit_reports_only_failing_field() {
    let document = StaticDocument::with_form(ContactSubmission::new(
        "Alice",
        "alice@example.com",
        "X",
    ));
    let guard = attached(&document);
    let mut event = RecordedSubmit::new();
    let mut notifier = RecordingNotifier::new();

    let outcome = guard.handle_submit(&document, &mut event, &mut notifier);

    assert!(event.default_prevented());
    assert_eq!(
        notifier.messages,
        vec!["Message must be at least 10 characters.".to_string()]
    );
    match outcome {
        SubmitOutcome::Blocked(failure) => {
            assert_eq!(failure.issues(), &[FieldIssue::MessageTooShort { min: 10 }])
        }
        SubmitOutcome::Allowed => panic!("short message must be blocked"),
    }
}

#[test]
fn test_resubmit_after_correction_is_allowed() {
    let mut document = StaticDocument::with_form(ContactSubmission::new("", "", ""));
    let guard = attached(&document);
    let mut notifier = RecordingNotifier::new();

    let mut first = RecordedSubmit::new();
    assert!(!guard
        .handle_submit(&document, &mut first, &mut notifier)
        .is_allowed());

    document.form = Some(ContactSubmission::new("Alice", "alice@example.com", "Hello there!").into());
    let mut second = RecordedSubmit::new();
    assert!(guard
        .handle_submit(&document, &mut second, &mut notifier)
        .is_allowed());

    assert!(first.default_prevented());
    assert!(!second.default_prevented());
    assert_eq!(notifier.messages, vec![ALL_ERRORS.to_string()]);
}

#[test]
fn test_missing_field_element_reads_as_empty() {
    let document = StaticDocument {
        state: DocumentState::Complete,
        form: Some(FormFields {
            name: Some("Alice".to_string()),
            email: None,
            message: Some("Hello there!".to_string()),
        }),
    };
    let guard = attached(&document);

    let submission = guard.read_submission(&document);
    assert_eq!(submission.value(FieldId::Email), "");
    let warnings = logging::entries_containing("Form has no 'email' field");
    assert!(warnings
        .iter()
        .any(|entry| entry.level == logging::LogLevel::Warning));

    let mut event = RecordedSubmit::new();
    let mut notifier = RecordingNotifier::new();
    guard.handle_submit(&document, &mut event, &mut notifier);
    assert_eq!(notifier.messages, vec!["Enter a valid email.".to_string()]);
}

#[test]
fn test_configured_guard_uses_its_minimums() {
    let document = StaticDocument::with_form(ContactSubmission::new(
        "Al",
        "a@b.com",
        "Hello there!",
    ));
    let config = GuardConfig {
        min_name_length: 3,
        min_message_length: 10,
    };
    let guard = FormGuard::attach(&document, config).unwrap().unwrap();
    let mut event = RecordedSubmit::new();
    let mut notifier = RecordingNotifier::new();

    guard.handle_submit(&document, &mut event, &mut notifier);
    assert_eq!(
        notifier.messages,
        vec!["Name must be at least 3 characters.".to_string()]
    );
}

#[test]
fn test_document_snapshot_from_yaml_and_json() {
    let yaml: StaticDocument = serde_yaml::from_str(
        "state: interactive\nform:\n  name: Al\n  email: a@b.com\n  message: Hello there!\n",
    )
    .unwrap();
    assert_eq!(yaml.state(), DocumentState::Interactive);
    assert_eq!(yaml.field_value(FieldId::Message).as_deref(), Some("Hello there!"));

    let json: StaticDocument = serde_json::from_str("{}").unwrap();
    assert_eq!(json.state(), DocumentState::Complete);
    assert!(!json.has_form());
}

// Stand-in for a host whose document and alert live elsewhere.
struct Page {
    fields: Vec<(FieldId, String)>,
}

impl FormDocument for Page {
    fn state(&self) -> DocumentState {
        DocumentState::Complete
    }

    fn has_form(&self) -> bool {
        true
    }

    fn field_value(&self, field: FieldId) -> Option<String> {
        self.fields
            .iter()
            .find(|(id, _)| *id == field)
            .map(|(_, value)| value.clone())
    }
}

struct AlertCount(usize);

impl Notifier for AlertCount {
    fn notify(&mut self, _message: &str) {
        self.0 += 1;
    }
}

#[test]
fn test_guard_works_through_trait_objects() {
    let page = Page {
        fields: vec![
            (FieldId::Name, "  ".to_string()),
            (FieldId::Email, "a@b".to_string()),
            (FieldId::Message, "long enough message".to_string()),
        ],
    };
    let document: &dyn FormDocument = &page;
    let guard = FormGuard::attach(document, GuardConfig::default())
        .unwrap()
        .unwrap();

    let mut event = RecordedSubmit::new();
    let mut alerts = AlertCount(0);
    let notifier: &mut dyn Notifier = &mut alerts;
    let outcome = guard.handle_submit(document, &mut event, notifier);

    assert!(!outcome.is_allowed());
    assert_eq!(alerts.0, 1);
}

fn submit(name: &str, message: &str) -> (SubmitOutcome, RecordingNotifier) {
    let document = StaticDocument::with_form(ContactSubmission::new(name, "a@b.com", message));
    let guard = attached(&document);
    let mut event = RecordedSubmit::new();
    let mut notifier = RecordingNotifier::new();
    let outcome = guard.handle_submit(&document, &mut event, &mut notifier);
    (outcome, notifier)
}

#[test]
fn test_byte_order_mark_around_name_is_ignored() {
    let (outcome, notifier) = submit("\u{FEFF}A\u{FEFF}", "Hello there!");
    assert!(!outcome.is_allowed());
    assert_eq!(
        notifier.messages,
        vec!["Name must be at least 2 characters.".to_string()]
    );
}

#[test]
fn test_next_line_counts_toward_length() {
    let (outcome, notifier) = submit("A\u{0085}", "\u{0085}123456789");
    assert!(outcome.is_allowed());
    assert!(notifier.messages.is_empty());
}

#[test]
fn test_emoji_message_counts_surrogate_pairs() {
    let (outcome, _) = submit("😀", "😀😀😀😀😀");
    assert!(outcome.is_allowed());

    let (outcome, notifier) = submit("Al", "😀😀😀😀");
    assert!(!outcome.is_allowed());
    assert_eq!(
        notifier.messages,
        vec!["Message must be at least 10 characters.".to_string()]
    );
}
