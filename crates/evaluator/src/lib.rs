// evaluator crate

mod check;

pub use check::{check_submission, TerminalNotifier};

use colored::*;
use guard::{
    FormGuard, GuardError, RecordedSubmit, RecordingNotifier, StaticDocument, SubmitEvent,
    SubmitOutcome,
};
use models::GuardConfig;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// What happened when a submit was simulated on one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// The page has no form, so no guard was attached.
    NoForm,
    /// The page was still loading; the guard refused to attach.
    NotReady,
    Allowed,
    /// Submission was cancelled; `messages` are the errors in check order.
    Blocked { messages: Vec<String> },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub allowed: usize,
    pub blocked: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl Summary {
    pub fn is_clean(&self) -> bool {
        self.blocked == 0 && self.failed == 0
    }
}

/// Reads a page snapshot. `.json` files are parsed as JSON, anything else as YAML.
pub fn load_document(path: &Path) -> Result<StaticDocument, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        serde_json::from_str(&content).map_err(|e| format!("Invalid JSON: {}", e))
    } else {
        serde_yaml::from_str(&content).map_err(|e| format!("Invalid YAML: {}", e))
    }
}

pub fn evaluate_document(document: &StaticDocument, config: &GuardConfig) -> Evaluation {
    let guard = match FormGuard::attach(document, *config) {
        Ok(Some(guard)) => guard,
        Ok(None) => return Evaluation::NoForm,
        Err(GuardError::DocumentNotReady) => return Evaluation::NotReady,
    };

    let mut event = RecordedSubmit::new();
    let mut notifier = RecordingNotifier::new();

    match guard.handle_submit(document, &mut event, &mut notifier) {
        SubmitOutcome::Allowed => Evaluation::Allowed,
        SubmitOutcome::Blocked(failure) => {
            debug_assert!(event.default_prevented());
            Evaluation::Blocked {
                messages: failure.messages(),
            }
        }
    }
}

pub fn evaluate_document_file(path: &Path, config: &GuardConfig) -> Result<Evaluation, String> {
    let document = load_document(path)?;
    Ok(evaluate_document(&document, config))
}

/// Simulates a submit on every form document under `path` and prints the
/// outcome of each, followed by a summary line.
pub fn validate_target(path: &Path, config: &GuardConfig, verbose: bool) -> io::Result<Summary> {
    let stdout = io::stdout();
    write_report(&mut stdout.lock(), path, config, verbose)
}

/// Same as [`validate_target`], writing the report to `out`.
pub fn write_report<W: Write>(
    out: &mut W,
    path: &Path,
    config: &GuardConfig,
    verbose: bool,
) -> io::Result<Summary> {
    let documents = utils::collect_form_documents(path)?;
    let mut summary = Summary::default();

    writeln!(out, "Checking {} form document(s)...", documents.len())?;
    if verbose {
        writeln!(
            out,
            "Minimum lengths: name {}, message {}",
            config.min_name_length, config.min_message_length
        )?;
    }

    for document_path in documents {
        match evaluate_document_file(&document_path, config) {
            Ok(Evaluation::Allowed) => {
                writeln!(out, "{} Allowed: {}", "✅".green(), document_path.display())?;
                summary.allowed += 1;
            }
            Ok(Evaluation::Blocked { messages }) => {
                writeln!(out, "{} Blocked: {}", "❌".red(), document_path.display())?;
                for (i, message) in messages.iter().enumerate() {
                    writeln!(out, "   {}. {}", i + 1, message)?;
                }
                summary.blocked += 1;
            }
            Ok(Evaluation::NoForm) => {
                writeln!(out, "{} No form: {}", "-".yellow(), document_path.display())?;
                summary.skipped += 1;
            }
            Ok(Evaluation::NotReady) => {
                writeln!(
                    out,
                    "{} Still loading: {}",
                    "-".yellow(),
                    document_path.display()
                )?;
                summary.skipped += 1;
            }
            Err(e) => {
                writeln!(
                    out,
                    "{} Error processing {}: {}",
                    "❌".red(),
                    document_path.display(),
                    e
                )?;
                logging::error(&format!("{}: {}", document_path.display(), e));
                summary.failed += 1;
            }
        }
    }

    writeln!(
        out,
        "\nSummary: {} allowed, {} blocked, {} skipped, {} failed",
        summary.allowed, summary.blocked, summary.skipped, summary.failed
    )?;

    Ok(summary)
}
