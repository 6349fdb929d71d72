use colored::*;
use guard::{FormGuard, GuardError, Notifier, RecordedSubmit, StaticDocument, SubmitOutcome};
use models::{ContactSubmission, GuardConfig};
use std::io::Write;

/// Shows the blocking notification as a header followed by one indented
/// line per error.
pub struct TerminalNotifier<W: Write> {
    out: W,
}

impl<W: Write> TerminalNotifier<W> {
    pub fn new(out: W) -> Self {
        TerminalNotifier { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Notifier for TerminalNotifier<W> {
    fn notify(&mut self, message: &str) {
        // Nowhere to report a failed write to the terminal itself.
        let _ = writeln!(self.out, "{}", "Form not submitted:".red().bold());
        for line in message.lines() {
            let _ = writeln!(self.out, "  {}", line);
        }
    }
}

/// Submits one set of field values through a freshly attached guard.
pub fn check_submission<N>(
    config: GuardConfig,
    submission: ContactSubmission,
    notifier: &mut N,
) -> Result<SubmitOutcome, GuardError>
where
    N: Notifier + ?Sized,
{
    let document = StaticDocument::with_form(submission);
    let mut event = RecordedSubmit::new();

    match FormGuard::attach(&document, config)? {
        Some(guard) => Ok(guard.handle_submit(&document, &mut event, notifier)),
        None => Ok(SubmitOutcome::Allowed),
    }
}
