/// The submit action the guard intercepts.
pub trait SubmitEvent {
    /// Cancels the host's default submission.
    fn prevent_default(&mut self);

    fn default_prevented(&self) -> bool;
}

/// A submit event that only remembers whether it was cancelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordedSubmit {
    prevented: bool,
}

impl RecordedSubmit {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SubmitEvent for RecordedSubmit {
    fn prevent_default(&mut self) {
        self.prevented = true;
    }

    fn default_prevented(&self) -> bool {
        self.prevented
    }
}
