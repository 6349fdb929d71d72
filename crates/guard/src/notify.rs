/// Blocking, modal notification shown to the user when a submission is
/// refused. Returns once the user has dismissed it.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Keeps every message instead of showing it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingNotifier {
    pub messages: Vec<String>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
