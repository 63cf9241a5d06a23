use tracing::info;

/// One-shot user notification surface of the host.
pub trait MessageSink {
    fn show_message(&mut self, title: &str, text: &str);
}

/// Reports messages through `tracing` at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl MessageSink for TracingSink {
    fn show_message(&mut self, title: &str, text: &str) {
        info!(title, "{text}");
    }
}

/// Keeps every message, in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub messages: Vec<(String, String)>,
}

impl MessageSink for RecordingSink {
    fn show_message(&mut self, title: &str, text: &str) {
        self.messages.push((title.to_owned(), text.to_owned()));
    }
}
