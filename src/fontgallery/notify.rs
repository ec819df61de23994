//! Advisory progress notifications.
//!
//! The generation run emits human-readable progress text while it works,
//! in addition to the messages returned in its result. Notifications are
//! fire-and-forget: nothing in the pipeline depends on them and they carry
//! no cancellation semantics.

pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Discards every notification.
#[derive(Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&mut self, _message: &str) {}
}

/// Collects notifications for assertions in tests.
#[derive(Debug, Default)]
pub struct CollectingNotifier {
    pub messages: Vec<String>,
}

impl CollectingNotifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Notifier for CollectingNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
