use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_ACTION: &str = "OK";

/// A short-lived, dismissible message (snack bar)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub action: String,
    pub duration: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            message: message.into(),
            action: DEFAULT_ACTION.to_string(),
            duration: Duration::from_millis(duration_ms),
        }
    }
}

pub trait Notifier: Send + Sync {
    fn open(&self, notification: Notification);

    /// Shorthand for a notification with the default "OK" action
    fn show(&self, message: &str, duration_ms: u64) {
        self.open(Notification::new(message, duration_ms));
    }
}
