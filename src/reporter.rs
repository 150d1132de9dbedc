//! Failure reporting.
//!
//! Verification hands each diagnostic message to a `Reporter`, one call per
//! message, in the order they were recorded.

/// Receives failure messages.
pub trait Reporter {
    /// Record a failure and continue.
    fn error(&mut self, message: &str);
}

impl<F> Reporter for F
where
    F: FnMut(&str),
{
    fn error(&mut self, message: &str) {
        self(message)
    }
}

/// Stores every message it receives.
#[derive(Debug, Default, Clone)]
pub struct CollectingReporter {
    messages: Vec<String>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// True once any failure was recorded.
    pub fn failed(&self) -> bool {
        !self.messages.is_empty()
    }
}

impl Reporter for CollectingReporter {
    fn error(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// Emits each message as an error event.
#[derive(Debug, Default)]
pub struct TracingReporter {
    count: usize,
}

impl TracingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of messages reported so far.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl Reporter for TracingReporter {
    fn error(&mut self, message: &str) {
        self.count += 1;
        tracing::error!(failure = %message, "Verification failure");
    }
}
