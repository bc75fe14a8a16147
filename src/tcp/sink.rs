//! Error sink injected into the client
//!
//! The client reports each failed request exactly once through its sink.

use std::sync::{Arc, Mutex};

/// Destination for request failure reports
pub trait ErrorSink: Send + Sync {
    fn log_error(&self, message: &str);
}

/// Default sink, forwards to `tracing` at ERROR level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn log_error(&self, message: &str) {
        tracing::error!(target: "gstc::tcp", "{}", message);
    }
}

/// Sink that keeps every message in memory
///
/// Useful in tests and for callers that want to surface errors themselves.
#[derive(Debug, Default, Clone)]
pub struct CapturingSink {
    messages: Arc<Mutex<Vec<String>>>,
}

impl CapturingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of captured messages, oldest first
    pub fn messages(&self) -> Vec<String> {
        match self.messages.lock() {
            Ok(messages) => messages.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl ErrorSink for CapturingSink {
    fn log_error(&self, message: &str) {
        let mut messages = match self.messages.lock() {
            Ok(messages) => messages,
            Err(poisoned) => poisoned.into_inner(),
        };
        messages.push(message.to_string());
    }
}
