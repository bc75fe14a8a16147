//! gstc - TCP client for the GStreamer daemon
//!
//! Sends a single textual command to gstd and returns the raw response,
//! which the daemon terminates with a NUL byte by default.

pub mod cli;
pub mod commands;
pub mod common;
pub mod tcp;

// Re-export commonly used types for tests
pub use common::config::ClientConfig;
pub use common::{Error, Result};
pub use tcp::{CapturingSink, ErrorSink, GstdClient};
