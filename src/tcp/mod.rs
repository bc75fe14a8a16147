//! TCP transport to the gstd daemon
//!
//! One connection per request, responses delimited by a terminator byte.

pub mod client;
pub mod framing;
pub mod sink;

pub use client::GstdClient;
pub use sink::{CapturingSink, ErrorSink, TracingSink};
