//! TCP client for the gstd daemon
//!
//! Each call opens its own connection, writes one command, and reads one
//! terminated response. Nothing is shared between calls besides the
//! immutable configuration and the sink.

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpStream;

use crate::common::config::ClientConfig;
use crate::common::{Error, Result};

use super::framing;
use super::sink::{ErrorSink, TracingSink};

/// Client for sending commands to a gstd daemon
#[derive(Clone)]
pub struct GstdClient {
    config: ClientConfig,
    sink: Arc<dyn ErrorSink>,
}

impl std::fmt::Debug for GstdClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GstdClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for GstdClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl GstdClient {
    /// Create a client that reports failures through `tracing`
    pub fn new(config: ClientConfig) -> Self {
        Self::with_sink(config, Arc::new(TracingSink))
    }

    /// Create a client with an injected error sink
    pub fn with_sink(config: ClientConfig, sink: Arc<dyn ErrorSink>) -> Self {
        Self { config, sink }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn host(&self) -> &str {
        &self.config.host
    }

    pub fn port(&self) -> u16 {
        self.config.port
    }

    pub fn max_response_size(&self) -> Option<usize> {
        self.config.max_response_size
    }

    pub fn terminator(&self) -> u8 {
        self.config.terminator
    }

    pub fn default_timeout(&self) -> Duration {
        self.config.timeout()
    }

    /// Send a command using the configured default timeout
    pub async fn send(&self, command: &str) -> Result<String> {
        self.send_with_timeout(command, self.default_timeout()).await
    }

    /// Send a command and wait at most `timeout` for the full response
    ///
    /// The timeout covers connecting, writing, and reading. The connection
    /// is closed before this returns, whatever the outcome.
    pub async fn send_with_timeout(&self, command: &str, timeout: Duration) -> Result<String> {
        let exchange = async {
            Exchange::connect(&self.config)
                .await?
                .run(command)
                .await
        };

        let result = match tokio::time::timeout(timeout, exchange).await {
            Ok(result) => result,
            Err(_) => Err(Error::Timeout(timeout)),
        };

        match result {
            Ok(response) => {
                tracing::debug!(command, bytes = response.len(), "gstd response received");
                Ok(response)
            }
            Err(e) => {
                self.sink.log_error(&e.to_string());
                Err(e)
            }
        }
    }
}

/// State owned by a single request
///
/// Consumed by `run`; dropping it, on any path, closes the socket.
struct Exchange {
    stream: TcpStream,
    terminator: u8,
    max_response_size: Option<usize>,
}

impl Exchange {
    async fn connect(config: &ClientConfig) -> Result<Self> {
        let address = config.address();
        tracing::trace!(%address, "connecting to gstd");

        let stream = TcpStream::connect(&address).await.map_err(Error::Connection)?;
        stream.set_nodelay(true).map_err(Error::Connection)?;

        Ok(Self {
            stream,
            terminator: config.terminator,
            max_response_size: config.max_response_size,
        })
    }

    async fn run(mut self, command: &str) -> Result<String> {
        framing::write_command(&mut self.stream, command).await?;
        framing::read_until_terminator(&mut self.stream, self.terminator, self.max_response_size)
            .await
    }
}
