//! Configuration file handling

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use super::paths::config_path;
use super::Result;

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Daemon connection settings
    #[serde(default)]
    pub client: ClientConfig,
}

/// Settings for one gstd client
///
/// Fixed once a client is built from it; every request made through that
/// client shares these values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// Daemon host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Daemon TCP port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Maximum response payload in bytes (unbounded when absent)
    #[serde(default)]
    pub max_response_size: Option<usize>,

    /// Byte marking the end of a response message
    ///
    /// Must be ASCII so it can never match inside a multi-byte UTF-8 sequence.
    #[serde(default = "default_terminator")]
    pub terminator: u8,

    /// Default per-request timeout
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_response_size: None,
            terminator: default_terminator(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    5000
}
fn default_terminator() -> u8 {
    0
}
fn default_timeout_ms() -> u64 {
    5000
}

impl ClientConfig {
    /// Default timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Address string suitable for `TcpStream::connect`
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Reject values no request could succeed with
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(super::Error::Config("host must not be empty".to_string()));
        }
        if !self.terminator.is_ascii() {
            return Err(super::Error::Config(format!(
                "terminator must be an ASCII byte, got 0x{:02x}",
                self.terminator
            )));
        }
        if self.timeout_ms == 0 {
            return Err(super::Error::Config(
                "timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| super::Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        let config: Self =
            toml::from_str(&content).map_err(|e| super::Error::ConfigParse(e.to_string()))?;
        config.client.validate()?;
        Ok(config)
    }
}
