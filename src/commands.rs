//! CLI command definitions
//!
//! Defines the clap commands for the gstc CLI.

use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum Commands {
    /// Send a raw command to the daemon and print its response
    Send {
        /// Command words, joined with spaces (e.g. pipeline_play p0)
        #[arg(required = true, num_args = 1..)]
        command: Vec<String>,

        #[command(flatten)]
        connection: ConnectionArgs,

        /// Parse the response as JSON and pretty-print it
        #[arg(long)]
        pretty: bool,
    },

    /// Show the config file location and the effective client settings
    Config {
        #[command(flatten)]
        connection: ConnectionArgs,
    },
}

/// Overrides for values from the config file
#[derive(Args, Debug, Default, Clone)]
pub struct ConnectionArgs {
    /// Daemon host address
    #[arg(long)]
    pub host: Option<String>,

    /// Daemon TCP port
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Request timeout in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Fail responses longer than this many bytes
    #[arg(long)]
    pub max_response_size: Option<usize>,
}
