//! gstc - command-line client for the GStreamer daemon
//!
//! Sends one command over TCP and prints the daemon's response.

use clap::Parser;
use gstc::{cli, commands::Commands, common::logging};

#[derive(Parser)]
#[command(name = "gstc", about = "Command-line client for the GStreamer daemon")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    logging::init_cli();

    let cli = Cli::parse();

    if let Err(e) = cli::dispatch(cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
