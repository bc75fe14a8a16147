//! CLI command handling
//!
//! Dispatches CLI commands to the daemon and formats output.

use crate::commands::{Commands, ConnectionArgs};
use crate::common::config::{ClientConfig, Config};
use crate::common::{paths, Result};
use crate::tcp::GstdClient;

/// Dispatch a CLI command
pub async fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Send {
            command,
            connection,
            pretty,
        } => {
            let config = resolve_config(&connection)?;
            let client = GstdClient::new(config);

            let response = client.send(&command.join(" ")).await?;

            if pretty {
                let value: serde_json::Value = serde_json::from_str(&response)?;
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{}", response);
            }

            Ok(())
        }

        Commands::Config { connection } => {
            match paths::config_path() {
                Some(path) if path.exists() => println!("Config file: {}", path.display()),
                Some(path) => println!(
                    "Config file: {} (not found, using defaults)",
                    path.display()
                ),
                None => println!("Config file: unavailable on this platform"),
            }

            let config = resolve_config(&connection)?;
            println!("host = {}", config.host);
            println!("port = {}", config.port);
            match config.max_response_size {
                Some(limit) => println!("max_response_size = {}", limit),
                None => println!("max_response_size = unbounded"),
            }
            println!("terminator = 0x{:02x}", config.terminator);
            println!("timeout_ms = {}", config.timeout_ms);

            Ok(())
        }
    }
}

/// Load the config file and apply command-line overrides
fn resolve_config(args: &ConnectionArgs) -> Result<ClientConfig> {
    let config = apply_overrides(Config::load()?.client, args);
    config.validate()?;
    Ok(config)
}

fn apply_overrides(mut config: ClientConfig, args: &ConnectionArgs) -> ClientConfig {
    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(timeout_ms) = args.timeout_ms {
        config.timeout_ms = timeout_ms;
    }
    if let Some(limit) = args.max_response_size {
        config.max_response_size = Some(limit);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let args = ConnectionArgs {
            port: Some(6000),
            max_response_size: Some(10),
            ..ConnectionArgs::default()
        };
        let config = apply_overrides(ClientConfig::default(), &args);

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 6000);
        assert_eq!(config.max_response_size, Some(10));
        assert_eq!(config.timeout_ms, 5000);
    }
}
