//! Config command - show current configuration

use crate::cli::output;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also show where the configuration file is looked up
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<String>,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Serialize)]
pub struct LoggingConfig {
    pub format: String,
    pub filter: String,
}

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = &services.config;

    let config_file = args
        .all
        .then(|| XdgDirs::new().config_file().to_string_lossy().into_owned());

    let response = ConfigResponse {
        config_file,
        server: ServerConfig {
            host: config.server.host.clone(),
            port: config.server.port,
        },
        logging: LoggingConfig {
            format: config.logging.format.to_string(),
            filter: config.logging.filter.clone(),
        },
    };

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            if let Some(path) = &response.config_file {
                println!("  config_file: {path}");
            }
            println!("  server:");
            println!("    host: {}", response.server.host);
            println!("    port: {}", response.server.port);
            println!("  logging:");
            println!("    format: {}", response.logging.format);
            println!("    filter: {}", response.logging.filter);
        }
        OutputFormat::Json => {
            output::print_json(&response)?;
        }
    }

    Ok(())
}
