//! Command-line interface
//!
//! Commands load settings once, build the profile once, and print either
//! human-readable text or JSON (`--json`).

pub mod commands;
pub mod output;
pub mod types;

use std::path::Path;

use anyhow::Result;
use serde_json::json;

use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::logging::{LogConfig, LoggerImpl, SecretScrubber};

pub use types::{Cli, Commands};

/// Dispatch a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let json = cli.json;
    let path = cli.config.as_deref();

    match cli.command {
        Commands::Init(args) => commands::init::execute(&args, json),
        Commands::Show => {
            let (config, _logger) = prepare(path)?;
            commands::show::execute(&config, json)
        }
        Commands::Check => {
            let (config, _logger) = prepare(path)?;
            commands::check::execute(&config, json)
        }
        Commands::Render(args) => {
            let (config, _logger) = prepare(path)?;
            commands::render::execute(&config, &args, json)
        }
    }
}

/// Load settings, then start logging as they describe.
fn prepare(path: Option<&Path>) -> Result<(Config, LoggerImpl)> {
    let config = ConfigLoader::load_optional(path)?;
    let logger = LoggerImpl::init(&LogConfig::from(&config.logging))?;
    Ok((config, logger))
}

/// Print `err` with credentials scrubbed and exit with status 1.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ! {
    let message = SecretScrubber::new().scrub_message(&format!("{err:#}"));

    if json_mode {
        let body = json!({ "success": false, "error": message });
        eprintln!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("Error: {message}");
    }
    std::process::exit(1);
}
