//! Implementation of the `pmaconf init` command.

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;
use crate::infrastructure::config::CONFIG_FILE;
use crate::infrastructure::render::render_yaml;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing settings file
    #[arg(long, short)]
    pub force: bool,

    /// Target directory (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

#[derive(Debug, serde::Serialize)]
pub struct InitOutput {
    pub success: bool,
    pub message: String,
    pub config_path: PathBuf,
}

impl CommandOutput for InitOutput {
    fn to_human(&self) -> String {
        if self.success {
            format!("{}\n  - {}", self.message, self.config_path.display())
        } else {
            self.message.clone()
        }
    }
}

pub fn execute(args: &InitArgs, json_mode: bool) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILE);

    if config_path.exists() && !args.force {
        let output_data = InitOutput {
            success: false,
            message: "Settings file already exists. Use --force to overwrite.".to_string(),
            config_path,
        };
        output(&output_data, json_mode);
        return Ok(());
    }

    fs::create_dir_all(&args.path)
        .with_context(|| format!("Failed to create {}", args.path.display()))?;

    let yaml = render_yaml(&Config::default())?;
    fs::write(&config_path, yaml)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    info!(path = %config_path.display(), "settings file written");

    let output_data = InitOutput {
        success: true,
        message: "Wrote default settings.".to_string(),
        config_path,
    };
    output(&output_data, json_mode);
    Ok(())
}
