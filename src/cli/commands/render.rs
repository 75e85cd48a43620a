//! Implementation of the `pmaconf render` command.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tracing::info;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;
use crate::infrastructure::render::{render_env, render_php, render_yaml, RenderFormat};
use crate::services::ProfileLoader;

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = RenderFormat::Php)]
    pub format: RenderFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct RenderOutput {
    pub format: RenderFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl CommandOutput for RenderOutput {
    fn to_human(&self) -> String {
        match (&self.path, &self.content) {
            (Some(path), _) => format!("Wrote {} settings to {}", self.format, path.display()),
            (None, Some(content)) => content.trim_end().to_string(),
            (None, None) => String::new(),
        }
    }
}

/// Render settings in `format`.
///
/// PHP needs the full profile, so it also reads the secret files; a missing
/// secret fails here exactly as it would at the tool's startup.
pub fn render(config: &Config, format: RenderFormat) -> Result<String> {
    match format {
        RenderFormat::Php => {
            let profile = ProfileLoader::new().load(config)?;
            Ok(render_php(&profile))
        }
        RenderFormat::Env => render_env(config),
        RenderFormat::Yaml => render_yaml(config),
    }
}

pub fn execute(config: &Config, args: &RenderArgs, json_mode: bool) -> Result<()> {
    let rendered = render(config, args.format)?;

    let output_data = match &args.output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), format = %args.format, "settings rendered");
            RenderOutput {
                format: args.format,
                path: Some(path.clone()),
                content: None,
            }
        }
        None => RenderOutput {
            format: args.format,
            path: None,
            content: Some(rendered),
        },
    };

    output(&output_data, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ProfileError;
    use tempfile::TempDir;

    #[test]
    fn test_php_needs_readable_secret() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.server.password_file = dir.path().join("missing");

        let err = render(&config, RenderFormat::Php).unwrap_err();
        assert!(err.downcast_ref::<ProfileError>().is_some());

        // Env and YAML only describe settings
        assert!(render(&config, RenderFormat::Env).is_ok());
        assert!(render(&config, RenderFormat::Yaml).is_ok());
    }

    #[test]
    fn test_execute_writes_output_file() {
        let dir = TempDir::new().unwrap();
        let secret = dir.path().join("pw");
        fs::write(&secret, "pw\n").unwrap();
        let mut config = Config::default();
        config.server.password_file = secret;

        let target = dir.path().join("config.user.inc.php");
        let args = RenderArgs {
            format: RenderFormat::Php,
            output: Some(target.clone()),
        };
        execute(&config, &args, true).unwrap();

        let php = fs::read_to_string(target).unwrap();
        assert!(php.starts_with("<?php"));
        assert!(!php.contains("'pw'"));
    }
}
