use anyhow::{Context, Result};

use crate::domain::models::Config;

/// Render settings as a YAML document loadable with `--config`.
pub fn render_yaml(config: &Config) -> Result<String> {
    serde_yaml::to_string(config).context("Failed to serialize settings as YAML")
}
