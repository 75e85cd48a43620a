use std::path::Path;

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::domain::models::{Config, ConnectType};

/// Prefix of environment variables that override settings.
pub const ENV_PREFIX: &str = "PMACONF_";

/// Separator between nested keys in environment variable names.
pub const ENV_SEPARATOR: &str = "__";

/// Project settings file.
pub const CONFIG_FILE: &str = "pmaconf.yaml";

/// Optional local overrides, not meant for version control.
pub const LOCAL_CONFIG_FILE: &str = "pmaconf.local.yaml";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Server host cannot be empty")]
    EmptyHost,

    #[error("Server user cannot be empty")]
    EmptyUser,

    #[error("Invalid port: 0")]
    InvalidPort,

    #[error("Socket connections need a socket path")]
    MissingSocket,

    #[error("Metadata database name cannot be empty")]
    EmptyMetadataDatabase,

    #[error("Metadata table prefix cannot be empty")]
    EmptyTablePrefix,

    #[error("Invalid hide_db pattern {pattern:?}: {reason}")]
    InvalidHideDb { pattern: String, reason: String },

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. pmaconf.yaml in the working directory
    /// 3. pmaconf.local.yaml (optional overrides)
    /// 4. Environment variables (PMACONF_* prefix, `__` between nested keys)
    pub fn load() -> Result<Config> {
        let config: Config = Self::base()
            .merge(Yaml::file(CONFIG_FILE))
            .merge(Yaml::file(LOCAL_CONFIG_FILE))
            .merge(Self::env())
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        debug!(host = %config.server.host, port = config.server.port, "configuration loaded");
        Ok(config)
    }

    /// Load configuration from a specific file, still honouring env overrides
    ///
    /// Unlike [`ConfigLoader::load`], the file must exist.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.is_file() {
            anyhow::bail!("Config file not found: {}", path.display());
        }

        let config: Config = Self::base()
            .merge(Yaml::file(path))
            .merge(Self::env())
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.display()))?;

        Self::validate(&config)?;
        debug!(path = %path.display(), "configuration loaded from file");
        Ok(config)
    }

    /// Load from `path` when given, otherwise from the working directory
    pub fn load_optional(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::load(),
        }
    }

    fn base() -> Figment {
        Figment::new().merge(Serialized::defaults(Config::default()))
    }

    fn env() -> Env {
        Env::prefixed(ENV_PREFIX).split(ENV_SEPARATOR)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let server = &config.server;

        if server.host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }

        if server.user.trim().is_empty() {
            return Err(ConfigError::EmptyUser);
        }

        if server.port == 0 {
            return Err(ConfigError::InvalidPort);
        }

        if server.connect_type == ConnectType::Socket && server.socket.is_none() {
            return Err(ConfigError::MissingSocket);
        }

        if config.metadata.database.trim().is_empty() {
            return Err(ConfigError::EmptyMetadataDatabase);
        }

        if config.metadata.table_prefix.is_empty() {
            return Err(ConfigError::EmptyTablePrefix);
        }

        if let Some(pattern) = &config.interface.hide_db {
            Regex::new(pattern).map_err(|e| ConfigError::InvalidHideDb {
                pattern: pattern.clone(),
                reason: e.to_string(),
            })?;
        }

        // Validate logging config
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        Ok(())
    }
}
