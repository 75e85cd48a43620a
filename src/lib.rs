//! pmaconf - server connection profile for a containerized phpMyAdmin
//!
//! The profile tells the administration tool how to reach its database
//! service: auth type, user, a password read from a secret file, host and
//! port, permissive/strict switches, and the names of the metadata tables
//! it keeps its own state in.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): settings, the immutable profile, errors
//! - **Service Layer** (`services`): builds the profile from settings
//! - **Infrastructure Layer** (`infrastructure`): figment loading, secret
//!   files, logging, renderers
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use pmaconf::{ConfigLoader, ProfileLoader};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ConfigLoader::load()?;
//!     let profile = ProfileLoader::new().load(&config)?;
//!     println!("{} @ {}", profile.user(), profile.address());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

use std::path::Path;

// Re-export commonly used types for convenience
pub use domain::models::{
    AuthType, Config, ConnectType, InterfaceSettings, LoggingConfig, MetadataFeature,
    MetadataSettings, MetadataTables, RotationPolicy, Secret, ServerProfile, ServerSettings,
};
pub use domain::{ProfileError, ProfileResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::render::{render_env, render_php, render_yaml, RenderFormat};
pub use services::ProfileLoader;

/// Load settings (from `path`, or the working directory) and build the profile.
pub fn load_profile(path: Option<&Path>) -> anyhow::Result<ServerProfile> {
    let config = ConfigLoader::load_optional(path)?;
    Ok(ProfileLoader::new().load(&config)?)
}
