//! Renderers that re-express a profile in the formats its consumers read
//!
//! - `php`: the administration tool's `config.user.inc.php`
//! - `env`: `PMACONF_*` variables the config loader reads back
//! - `yaml`: the settings file itself
//!
//! None of them ever writes a secret value. Passwords are referenced by
//! the path of their secret file.

pub mod env;
pub mod php;
pub mod yaml;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use env::render_env;
pub use php::render_php;
pub use yaml::render_yaml;

/// Output format of `pmaconf render`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    #[default]
    Php,
    Env,
    Yaml,
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Php => "php",
            Self::Env => "env",
            Self::Yaml => "yaml",
        })
    }
}

impl FromStr for RenderFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "php" => Ok(Self::Php),
            "env" => Ok(Self::Env),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(format!("Unknown render format: {other}")),
        }
    }
}
