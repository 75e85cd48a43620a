use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::metadata::{DEFAULT_METADATA_DATABASE, DEFAULT_TABLE_PREFIX};

/// Default path of the database root password secret.
pub const DEFAULT_PASSWORD_FILE: &str = "/run/secrets/db_root_password";

/// Main settings structure.
///
/// Settings name where secrets live; they never hold secret values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Connection to the database service
    #[serde(default)]
    pub server: ServerSettings,

    /// Metadata database and table naming
    #[serde(default)]
    pub metadata: MetadataSettings,

    /// Optional navigation and landing-tab tweaks
    #[serde(default)]
    pub interface: InterfaceSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How the administration tool authenticates against the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthType {
    /// Credentials supplied directly by the configuration
    #[default]
    Config,
    /// Login form, credentials kept in a cookie
    Cookie,
    /// HTTP basic authentication
    Http,
}

impl AuthType {
    /// Value as the tool spells it.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Cookie => "cookie",
            Self::Http => "http",
        }
    }
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transport to the database service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectType {
    #[default]
    Tcp,
    Socket,
}

impl ConnectType {
    /// Value as the tool spells it.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tcp => "tcp",
            Self::Socket => "socket",
        }
    }
}

impl fmt::Display for ConnectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Server connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ServerSettings {
    #[serde(default)]
    pub auth_type: AuthType,

    #[serde(default = "default_user")]
    pub user: String,

    /// File holding the password; whitespace around its content is ignored
    #[serde(default = "default_password_file")]
    pub password_file: PathBuf,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub connect_type: ConnectType,

    /// Socket path, required when `connect_type` is `socket`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socket: Option<PathBuf>,

    #[serde(default)]
    pub compress: bool,

    #[serde(default = "default_true")]
    pub allow_no_password: bool,

    #[serde(default = "default_true")]
    pub allow_root: bool,

    #[serde(default = "default_true")]
    pub allow_arbitrary_server: bool,

    #[serde(default = "default_true")]
    pub verbose_check: bool,

    /// Control user for the advanced features; empty disables it
    #[serde(default)]
    pub control_user: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_password_file: Option<PathBuf>,
}

fn default_user() -> String {
    "root".to_string()
}

fn default_password_file() -> PathBuf {
    PathBuf::from(DEFAULT_PASSWORD_FILE)
}

fn default_host() -> String {
    "db".to_string()
}

const fn default_port() -> u16 {
    3306
}

const fn default_true() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            auth_type: AuthType::default(),
            user: default_user(),
            password_file: default_password_file(),
            host: default_host(),
            port: default_port(),
            connect_type: ConnectType::default(),
            socket: None,
            compress: false,
            allow_no_password: true,
            allow_root: true,
            allow_arbitrary_server: true,
            verbose_check: true,
            control_user: String::new(),
            control_password_file: None,
        }
    }
}

/// Metadata storage settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MetadataSettings {
    /// Metadata database (`pmadb`)
    #[serde(default = "default_metadata_database")]
    pub database: String,

    /// Prefix shared by every metadata table
    #[serde(default = "default_table_prefix")]
    pub table_prefix: String,
}

fn default_metadata_database() -> String {
    DEFAULT_METADATA_DATABASE.to_string()
}

fn default_table_prefix() -> String {
    DEFAULT_TABLE_PREFIX.to_string()
}

impl Default for MetadataSettings {
    fn default() -> Self {
        Self {
            database: default_metadata_database(),
            table_prefix: default_table_prefix(),
        }
    }
}

/// Navigation settings. All optional; unset means the tool's own default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct InterfaceSettings {
    /// Regex of databases hidden from the navigation panel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_db: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_tab_database: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_tab_table: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files; stderr only when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,

    /// How often the log file under `log_dir` rolls over
    #[serde(default)]
    pub rotation: RotationPolicy,
}

/// Rolling policy for the log file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationPolicy {
    #[default]
    Daily,
    Hourly,
    Never,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: RotationPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_container_setup() {
        let config = Config::default();
        assert_eq!(config.server.auth_type, AuthType::Config);
        assert_eq!(config.server.user, "root");
        assert_eq!(config.server.host, "db");
        assert_eq!(config.server.port, 3306);
        assert_eq!(config.server.connect_type, ConnectType::Tcp);
        assert_eq!(
            config.server.password_file,
            PathBuf::from("/run/secrets/db_root_password")
        );
        assert!(!config.server.compress);
        assert!(config.server.allow_no_password);
        assert!(config.server.allow_root);
        assert!(config.server.allow_arbitrary_server);
        assert!(config.server.verbose_check);
        assert!(config.server.control_user.is_empty());
        assert_eq!(config.metadata.database, "phpmyadmin");
        assert_eq!(config.metadata.table_prefix, "pma__");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r"
server:
  host: mysql.internal
  connect_type: socket
  socket: /var/run/mysqld/mysqld.sock
interface:
  hide_db: ^(mysql|sys)$
";
        let config: Config = serde_yaml::from_str(yaml).expect("YAML should parse");
        assert_eq!(config.server.host, "mysql.internal");
        assert_eq!(config.server.connect_type, ConnectType::Socket);
        assert_eq!(config.server.port, 3306);
        assert_eq!(config.server.user, "root");
        assert_eq!(config.interface.hide_db.as_deref(), Some("^(mysql|sys)$"));
        assert_eq!(config.metadata, MetadataSettings::default());
    }

    #[test]
    fn test_unknown_auth_type_is_rejected() {
        let yaml = "server:\n  auth_type: signon\n";
        assert!(serde_yaml::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn test_unset_options_are_not_serialized() {
        let yaml = serde_yaml::to_string(&Config::default()).expect("serialize");
        assert!(!yaml.contains("socket"));
        assert!(!yaml.contains("hide_db"));
        assert!(!yaml.contains("null"));
    }
}
