use std::path::{Path, PathBuf};

use super::config::{AuthType, Config, ConnectType, InterfaceSettings};
use super::metadata::MetadataTables;
use super::secret::Secret;

/// Connection profile of one database server, as the administration tool
/// consumes it.
///
/// Built once at startup and never mutated: every field is private and only
/// reachable through `&self` accessors. Secrets are held as [`Secret`], so the
/// derived `Debug` stays safe to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerProfile {
    auth_type: AuthType,
    user: String,
    password: Secret,
    password_file: PathBuf,
    host: String,
    port: u16,
    connect_type: ConnectType,
    socket: Option<PathBuf>,
    compress: bool,
    allow_no_password: bool,
    allow_root: bool,
    allow_arbitrary_server: bool,
    verbose_check: bool,
    control_user: String,
    control_password: Option<Secret>,
    control_password_file: Option<PathBuf>,
    metadata: MetadataTables,
    interface: InterfaceSettings,
}

impl ServerProfile {
    /// Assemble a profile from settings and the secrets they point at.
    ///
    /// Reading the secret files is the caller's job; see
    /// [`ProfileLoader`](crate::services::ProfileLoader).
    pub fn new(config: &Config, password: Secret, control_password: Option<Secret>) -> Self {
        let server = &config.server;
        Self {
            auth_type: server.auth_type,
            user: server.user.clone(),
            password,
            password_file: server.password_file.clone(),
            host: server.host.clone(),
            port: server.port,
            connect_type: server.connect_type,
            socket: server.socket.clone(),
            compress: server.compress,
            allow_no_password: server.allow_no_password,
            allow_root: server.allow_root,
            allow_arbitrary_server: server.allow_arbitrary_server,
            verbose_check: server.verbose_check,
            control_user: server.control_user.clone(),
            control_password,
            control_password_file: server.control_password_file.clone(),
            metadata: MetadataTables::new(
                config.metadata.database.clone(),
                config.metadata.table_prefix.clone(),
            ),
            interface: config.interface.clone(),
        }
    }

    pub const fn auth_type(&self) -> AuthType {
        self.auth_type
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub const fn password(&self) -> &Secret {
        &self.password
    }

    /// Secret file the password was read from.
    pub fn password_file(&self) -> &Path {
        &self.password_file
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub const fn port(&self) -> u16 {
        self.port
    }

    pub const fn connect_type(&self) -> ConnectType {
        self.connect_type
    }

    pub fn socket(&self) -> Option<&Path> {
        self.socket.as_deref()
    }

    pub const fn compress(&self) -> bool {
        self.compress
    }

    pub const fn allow_no_password(&self) -> bool {
        self.allow_no_password
    }

    pub const fn allow_root(&self) -> bool {
        self.allow_root
    }

    pub const fn allow_arbitrary_server(&self) -> bool {
        self.allow_arbitrary_server
    }

    pub const fn verbose_check(&self) -> bool {
        self.verbose_check
    }

    /// Control user, empty when the advanced features run without one.
    pub fn control_user(&self) -> &str {
        &self.control_user
    }

    pub const fn control_password(&self) -> Option<&Secret> {
        self.control_password.as_ref()
    }

    pub fn control_password_file(&self) -> Option<&Path> {
        self.control_password_file.as_deref()
    }

    pub const fn metadata(&self) -> &MetadataTables {
        &self.metadata
    }

    pub const fn interface(&self) -> &InterfaceSettings {
        &self.interface
    }

    /// `host:port` for TCP, the socket path otherwise.
    pub fn address(&self) -> String {
        match (self.connect_type, &self.socket) {
            (ConnectType::Socket, Some(socket)) => socket.display().to_string(),
            _ => format!("{}:{}", self.host, self.port),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::metadata::MetadataFeature;

    fn profile() -> ServerProfile {
        ServerProfile::new(&Config::default(), Secret::new("s3cret"), None)
    }

    #[test]
    fn test_accessors_reflect_settings() {
        let profile = profile();
        assert_eq!(profile.auth_type(), AuthType::Config);
        assert_eq!(profile.user(), "root");
        assert_eq!(profile.password().expose(), "s3cret");
        assert_eq!(profile.host(), "db");
        assert_eq!(profile.port(), 3306);
        assert_eq!(profile.connect_type(), ConnectType::Tcp);
        assert!(profile.socket().is_none());
        assert!(!profile.compress());
        assert!(profile.allow_no_password());
        assert!(profile.allow_root());
        assert!(profile.allow_arbitrary_server());
        assert!(profile.verbose_check());
        assert_eq!(profile.control_user(), "");
        assert!(profile.control_password().is_none());
        assert_eq!(
            profile.metadata().table(MetadataFeature::Tracking),
            "pma__tracking"
        );
    }

    #[test]
    fn test_repeated_reads_are_identical() {
        let profile = profile();
        let first = profile.host();
        let second = profile.host();
        assert_eq!(first, "db");
        assert_eq!(first, second);
    }

    #[test]
    fn test_debug_does_not_leak_password() {
        let rendered = format!("{:?}", profile());
        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn test_address() {
        assert_eq!(profile().address(), "db:3306");

        let mut config = Config::default();
        config.server.connect_type = ConnectType::Socket;
        config.server.socket = Some(PathBuf::from("/run/mysqld/mysqld.sock"));
        let profile = ServerProfile::new(&config, Secret::new(""), None);
        assert_eq!(profile.address(), "/run/mysqld/mysqld.sock");
    }
}
