use crate::domain::errors::ProfileResult;
use crate::domain::models::{Config, ServerProfile};
use crate::infrastructure::credentials::read_secret;
use tracing::info;

/// Builds the immutable [`ServerProfile`] from validated settings.
///
/// Reads the password file, and the control password file when one is
/// configured, exactly once. An unreadable file is the only failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileLoader;

impl ProfileLoader {
    pub const fn new() -> Self {
        Self
    }

    pub fn load(&self, config: &Config) -> ProfileResult<ServerProfile> {
        let server = &config.server;
        let password = read_secret(&server.password_file)?;
        let control_password = server
            .control_password_file
            .as_ref()
            .map(read_secret)
            .transpose()?;

        let profile = ServerProfile::new(config, password, control_password);
        info!(
            user = profile.user(),
            address = %profile.address(),
            auth_type = %profile.auth_type(),
            tables = profile.metadata().len(),
            "server profile loaded"
        );
        Ok(profile)
    }
}
