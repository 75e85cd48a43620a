//! Implementation of the `pmaconf check` command.

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;
use tracing::warn;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{AuthType, Config, ServerProfile};
use crate::services::ProfileLoader;

#[derive(Debug, Serialize)]
pub struct CheckOutput {
    pub success: bool,
    pub address: String,
    pub password_file: PathBuf,
    pub warnings: Vec<String>,
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![format!(
            "Profile OK: {} (password from {})",
            self.address,
            self.password_file.display()
        )];
        for warning in &self.warnings {
            lines.push(format!("  warning: {warning}"));
        }
        lines.join("\n")
    }
}

/// Settings that load fine but will not behave as intended.
pub fn warnings(profile: &ServerProfile) -> Vec<String> {
    let mut warnings = Vec::new();

    if profile.auth_type() == AuthType::Config
        && profile.password().is_empty()
        && !profile.allow_no_password()
    {
        warnings.push(format!(
            "password in {} is empty but allow_no_password is off",
            profile.password_file().display()
        ));
    }

    if profile.user() == "root" && !profile.allow_root() {
        warnings.push("user is root but allow_root is off".to_string());
    }

    match (profile.control_user().is_empty(), profile.control_password_file()) {
        (true, Some(path)) => warnings.push(format!(
            "control password file {} is set without a control_user",
            path.display()
        )),
        (false, None) => warnings.push(format!(
            "control_user {} has no control password file",
            profile.control_user()
        )),
        _ => {}
    }

    warnings
}

pub fn execute(config: &Config, json_mode: bool) -> Result<()> {
    let profile = ProfileLoader::new().load(config)?;

    let warnings = warnings(&profile);
    for warning in &warnings {
        warn!(%warning, "profile check");
    }

    let output_data = CheckOutput {
        success: true,
        address: profile.address(),
        password_file: profile.password_file().to_path_buf(),
        warnings,
    };
    output(&output_data, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Secret;

    #[test]
    fn test_default_profile_has_no_warnings() {
        let profile = ServerProfile::new(&Config::default(), Secret::new("pw"), None);
        assert!(warnings(&profile).is_empty());
    }

    #[test]
    fn test_empty_password_without_allow_no_password() {
        let mut config = Config::default();
        config.server.allow_no_password = false;
        let profile = ServerProfile::new(&config, Secret::new(""), None);

        let warnings = warnings(&profile);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("allow_no_password"));
    }

    #[test]
    fn test_root_without_allow_root() {
        let mut config = Config::default();
        config.server.allow_root = false;
        let profile = ServerProfile::new(&config, Secret::new("pw"), None);
        assert_eq!(warnings(&profile), vec!["user is root but allow_root is off"]);
    }

    #[test]
    fn test_control_user_without_password_file() {
        let mut config = Config::default();
        config.server.control_user = "pma".to_string();
        let profile = ServerProfile::new(&config, Secret::new("pw"), None);

        let warnings = warnings(&profile);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("control_user pma"));
    }
}
