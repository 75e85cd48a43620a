//! Implementation of the `pmaconf show` command.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{output, yes_no, CommandOutput};
use crate::domain::models::{Config, InterfaceSettings, ServerProfile, REDACTED};
use crate::services::ProfileLoader;

/// Printable view of a profile. Secrets appear only as [`REDACTED`].
#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub auth_type: String,
    pub user: String,
    pub password: &'static str,
    pub password_file: PathBuf,
    pub host: String,
    pub port: u16,
    pub connect_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socket: Option<PathBuf>,
    pub compress: bool,
    pub allow_no_password: bool,
    pub allow_root: bool,
    pub allow_arbitrary_server: bool,
    pub verbose_check: bool,
    pub control_user: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_password_file: Option<PathBuf>,
    pub pmadb: String,
    pub table_prefix: String,
    pub tables: BTreeMap<&'static str, String>,
    pub interface: InterfaceSettings,
}

impl From<&ServerProfile> for ProfileView {
    fn from(profile: &ServerProfile) -> Self {
        let metadata = profile.metadata();
        Self {
            auth_type: profile.auth_type().to_string(),
            user: profile.user().to_string(),
            password: if profile.password().is_empty() {
                ""
            } else {
                REDACTED
            },
            password_file: profile.password_file().to_path_buf(),
            host: profile.host().to_string(),
            port: profile.port(),
            connect_type: profile.connect_type().to_string(),
            socket: profile.socket().map(PathBuf::from),
            compress: profile.compress(),
            allow_no_password: profile.allow_no_password(),
            allow_root: profile.allow_root(),
            allow_arbitrary_server: profile.allow_arbitrary_server(),
            verbose_check: profile.verbose_check(),
            control_user: profile.control_user().to_string(),
            control_password_file: profile.control_password_file().map(PathBuf::from),
            pmadb: metadata.database().to_string(),
            table_prefix: metadata.prefix().to_string(),
            tables: metadata
                .iter()
                .map(|(feature, table)| (feature.config_key(), table.to_string()))
                .collect(),
            interface: profile.interface().clone(),
        }
    }
}

impl CommandOutput for ProfileView {
    fn to_human(&self) -> String {
        let password = if self.password.is_empty() {
            "(empty)"
        } else {
            self.password
        };

        let mut lines = vec![
            format!("auth_type:              {}", self.auth_type),
            format!("user:                   {}", self.user),
            format!(
                "password:               {password} (from {})",
                self.password_file.display()
            ),
            format!("host:                   {}", self.host),
            format!("port:                   {}", self.port),
            format!("connect_type:           {}", self.connect_type),
        ];
        if let Some(socket) = &self.socket {
            lines.push(format!("socket:                 {}", socket.display()));
        }
        lines.extend([
            format!("compress:               {}", yes_no(self.compress)),
            format!("allow_no_password:      {}", yes_no(self.allow_no_password)),
            format!("allow_root:             {}", yes_no(self.allow_root)),
            format!("allow_arbitrary_server: {}", yes_no(self.allow_arbitrary_server)),
            format!("verbose_check:          {}", yes_no(self.verbose_check)),
        ]);
        if !self.control_user.is_empty() {
            lines.push(format!("control_user:           {}", self.control_user));
        }
        if let Some(hide_db) = &self.interface.hide_db {
            lines.push(format!("hide_db:                {hide_db}"));
        }

        lines.push(format!(
            "\nMetadata tables ({} in {}):",
            self.tables.len(),
            self.pmadb
        ));
        for (key, table) in &self.tables {
            lines.push(format!("  {key:<20} {table}"));
        }
        lines.join("\n")
    }
}

pub fn execute(config: &Config, json_mode: bool) -> Result<()> {
    let profile = ProfileLoader::new().load(config)?;
    output(&ProfileView::from(&profile), json_mode);
    Ok(())
}
