use std::path::Path;

use crate::domain::models::ServerProfile;

/// Quote `value` as a PHP single-quoted string literal.
fn php_string(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// PHP expression that reads a secret file at request time.
fn php_secret(path: &Path) -> String {
    format!(
        "trim(file_get_contents({}))",
        php_string(&path.display().to_string())
    )
}

const fn php_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

fn server(key: &str, value: &str) -> String {
    format!("$cfg['Servers'][$i]['{key}'] = {value};")
}

/// Render the profile as `config.user.inc.php`.
///
/// The password is emitted as an expression reading its secret file, so the
/// generated file is safe to bake into an image.
pub fn render_php(profile: &ServerProfile) -> String {
    let mut lines = vec![
        "<?php".to_string(),
        "/* Authentication type and info */".to_string(),
        server("auth_type", &php_string(profile.auth_type().as_str())),
        server("user", &php_string(profile.user())),
        server("password", &php_secret(profile.password_file())),
        server("AllowNoPassword", php_bool(profile.allow_no_password())),
        String::new(),
        "/* Bind to the database service */".to_string(),
        server("host", &php_string(profile.host())),
        server("compress", php_bool(profile.compress())),
        server("AllowRoot", php_bool(profile.allow_root())),
        server("port", &profile.port().to_string()),
        server("ConnectType", &php_string(profile.connect_type().as_str())),
    ];

    if let Some(socket) = profile.socket() {
        lines.push(server("socket", &php_string(&socket.display().to_string())));
    }

    lines.push(server("controluser", &php_string(profile.control_user())));
    lines.push(server(
        "controlpass",
        &profile
            .control_password_file()
            .map_or_else(|| php_string(""), php_secret),
    ));

    lines.push("/* Storage for advanced features */".to_string());
    let metadata = profile.metadata();
    lines.push(server("pmadb", &php_string(metadata.database())));
    for (feature, table) in metadata.iter() {
        lines.push(server(feature.config_key(), &php_string(table)));
    }

    lines.push(server("verbose_check", php_bool(profile.verbose_check())));
    lines.push(server(
        "AllowArbitraryServer",
        php_bool(profile.allow_arbitrary_server()),
    ));

    let interface = profile.interface();
    if interface.hide_db.is_some()
        || interface.default_tab_database.is_some()
        || interface.default_tab_table.is_some()
    {
        lines.push(String::new());
        lines.push("/* Navigation */".to_string());
    }
    if let Some(hide_db) = &interface.hide_db {
        lines.push(server("hide_db", &php_string(hide_db)));
    }
    if let Some(tab) = &interface.default_tab_database {
        lines.push(format!("$cfg['DefaultTabDatabase'] = {};", php_string(tab)));
    }
    if let Some(tab) = &interface.default_tab_table {
        lines.push(format!("$cfg['DefaultTabTable'] = {};", php_string(tab)));
    }

    lines.push(String::new());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Config, ConnectType, Secret};
    use std::path::PathBuf;

    fn render(config: &Config) -> String {
        render_php(&ServerProfile::new(config, Secret::new("do-not-print"), None))
    }

    #[test]
    fn test_default_profile_matches_container_config() {
        let php = render(&Config::default());

        assert!(php.starts_with("<?php\n"));
        assert!(php.contains("$cfg['Servers'][$i]['auth_type'] = 'config';"));
        assert!(php.contains("$cfg['Servers'][$i]['user'] = 'root';"));
        assert!(php.contains(
            "$cfg['Servers'][$i]['password'] = trim(file_get_contents('/run/secrets/db_root_password'));"
        ));
        assert!(php.contains("$cfg['Servers'][$i]['AllowNoPassword'] = true;"));
        assert!(php.contains("$cfg['Servers'][$i]['host'] = 'db';"));
        assert!(php.contains("$cfg['Servers'][$i]['compress'] = false;"));
        assert!(php.contains("$cfg['Servers'][$i]['port'] = 3306;"));
        assert!(php.contains("$cfg['Servers'][$i]['ConnectType'] = 'tcp';"));
        assert!(php.contains("$cfg['Servers'][$i]['controluser'] = '';"));
        assert!(php.contains("$cfg['Servers'][$i]['controlpass'] = '';"));
        assert!(php.contains("$cfg['Servers'][$i]['pmadb'] = 'phpmyadmin';"));
        assert!(php.contains("$cfg['Servers'][$i]['bookmarktable'] = 'pma__bookmarks';"));
        assert!(php.contains("$cfg['Servers'][$i]['usergroups'] = 'pma__usergroups';"));
        assert!(php.contains("$cfg['Servers'][$i]['verbose_check'] = true;"));
        assert!(php.contains("$cfg['Servers'][$i]['AllowArbitraryServer'] = true;"));
        assert!(!php.contains("socket"));
        assert!(!php.contains("hide_db"));
    }

    #[test]
    fn test_password_value_is_never_written() {
        let php = render(&Config::default());
        assert!(!php.contains("do-not-print"));
    }

    #[test]
    fn test_every_metadata_table_is_rendered() {
        let php = render(&Config::default());
        let tables = php.matches("'pma__").count();
        assert_eq!(tables, 20);
    }

    #[test]
    fn test_strings_are_escaped() {
        let mut config = Config::default();
        config.server.user = "o'neil\\admin".to_string();
        let php = render(&config);
        assert!(php.contains(r"$cfg['Servers'][$i]['user'] = 'o\'neil\\admin';"));
    }

    #[test]
    fn test_optional_settings() {
        let mut config = Config::default();
        config.server.connect_type = ConnectType::Socket;
        config.server.socket = Some(PathBuf::from("/run/mysqld/mysqld.sock"));
        config.server.control_user = "pma".to_string();
        config.server.control_password_file = Some(PathBuf::from("/run/secrets/pma_password"));
        config.interface.hide_db = Some("^(information_schema|mysql)$".to_string());
        config.interface.default_tab_database = Some("structure".to_string());
        config.interface.default_tab_table = Some("browse".to_string());

        let profile = ServerProfile::new(
            &config,
            Secret::new("x"),
            Some(Secret::new("control-secret")),
        );
        let php = render_php(&profile);

        assert!(php.contains("$cfg['Servers'][$i]['socket'] = '/run/mysqld/mysqld.sock';"));
        assert!(php.contains("$cfg['Servers'][$i]['controluser'] = 'pma';"));
        assert!(php.contains(
            "$cfg['Servers'][$i]['controlpass'] = trim(file_get_contents('/run/secrets/pma_password'));"
        ));
        assert!(!php.contains("control-secret"));
        assert!(php.contains("$cfg['Servers'][$i]['hide_db'] = '^(information_schema|mysql)$';"));
        assert!(php.contains("$cfg['DefaultTabDatabase'] = 'structure';"));
        assert!(php.contains("$cfg['DefaultTabTable'] = 'browse';"));
    }
}
