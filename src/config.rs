//! Configuration module
//!
//! Reads `AppConfig` from a TOML file (default
//! `~/.config/user-admin/config.toml`); missing fields fall back to
//! defaults, so a partial or absent file is fine.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::infrastructure::DatabaseConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// SeaORM connection URL.
    pub url: String,
    /// Connection pool size.
    pub max_connections: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        let defaults = DatabaseConfig::default();
        Self {
            url: defaults.url,
            max_connections: defaults.max_connections,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error).
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// The database settings as the connection config `init_database` takes.
    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: self.database.url.clone(),
            max_connections: self.database.max_connections,
        }
    }
}

/// Default config file location: `~/.config/user-admin/config.toml`.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("user-admin")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_when_file_is_empty() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.database.url, "sqlite://./users.db?mode=rwc");
        assert_eq!(cfg.database.max_connections, 5);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [database]
            url = "sqlite://./test.db?mode=rwc"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.database.url, "sqlite://./test.db?mode=rwc");
        assert_eq!(cfg.database.max_connections, 5);
        assert_eq!(cfg.logging.level, "debug");
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[database]\nmax_connections = 1").unwrap();

        let cfg = AppConfig::load(file.path()).unwrap();
        assert_eq!(cfg.database.max_connections, 1);
    }

    #[test]
    fn load_missing_file_is_an_io_error() {
        let err = AppConfig::load(Path::new("/no/such/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
