//! Configuration management

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
///
/// Every field is optional; CLI flags (and their env vars) take
/// precedence over the file, and built-in defaults apply last.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Path to the SQLite database file
    #[serde(default)]
    pub database: Option<PathBuf>,

    /// Table name prefix (e.g. "wp_")
    #[serde(default)]
    pub table_prefix: Option<String>,
}

impl Config {
    /// Load config from default path
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_yaml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to default path
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert!(config.database.is_none());
        assert!(config.table_prefix.is_none());
    }

    #[test]
    fn test_config_parses_fields() {
        let config: Config = serde_yaml::from_str(
            "database: /var/www/site/wp.sqlite\ntable_prefix: site_\n",
        )
        .unwrap();
        assert_eq!(
            config.database,
            Some(PathBuf::from("/var/www/site/wp.sqlite"))
        );
        assert_eq!(config.table_prefix.as_deref(), Some("site_"));
    }
}
