//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use wardrobe_stylist::StylistConfig;

/// CLI configuration.
///
/// ```toml
/// [settings]
/// color = true
/// format = "table"
///
/// [stylist]
/// mock_mode = false
/// model = "gemini-2.0-flash"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Stylist settings
    #[serde(default)]
    pub stylist: StylistConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".wardrobe").join("config.toml"))
    }

    /// Load configuration, then apply environment overrides.
    ///
    /// An explicit path must exist. Without one, the default path is used if
    /// present and defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match Self::path() {
                Ok(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        config.stylist.apply_env()?;
        Ok(config)
    }

    /// Read configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert!(config.stylist.mock_mode);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[settings]
format = "json"
color = false

[stylist]
mock_mode = false
api_key = "from-file"
max_upload_files = 3
"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.settings.format, OutputFormat::Json);
        assert!(!config.settings.color);
        assert!(!config.stylist.mock_mode);
        assert_eq!(config.stylist.api_key(), Some("from-file"));
        assert_eq!(config.stylist.max_upload_files, 3);
        assert_eq!(config.stylist.max_upload_mb, 8);
    }

    #[test]
    fn test_empty_file_is_default() {
        let file = NamedTempFile::new().unwrap();
        let config = Config::from_file(file.path()).unwrap();
        assert!(config.stylist.mock_mode);
        assert!(config.settings.color);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[stylist\nmock_mode = ").unwrap();
        assert!(matches!(
            Config::from_file(file.path()),
            Err(CliError::Toml(_))
        ));
    }
}
