use crate::error::{BookshelfError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".bookshelf.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookshelfConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    2000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Daily-rotated JSON log file, in addition to stderr
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    #[serde(default)]
    pub verbose: bool,
}

impl BookshelfConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the nearest
    /// `.bookshelf.toml` at or above `start_path` is used, falling back to
    /// defaults when there is none.
    pub fn load(explicit: Option<&Path>, start_path: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(BookshelfError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Self::from_file(path);
        }

        match Self::find_config_file(start_path) {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: BookshelfConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = BookshelfConfig::load(None, temp_dir.path()).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 2000);
        assert!(config.logging.file.is_none());
        assert!(!config.logging.verbose);
    }

    #[test]
    fn test_finds_config_in_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[server]\nport = 4100\n",
        )
        .unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = BookshelfConfig::load(None, &nested).unwrap();
        assert_eq!(config.server.port, 4100);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");

        let err = BookshelfConfig::load(Some(&missing), temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_explicit_path_with_logging_table() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");
        std::fs::write(
            &path,
            "[server]\nhost = \"0.0.0.0\"\n\n[logging]\nfile = \"logs/bookshelf.log\"\nverbose = true\n",
        )
        .unwrap();

        let config = BookshelfConfig::load(Some(&path), temp_dir.path()).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 2000);
        assert_eq!(
            config.logging.file.as_deref(),
            Some(Path::new("logs/bookshelf.log"))
        );
        assert!(config.logging.verbose);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "[server\nport = ").unwrap();

        let result = BookshelfConfig::load(None, temp_dir.path());
        assert!(matches!(result, Err(BookshelfError::Toml(_))));
    }
}
