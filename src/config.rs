use crate::error::{BookshelfError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".bookshelf.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookshelfConfig {
    #[serde(default)]
    pub schema: SchemaSettings,

    #[serde(default)]
    pub log: LogSettings,
}

/// Execution limits applied when the schema is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaSettings {
    /// Maximum selection depth of a query document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_depth: Option<usize>,

    /// Maximum complexity score of a query document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_complexity: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogSettings {
    /// Optional log file, rolled daily, written as JSON lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl BookshelfConfig {
    /// Loads the configuration for a command invocation.
    ///
    /// An explicit path must exist. Without one, the nearest `.bookshelf.toml`
    /// at or above `start_path` is used, falling back to defaults.
    pub fn load(explicit: Option<&Path>, start_path: &Path) -> Result<(Self, Option<PathBuf>)> {
        let config_path = match explicit {
            Some(path) if path.exists() => Some(path.to_path_buf()),
            Some(path) => {
                return Err(BookshelfError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            None => Self::find_config_file(start_path),
        };

        match config_path {
            Some(path) => {
                let config = Self::from_file(&path)?;
                Ok((config, Some(path)))
            }
            None => Ok((Self::default(), None)),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
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

    /// Resolves the configured log file relative to the directory holding the config.
    pub fn log_file(&self, config_path: Option<&Path>) -> Option<PathBuf> {
        let file = self.log.file.as_ref()?;
        let file = PathBuf::from(file);
        if file.is_absolute() {
            return Some(file);
        }
        match config_path.and_then(Path::parent) {
            Some(dir) => Some(dir.join(file)),
            None => Some(file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let (config, path) = BookshelfConfig::load(None, temp_dir.path()).unwrap();

        assert_eq!(config, BookshelfConfig::default());
        assert!(path.is_none());
        assert!(config.schema.limit_depth.is_none());
        assert!(config.schema.limit_complexity.is_none());
    }

    #[test]
    fn test_finds_config_in_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[schema]\nlimit_depth = 4\n",
        )
        .unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (config, path) = BookshelfConfig::load(None, &nested).unwrap();

        assert_eq!(config.schema.limit_depth, Some(4));
        assert_eq!(path.unwrap(), temp_dir.path().join(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");

        let err = BookshelfConfig::load(Some(&missing), temp_dir.path()).unwrap_err();
        assert!(matches!(err, BookshelfError::Config(_)));
    }

    #[test]
    fn test_parses_all_keys() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");
        std::fs::write(
            &path,
            "[schema]\nlimit_depth = 8\nlimit_complexity = 64\n\n[log]\nfile = \"logs/bookshelf.log\"\n",
        )
        .unwrap();

        let (config, _) = BookshelfConfig::load(Some(&path), temp_dir.path()).unwrap();

        assert_eq!(config.schema.limit_depth, Some(8));
        assert_eq!(config.schema.limit_complexity, Some(64));
        assert_eq!(
            config.log_file(Some(&path)),
            Some(temp_dir.path().join("logs/bookshelf.log"))
        );
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[schema\nlimit_depth = ").unwrap();

        let err = BookshelfConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, BookshelfError::Toml(_)));
    }
}
