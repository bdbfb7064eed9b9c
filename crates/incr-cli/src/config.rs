use std::path::{Path, PathBuf};

use incr::Overflow;
use serde::{Deserialize, Serialize};

const CONFIG_FILENAMES: [&str; 2] = ["incr.toml", ".incr.toml"];

/// Settings for the `incr` tool. Fields missing from a file keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// What to do when a value is already `i32::MAX`
    pub overflow: Overflow,

    /// How many times each value is incremented
    pub times: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            overflow: Overflow::Checked,
            times: 1,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {e}", path.display())))?;
        toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))
    }

    /// Find and load configuration from the standard locations, falling back
    /// to the defaults when none exists.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading configuration");
                Self::from_file(&path)
            }
            None => {
                tracing::debug!("no configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// The first configuration file found walking up from the current
    /// directory, then under `$HOME/.config/incr/`.
    pub fn find() -> Option<PathBuf> {
        if let Ok(current_dir) = std::env::current_dir() {
            if let Some(path) = find_in_ancestors(&current_dir) {
                return Some(path);
            }
        }

        std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join(".config/incr/incr.toml"))
            .filter(|path| path.is_file())
    }

    /// Generate a default configuration file content
    pub fn default_toml() -> String {
        toml::to_string_pretty(&Self::default()).unwrap_or_default()
    }
}

fn find_in_ancestors(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_FILENAMES
            .iter()
            .map(|filename| dir.join(filename))
            .find(|path| path.is_file())
    })
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_toml_round_trips() {
        let text = Config::default_toml();
        assert!(text.contains("overflow = \"checked\""));
        assert!(text.contains("times = 1"));
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: Config = toml::from_str("times = 3").unwrap();
        assert_eq!(
            config,
            Config {
                overflow: Overflow::Checked,
                times: 3,
            }
        );
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("incr.toml");
        std::fs::write(&path, "overflow = \"saturating\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.overflow, Overflow::Saturating);
        assert_eq!(config.times, 1);
    }

    #[test]
    fn test_from_file_reports_bad_policy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("incr.toml");
        std::fs::write(&path, "overflow = \"modular\"\n").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }

    #[test]
    fn test_find_in_ancestors() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/c");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("a/.incr.toml"), "times = 2\n").unwrap();

        let found = find_in_ancestors(&nested).unwrap();
        assert_eq!(found, dir.path().join("a/.incr.toml"));
    }

    #[test]
    fn test_plain_name_wins_in_same_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("incr.toml"), "").unwrap();
        std::fs::write(dir.path().join(".incr.toml"), "").unwrap();

        let found = find_in_ancestors(dir.path()).unwrap();
        assert_eq!(found, dir.path().join("incr.toml"));
    }
}
