//! Exclusion configuration loaded from `.credsweep.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::walker::Exclusions;

/// Directory base names pruned by default.
pub const DEFAULT_EXCLUDED_DIR_NAMES: &[&str] =
    &["node_modules", ".git", "target", "dist", "build", "vendor", "__pycache__"];

/// Project-level configuration loaded from `.credsweep.toml`.
///
/// Holds the name-based exclusion sets applied during traversal. The
/// configuration is fixed for the lifetime of a scan; a missing file
/// yields the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory base names to prune entirely during traversal.
    #[serde(default = "default_excluded_dir_names")]
    pub excluded_dir_names: Vec<String>,

    /// File base names to skip in any directory.
    #[serde(default)]
    pub excluded_file_names: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            excluded_dir_names: default_excluded_dir_names(),
            excluded_file_names: Vec::new(),
        }
    }
}

fn default_excluded_dir_names() -> Vec<String> {
    DEFAULT_EXCLUDED_DIR_NAMES.iter().map(ToString::to_string).collect()
}

impl Config {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a `.credsweep.toml` file.
    ///
    /// Returns the default configuration if the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        parse_toml(path, &content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        parse_toml(Path::new("<inline>"), content)
    }

    /// Builds the exclusion set handed to the walker.
    #[must_use]
    pub fn exclusions(&self) -> Exclusions {
        Exclusions::new(self.excluded_dir_names.iter().cloned(), self.excluded_file_names.iter().cloned())
    }
}

fn parse_toml(path: &Path, content: &str) -> Result<Config, ConfigError> {
    toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Errors that can occur when reading or parsing a `.credsweep.toml`
/// configuration file. Both are fatal to the invocation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read from disk.
    #[error("failed to read config '{path}': {source}")]
    Read {
        /// Path to the config file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML.
    #[error("failed to parse config '{path}': {source}")]
    Parse {
        /// Path to the config file that could not be parsed.
        path: PathBuf,
        /// The underlying TOML parse error.
        #[source]
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn default_config_excludes_common_dependency_dirs() {
        let config = Config::new();
        assert!(config.excluded_dir_names.iter().any(|n| n == "node_modules"));
        assert!(config.excluded_dir_names.iter().any(|n| n == ".git"));
        assert!(config.excluded_file_names.is_empty());
    }

    #[test]
    fn load_returns_defaults_for_missing_file() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(&dir.path().join(".credsweep.toml")).unwrap();
        assert_eq!(config.excluded_dir_names, Config::new().excluded_dir_names);
    }

    #[test]
    fn load_reads_both_exclusion_lists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".credsweep.toml");
        fs::write(
            &path,
            r#"
excluded_dir_names = ["generated"]
excluded_file_names = ["schema.sql"]
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.excluded_dir_names, ["generated"]);
        assert_eq!(config.excluded_file_names, ["schema.sql"]);
    }

    #[test]
    fn from_toml_applies_default_for_omitted_fields() {
        let config = Config::from_toml("excluded_file_names = [\".env\"]").unwrap();

        assert_eq!(config.excluded_file_names, [".env"]);
        assert_eq!(config.excluded_dir_names, Config::new().excluded_dir_names);
    }

    #[test]
    fn from_toml_rejects_malformed_input() {
        let result = Config::from_toml("excluded_dir_names = 7");
        assert!(result.is_err());
    }

    #[test]
    fn exclusions_reflect_configured_names() {
        let config = Config::from_toml(
            r#"
excluded_dir_names = ["node_modules"]
excluded_file_names = ["package-lock.json"]
"#,
        )
        .unwrap();

        let exclusions = config.exclusions();
        assert!(exclusions.excludes_dir_name("node_modules"));
        assert!(exclusions.excludes_file_name("package-lock.json"));
        assert!(!exclusions.excludes_dir_name("src"));
    }
}
