//! Configuration loading from files and environment variables.

use crate::schema::Config;
use podbot_common::PodError;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_VAR: &str = "PODBOT_CONFIG_PATH";

/// Files probed, in order, when no path is given.
pub const DEFAULT_CONFIG_FILES: [&str; 3] = ["config.yaml", "config.yml", "config.json"];

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading the configuration file.
    #[error("Failed to read configuration file '{path}': {source}")]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error.
    #[error("Failed to parse YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error.
    #[error("Failed to parse JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// File extension is neither YAML nor JSON.
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(PathBuf),

    /// Environment variable parsing error.
    #[error("Failed to parse environment variable '{var}': {message}")]
    EnvParse {
        /// Variable name.
        var: &'static str,
        /// Parser message.
        message: String,
    },

    /// A field failed validation.
    #[error("Invalid configuration value for '{field}': {message}")]
    Validation {
        /// Dotted path of the offending field.
        field: &'static str,
        /// What is wrong with it.
        message: String,
    },
}

impl From<ConfigError> for PodError {
    fn from(err: ConfigError) -> Self {
        PodError::config_with_source(err.to_string(), err)
    }
}

/// Configuration loader for the application.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from `path` when given, otherwise from
    /// `PODBOT_CONFIG_PATH` or the first default file in the working
    /// directory, falling back to built-in defaults. Environment overrides
    /// are applied and the result is validated.
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        Self::load_with(path, Path::new("."), |key| env::var(key).ok())
    }

    /// [`load`](Self::load) with default files probed under `search_dir`
    /// and variables read through `lookup`.
    pub fn load_with<F>(path: Option<&Path>, search_dir: &Path, lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let explicit = path
            .map(Path::to_path_buf)
            .or_else(|| lookup(CONFIG_PATH_VAR).map(PathBuf::from));

        let located = explicit.or_else(|| {
            DEFAULT_CONFIG_FILES
                .iter()
                .map(|name| search_dir.join(name))
                .find(|candidate| candidate.exists())
        });

        let mut config = match located {
            Some(file) => {
                info!("Loading configuration from {}", file.display());
                Self::parse_file(&file)?
            }
            None => {
                info!("No configuration file found, using defaults");
                Config::default()
            }
        };

        Self::apply_overrides_from(&mut config, lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a specific file with environment overrides.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        Self::load(Some(path.as_ref()))
    }

    /// Parses a configuration file without overrides or validation.
    pub fn parse_file(path: &Path) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Ok(serde_yaml::from_str(&content)?),
            Some("json") => Ok(serde_json::from_str(&content)?),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Applies overrides from the process environment.
    pub fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        Self::apply_overrides_from(config, |key| env::var(key).ok())
    }

    /// Applies overrides from an arbitrary variable lookup.
    pub fn apply_overrides_from<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup("DISCORD_TOKEN") {
            debug!("Discord token taken from environment");
            config.discord.token = token;
        }

        if let Some(prefix) = lookup("PODBOT_PREFIX") {
            config.discord.prefix = prefix;
        }

        if let Some(cooldown) = lookup("PODBOT_DEFAULT_COOLDOWN") {
            config.commands.default_cooldown_seconds =
                cooldown.trim().parse().map_err(|e: std::num::ParseIntError| {
                    ConfigError::EnvParse {
                        var: "PODBOT_DEFAULT_COOLDOWN",
                        message: e.to_string(),
                    }
                })?;
        }

        if let Some(level) = lookup("PODBOT_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_env_overrides_apply() {
        let mut config = Config::default();
        let lookup = lookup_from(&[
            ("DISCORD_TOKEN", "env.token"),
            ("PODBOT_PREFIX", "?"),
            ("PODBOT_DEFAULT_COOLDOWN", "10"),
            ("PODBOT_LOG_LEVEL", "debug"),
        ]);

        ConfigLoader::apply_overrides_from(&mut config, lookup).unwrap();

        assert_eq!(config.discord.token, "env.token");
        assert_eq!(config.discord.prefix, "?");
        assert_eq!(config.commands.default_cooldown_seconds, 10);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_bad_cooldown_override() {
        let mut config = Config::default();
        let lookup = lookup_from(&[("PODBOT_DEFAULT_COOLDOWN", "soon")]);

        let err = ConfigLoader::apply_overrides_from(&mut config, lookup).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::EnvParse { var: "PODBOT_DEFAULT_COOLDOWN", .. }
        ));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "token = nope").unwrap();

        let err = ConfigLoader::parse_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = ConfigLoader::parse_file(Path::new("does/not/exist.yaml")).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.yaml"));
    }

    #[test]
    fn test_config_error_converts_to_pod_error() {
        let err: PodError = ConfigError::UnsupportedFormat(PathBuf::from("x.ini")).into();
        assert!(err.is_config());
    }
}
