//! Configuration schema definitions.

use podbot_common::{LogFormat, LoggingConfig};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Discord connection settings.
    pub discord: DiscordConfig,
    /// Command dispatch settings.
    pub commands: CommandsConfig,
    /// Logging settings.
    pub logging: LoggingSection,
}

/// Discord connection settings.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscordConfig {
    /// Bot token used to authenticate with the gateway.
    pub token: String,
    /// Leading string that marks a message as a command invocation.
    pub prefix: String,
}

impl fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.token.is_empty() { "<empty>" } else { "<redacted>" };
        f.debug_struct("DiscordConfig")
            .field("token", &token)
            .field("prefix", &self.prefix)
            .finish()
    }
}

/// Command dispatch settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandsConfig {
    /// Cooldown applied to commands that do not declare their own.
    pub default_cooldown_seconds: u64,
    /// How often expired cooldown entries are purged.
    pub cooldown_sweep_seconds: u64,
}

impl CommandsConfig {
    /// Default cooldown as a [`Duration`].
    pub const fn default_cooldown(&self) -> Duration {
        Duration::from_secs(self.default_cooldown_seconds)
    }

    /// Sweep interval as a [`Duration`].
    pub const fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.cooldown_sweep_seconds)
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// `EnvFilter` directive.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
    /// Optional log file; stdout when absent.
    pub file: Option<PathBuf>,
}

impl LoggingSection {
    /// Converts the section into the logging bootstrap configuration.
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.clone(),
            format: self.format,
            file_path: self.file.clone(),
            ..LoggingConfig::default()
        }
    }
}
