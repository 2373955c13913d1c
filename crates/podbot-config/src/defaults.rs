//! Default values.

use crate::schema::{CommandsConfig, DiscordConfig, LoggingSection};
use podbot_common::LogFormat;

/// Prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "!";

/// Cooldown in seconds for commands that do not declare one.
pub const DEFAULT_COOLDOWN_SECONDS: u64 = 3;

/// Longest default cooldown accepted, one day.
pub const MAX_COOLDOWN_SECONDS: u64 = 86_400;

/// Interval in seconds between cooldown sweeps.
pub const DEFAULT_SWEEP_SECONDS: u64 = 60;

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            default_cooldown_seconds: DEFAULT_COOLDOWN_SECONDS,
            cooldown_sweep_seconds: DEFAULT_SWEEP_SECONDS,
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            file: None,
        }
    }
}
