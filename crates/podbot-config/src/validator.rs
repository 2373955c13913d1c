//! Configuration validation.

use crate::defaults::MAX_COOLDOWN_SECONDS;
use crate::loader::ConfigError;
use crate::schema::Config;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting the first invalid field.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.discord.token.trim().is_empty() {
            return Err(invalid("discord.token", "Discord token cannot be empty"));
        }

        let prefix = &config.discord.prefix;
        if prefix.is_empty() {
            return Err(invalid("discord.prefix", "command prefix cannot be empty"));
        }
        if prefix.chars().any(char::is_whitespace) {
            return Err(invalid(
                "discord.prefix",
                "command prefix cannot contain whitespace",
            ));
        }

        if config.commands.default_cooldown_seconds > MAX_COOLDOWN_SECONDS {
            return Err(ConfigError::Validation {
                field: "commands.default_cooldown_seconds",
                message: format!("default cooldown cannot exceed {MAX_COOLDOWN_SECONDS} seconds"),
            });
        }

        if config.commands.cooldown_sweep_seconds == 0 {
            return Err(invalid(
                "commands.cooldown_sweep_seconds",
                "sweep interval must be at least one second",
            ));
        }

        Ok(())
    }
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigValidator::validate(self)
    }
}

fn invalid(field: &'static str, message: &str) -> ConfigError {
    ConfigError::Validation {
        field,
        message: message.to_string(),
    }
}
