//! Application-wide error types using thiserror.

use podbot_commands::RegistryError;
use podbot_common::PodError;
use podbot_config::ConfigError;
use poise::serenity_prelude as serenity;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum BotError {
    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Discord/Serenity error.
    #[error("Discord error: {0}")]
    Discord(#[from] serenity::Error),

    /// The startup command list could not be registered.
    #[error("Command registration error: {0}")]
    Registry(#[from] RegistryError),

    /// The bot token failed the pre-connect sanity checks.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Error raised by a shared workspace component.
    #[error(transparent)]
    Common(#[from] PodError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the bot application.
pub type BotResult<T> = Result<T, BotError>;

/// Error type carried through the poise framework.
pub type Error = Box<dyn std::error::Error + Send + Sync>;
