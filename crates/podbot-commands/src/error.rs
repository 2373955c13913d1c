//! Command and registry error types.

use podbot_common::PodError;
use thiserror::Error;

/// Result type returned by command handlers.
pub type CommandResult = Result<(), CommandError>;

/// Errors raised while executing a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The reply could not be delivered to Discord.
    #[error("Failed to deliver message: {0}")]
    Delivery(String),

    /// The user supplied an argument the command cannot use.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The command itself failed.
    #[error("{0}")]
    Execution(String),
}

/// Errors raised while building the command registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A command was registered without a name.
    #[error("Command name cannot be empty")]
    EmptyName,

    /// The command name is already taken by a name or alias.
    #[error("Command name '{0}' is already registered")]
    DuplicateName(String),

    /// The alias is already taken by a name or alias.
    #[error("Alias '{alias}' of command '{command}' is already registered")]
    DuplicateAlias {
        /// Conflicting alias.
        alias: String,
        /// Command that declared it.
        command: String,
    },
}

impl From<RegistryError> for PodError {
    fn from(err: RegistryError) -> Self {
        PodError::Registry(err.to_string())
    }
}
