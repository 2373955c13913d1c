//! # podbot commands
//!
//! Prefix command handling for podbot: the command contract, the registry
//! built at startup, the message tokenizer, per-user cooldowns, and the
//! dispatcher that ties them together. Nothing here talks to Discord
//! directly; replies go through the [`Responder`] trait.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod builtin;
pub mod command;
pub mod cooldown;
pub mod dispatcher;
pub mod error;
pub mod message;
pub mod parser;
pub mod registry;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use command::{Command, CommandContext, Responder};
pub use cooldown::{CooldownError, CooldownTracker};
pub use dispatcher::{DispatchOutcome, Dispatcher, IgnoreReason};
pub use error::{CommandError, CommandResult, RegistryError};
pub use message::{Author, ChannelKind, GuildInfo, IncomingMessage};
pub use parser::{parse, ParsedCommand};
pub use registry::CommandRegistry;
