//! The command contract and the context handed to each invocation.

use crate::error::{CommandError, CommandResult};
use crate::message::{Author, IncomingMessage};
use crate::registry::CommandRegistry;
use async_trait::async_trait;
use std::time::{Duration, Instant};

/// Outbound surface for a single inbound message.
///
/// Implemented over serenity in the bot crate and by a recording fake in
/// tests.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Posts `content` into the channel the message came from.
    async fn send(&self, content: &str) -> Result<(), CommandError>;

    /// Posts `content` addressed to the message author.
    async fn reply(&self, content: &str) -> Result<(), CommandError>;
}

/// A prefix command.
///
/// Only [`name`](Command::name) and [`execute`](Command::execute) are
/// required; the remaining metadata has defaults matching a plain command
/// usable anywhere with the configured default cooldown.
///
/// ```ignore
/// pub struct Beep;
///
/// #[async_trait]
/// impl Command for Beep {
///     fn name(&self) -> &'static str {
///         "beep"
///     }
///
///     async fn execute(&self, ctx: &CommandContext<'_>, _args: &[String]) -> CommandResult {
///         ctx.send("Boop.").await
///     }
/// }
/// ```
#[async_trait]
pub trait Command: Send + Sync {
    /// Unique name the command is invoked by.
    fn name(&self) -> &'static str;

    /// Alternative names.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// One line description for help output.
    fn description(&self) -> Option<&'static str> {
        None
    }

    /// Argument synopsis, e.g. `<user> <role>`.
    fn usage(&self) -> Option<&'static str> {
        None
    }

    /// Refuse the command in direct messages.
    fn guild_only(&self) -> bool {
        false
    }

    /// Require at least one argument.
    fn args_required(&self) -> bool {
        false
    }

    /// Per-user cooldown. `None` or a zero duration uses the configured
    /// default.
    fn cooldown(&self) -> Option<Duration> {
        None
    }

    /// Runs the command.
    async fn execute(&self, ctx: &CommandContext<'_>, args: &[String]) -> CommandResult;
}

/// Everything a command can see while it runs.
pub struct CommandContext<'a> {
    /// The message that triggered the command.
    pub message: &'a IncomingMessage,
    /// Where replies go.
    pub responder: &'a dyn Responder,
    /// All registered commands.
    pub registry: &'a CommandRegistry,
    /// Configured command prefix.
    pub prefix: &'a str,
    /// Cooldown used by commands without their own.
    pub default_cooldown: Duration,
    /// When the bot process started.
    pub started_at: Instant,
}

impl CommandContext<'_> {
    /// Author of the triggering message.
    pub fn author(&self) -> &Author {
        &self.message.author
    }

    /// Posts into the originating channel.
    pub async fn send(&self, content: &str) -> CommandResult {
        self.responder.send(content).await
    }

    /// Replies to the author.
    pub async fn reply(&self, content: &str) -> CommandResult {
        self.responder.reply(content).await
    }

    /// Effective cooldown of `command`.
    pub fn cooldown_of(&self, command: &dyn Command) -> Duration {
        effective_cooldown(command, self.default_cooldown)
    }

    /// Time since the bot started.
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

/// Cooldown window applied to `command`, falling back to `default` when the
/// command declares none or zero.
pub fn effective_cooldown(command: &dyn Command, default: Duration) -> Duration {
    command
        .cooldown()
        .filter(|window| !window.is_zero())
        .unwrap_or(default)
}
