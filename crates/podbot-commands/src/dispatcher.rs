//! Routes inbound messages to registered commands.

use crate::command::{effective_cooldown, Command, CommandContext, Responder};
use crate::cooldown::CooldownTracker;
use crate::message::IncomingMessage;
use crate::parser::parse;
use crate::registry::CommandRegistry;
use futures::FutureExt;
use podbot_common::{panic_message, PodError};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, warn};

/// Reply sent when a guild-only command is used in a direct message.
pub const GUILD_ONLY_NOTICE: &str = "I can't execute that command inside DMs!";

/// Reply sent when a command fails.
pub const EXECUTION_FAILED_NOTICE: &str = "there was an error trying to execute that command!";

/// Why a message was not treated as a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Sent by a bot account.
    BotAuthor,
    /// Does not start with the prefix.
    NoPrefix,
    /// Only the prefix, no command name.
    EmptyCommand,
}

/// What the dispatcher did with a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Not a command invocation.
    Ignored(IgnoreReason),
    /// Prefixed, but no command has this name or alias.
    UnknownCommand(String),
    /// Guild-only command used in a direct message.
    GuildOnly {
        /// Command name.
        command: &'static str,
    },
    /// Command needs arguments and got none.
    MissingArguments {
        /// Command name.
        command: &'static str,
    },
    /// The user is still on cooldown.
    CoolingDown {
        /// Command name.
        command: &'static str,
        /// Time left.
        remaining: Duration,
    },
    /// The command ran to completion.
    Executed {
        /// Command name.
        command: &'static str,
    },
    /// The command returned an error or panicked.
    Failed {
        /// Command name.
        command: &'static str,
    },
}

/// Prefix command dispatcher.
#[derive(Debug)]
pub struct Dispatcher {
    prefix: String,
    registry: Arc<CommandRegistry>,
    cooldowns: Arc<CooldownTracker>,
    default_cooldown: Duration,
    started_at: Instant,
}

impl Dispatcher {
    /// Creates a dispatcher over `registry`.
    pub fn new(prefix: impl Into<String>, registry: CommandRegistry, default_cooldown: Duration) -> Self {
        Self {
            prefix: prefix.into(),
            registry: Arc::new(registry),
            cooldowns: Arc::new(CooldownTracker::new()),
            default_cooldown,
            started_at: Instant::now(),
        }
    }

    /// Command prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Registered commands.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Cooldown state, shared with the sweeper task.
    pub fn cooldowns(&self) -> &Arc<CooldownTracker> {
        &self.cooldowns
    }

    /// Handles one inbound message.
    pub async fn dispatch(&self, message: &IncomingMessage, responder: &dyn Responder) -> DispatchOutcome {
        if message.author.bot {
            return DispatchOutcome::Ignored(IgnoreReason::BotAuthor);
        }
        if !message.content.starts_with(&self.prefix) {
            return DispatchOutcome::Ignored(IgnoreReason::NoPrefix);
        }
        let Some(parsed) = parse(&message.content, &self.prefix) else {
            return DispatchOutcome::Ignored(IgnoreReason::EmptyCommand);
        };
        let Some(command) = self.registry.resolve(&parsed.name) else {
            debug!("Unknown command '{}' from user {}", parsed.name, message.author.id);
            return DispatchOutcome::UnknownCommand(parsed.name);
        };
        let name = command.name();

        if command.guild_only() && message.is_direct() {
            notify(responder.reply(GUILD_ONLY_NOTICE).await, name);
            return DispatchOutcome::GuildOnly { command: name };
        }

        if command.args_required() && parsed.args.is_empty() {
            let notice = missing_arguments_notice(&self.prefix, command.as_ref(), &message.author.mention());
            notify(responder.send(&notice).await, name);
            return DispatchOutcome::MissingArguments { command: name };
        }

        let window = effective_cooldown(command.as_ref(), self.default_cooldown);
        if let Err(cooldown) = self.cooldowns.check_and_record(name, message.author.id, window) {
            let remaining = cooldown.remaining();
            debug!("{}", cooldown);
            notify(responder.reply(&cooldown_notice(name, remaining)).await, name);
            return DispatchOutcome::CoolingDown { command: name, remaining };
        }

        debug!(
            "Executing '{}' for user {} with {} argument(s)",
            name,
            message.author.id,
            parsed.args.len()
        );
        let ctx = CommandContext {
            message,
            responder,
            registry: &self.registry,
            prefix: &self.prefix,
            default_cooldown: self.default_cooldown,
            started_at: self.started_at,
        };

        let failure = match AssertUnwindSafe(command.execute(&ctx, &parsed.args))
            .catch_unwind()
            .await
        {
            Ok(Ok(())) => None,
            Ok(Err(err)) => Some(err.to_string()),
            Err(panic) => Some(format!("panicked: {}", panic_message(panic.as_ref()))),
        };

        match failure {
            None => DispatchOutcome::Executed { command: name },
            Some(reason) => {
                error!("{}", PodError::command(name, reason));
                notify(responder.reply(EXECUTION_FAILED_NOTICE).await, name);
                DispatchOutcome::Failed { command: name }
            }
        }
    }
}

/// Reminder sent when a command that needs arguments got none.
pub fn missing_arguments_notice(prefix: &str, command: &dyn Command, mention: &str) -> String {
    let mut notice = format!("You didn't provide any arguments, {mention}!");
    if let Some(usage) = command.usage() {
        notice.push_str(&format!(
            "\nThe proper usage would be: `{prefix}{} {usage}`",
            command.name()
        ));
    }
    notice
}

/// Reply sent while a cooldown is running.
pub fn cooldown_notice(command: &str, remaining: Duration) -> String {
    format!(
        "please wait {:.1} more second(s) before reusing the `{command}` command.",
        remaining.as_secs_f64()
    )
}

fn notify(result: crate::error::CommandResult, command: &str) {
    if let Err(err) = result {
        warn!("Could not deliver notice for '{}': {}", command, err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::Args;
    use crate::error::CommandResult;
    use crate::testing::{guild_message, Outbound, RecordingResponder};
    use async_trait::async_trait;

    struct ZeroCooldown;

    #[async_trait]
    impl Command for ZeroCooldown {
        fn name(&self) -> &'static str {
            "zero"
        }

        fn cooldown(&self) -> Option<Duration> {
            Some(Duration::ZERO)
        }

        async fn execute(&self, ctx: &CommandContext<'_>, _args: &[String]) -> CommandResult {
            ctx.send("done").await
        }
    }

    #[test]
    fn test_cooldown_notice_format() {
        assert_eq!(
            cooldown_notice("ping", Duration::from_millis(1_840)),
            "please wait 1.8 more second(s) before reusing the `ping` command."
        );
        assert_eq!(
            cooldown_notice("ping", Duration::from_millis(50)),
            "please wait 0.1 more second(s) before reusing the `ping` command."
        );
    }

    #[test]
    fn test_missing_arguments_notice_includes_usage() {
        let notice = missing_arguments_notice("!", &Args, "<@1>");
        assert_eq!(
            notice,
            "You didn't provide any arguments, <@1>!\nThe proper usage would be: `!args <arg> [more args...]`"
        );
    }

    #[tokio::test]
    async fn test_zero_command_cooldown_uses_default() {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(ZeroCooldown)).unwrap();
        let dispatcher = Dispatcher::new("!", registry, Duration::from_secs(3));
        let responder = RecordingResponder::new();

        let first = dispatcher.dispatch(&guild_message("!zero"), &responder).await;
        let second = dispatcher.dispatch(&guild_message("!zero"), &responder).await;

        assert_eq!(first, DispatchOutcome::Executed { command: "zero" });
        assert!(matches!(second, DispatchOutcome::CoolingDown { command: "zero", .. }));
        match responder.last() {
            Some(Outbound::Reply(text)) => {
                assert!(text.ends_with("before reusing the `zero` command."));
            }
            other => panic!("expected cooldown reply, got {other:?}"),
        }
    }
}
