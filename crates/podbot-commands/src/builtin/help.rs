//! `help`: lists commands or describes one.

use crate::command::{Command, CommandContext};
use crate::error::CommandResult;
use async_trait::async_trait;

/// Lists commands or describes one of them.
pub struct Help;

#[async_trait]
impl Command for Help {
    fn name(&self) -> &'static str {
        "help"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["commands"]
    }

    fn description(&self) -> Option<&'static str> {
        Some("List all of my commands or info about a specific command")
    }

    fn usage(&self) -> Option<&'static str> {
        Some("[command name]")
    }

    async fn execute(&self, ctx: &CommandContext<'_>, args: &[String]) -> CommandResult {
        let Some(requested) = args.first() else {
            return ctx.send(&overview(ctx)).await;
        };

        match ctx.registry.resolve(requested) {
            Some(command) => ctx.send(&details(ctx, command.as_ref())).await,
            None => ctx.reply("that's not a valid command!").await,
        }
    }
}

fn overview(ctx: &CommandContext<'_>) -> String {
    format!(
        "Here's a list of all my commands:\n{}\n\nYou can send `{}help [command name]` to get info on a specific command!",
        ctx.registry.names().join(", "),
        ctx.prefix
    )
}

fn details(ctx: &CommandContext<'_>, command: &dyn Command) -> String {
    let mut lines = vec![format!("**Name:** {}", command.name())];

    if !command.aliases().is_empty() {
        lines.push(format!("**Aliases:** {}", command.aliases().join(", ")));
    }
    if let Some(description) = command.description() {
        lines.push(format!("**Description:** {description}"));
    }
    if let Some(usage) = command.usage() {
        lines.push(format!("**Usage:** `{}{} {usage}`", ctx.prefix, command.name()));
    }
    if command.guild_only() {
        lines.push("**Server only:** yes".to_string());
    }

    let cooldown = ctx.cooldown_of(command);
    if cooldown.is_zero() {
        lines.push("**Cooldown:** none".to_string());
    } else {
        lines.push(format!("**Cooldown:** {} second(s)", cooldown.as_secs()));
    }

    lines.join("\n")
}
