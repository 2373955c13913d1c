//! `uptime`: time since the bot started.

use crate::command::{Command, CommandContext};
use crate::error::CommandResult;
use async_trait::async_trait;
use podbot_common::format_duration;

/// Shows how long the bot has been running.
pub struct Uptime;

#[async_trait]
impl Command for Uptime {
    fn name(&self) -> &'static str {
        "uptime"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Shows bot uptime")
    }

    async fn execute(&self, ctx: &CommandContext<'_>, _args: &[String]) -> CommandResult {
        ctx.send(&format!("Uptime: {}", format_duration(ctx.uptime())))
            .await
    }
}
