//! `ping`: liveness check.

use crate::command::{Command, CommandContext};
use crate::error::CommandResult;
use async_trait::async_trait;
use std::time::Duration;

/// Liveness check.
pub struct Ping;

#[async_trait]
impl Command for Ping {
    fn name(&self) -> &'static str {
        "ping"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Ping!")
    }

    fn cooldown(&self) -> Option<Duration> {
        Some(Duration::from_secs(5))
    }

    async fn execute(&self, ctx: &CommandContext<'_>, _args: &[String]) -> CommandResult {
        ctx.send("Pong.").await
    }
}
