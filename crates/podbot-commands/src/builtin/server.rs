//! `server`: name and member count of the current guild.

use crate::command::{Command, CommandContext};
use crate::error::CommandResult;
use async_trait::async_trait;

/// Shows the name and size of the current guild.
pub struct Server;

#[async_trait]
impl Command for Server {
    fn name(&self) -> &'static str {
        "server"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["server-info"]
    }

    fn description(&self) -> Option<&'static str> {
        Some("Display info about this server")
    }

    fn guild_only(&self) -> bool {
        true
    }

    async fn execute(&self, ctx: &CommandContext<'_>, _args: &[String]) -> CommandResult {
        match &ctx.message.guild {
            Some(guild) => {
                ctx.send(&format!(
                    "Server name: {}\nTotal members: {}",
                    guild.name, guild.member_count
                ))
                .await
            }
            // Guild not in cache yet, e.g. right after startup.
            None => ctx.send("Server details are not available yet, try again shortly.").await,
        }
    }
}
