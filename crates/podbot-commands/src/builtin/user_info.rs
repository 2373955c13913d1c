//! `user-info`: the author's username and id.

use crate::command::{Command, CommandContext};
use crate::error::CommandResult;
use async_trait::async_trait;

/// Shows the caller's username and id.
pub struct UserInfo;

#[async_trait]
impl Command for UserInfo {
    fn name(&self) -> &'static str {
        "user-info"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["whoami"]
    }

    fn description(&self) -> Option<&'static str> {
        Some("Display info about yourself")
    }

    async fn execute(&self, ctx: &CommandContext<'_>, _args: &[String]) -> CommandResult {
        let author = ctx.author();
        ctx.send(&format!(
            "Your username: {}\nYour ID: {}",
            author.username, author.id
        ))
        .await
    }
}
