//! `args`: echoes the argument count and list.

use crate::command::{Command, CommandContext};
use crate::error::CommandResult;
use async_trait::async_trait;

/// Echoes the argument count and list.
pub struct Args;

#[async_trait]
impl Command for Args {
    fn name(&self) -> &'static str {
        "args"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Returns number of arguments and list of arguments")
    }

    fn usage(&self) -> Option<&'static str> {
        Some("<arg> [more args...]")
    }

    fn args_required(&self) -> bool {
        true
    }

    async fn execute(&self, ctx: &CommandContext<'_>, args: &[String]) -> CommandResult {
        ctx.send(&format!("Arguments ({}): {}", args.len(), args.join(", ")))
            .await
    }
}
