//! Commands shipped with the bot.

mod args;
mod help;
mod ping;
mod server;
mod uptime;
mod user_info;

pub use args::Args;
pub use help::Help;
pub use ping::Ping;
pub use server::Server;
pub use uptime::Uptime;
pub use user_info::UserInfo;

use crate::command::Command;
use std::sync::Arc;

/// Every built-in command, in the order help lists them.
pub fn all() -> Vec<Arc<dyn Command>> {
    vec![
        Arc::new(Args),
        Arc::new(Help),
        Arc::new(Ping),
        Arc::new(Server),
        Arc::new(Uptime),
        Arc::new(UserInfo),
    ]
}

#[cfg(test)]
mod tests {
    use crate::dispatcher::{DispatchOutcome, Dispatcher};
    use crate::registry::CommandRegistry;
    use crate::testing::{direct_message, guild_message, Outbound, RecordingResponder};
    use std::time::Duration;

    fn dispatcher() -> Dispatcher {
        let registry = CommandRegistry::with_builtins().unwrap();
        Dispatcher::new("!", registry, Duration::from_secs(3))
    }

    async fn run(content: &str) -> (DispatchOutcome, Vec<Outbound>) {
        let responder = RecordingResponder::new();
        let outcome = dispatcher().dispatch(&guild_message(content), &responder).await;
        (outcome, responder.outbound())
    }

    #[tokio::test]
    async fn test_args_lists_arguments() {
        let (outcome, sent) = run("!args foo bar").await;
        assert_eq!(outcome, DispatchOutcome::Executed { command: "args" });
        assert_eq!(sent, vec![Outbound::Send("Arguments (2): foo, bar".to_string())]);
    }

    #[tokio::test]
    async fn test_ping_pongs() {
        let (_, sent) = run("!ping").await;
        assert_eq!(sent, vec![Outbound::Send("Pong.".to_string())]);
    }

    #[tokio::test]
    async fn test_help_overview_lists_all_commands() {
        let (_, sent) = run("!help").await;
        let text = sent[0].content();
        assert!(text.starts_with("Here's a list of all my commands:\nargs, help, ping, server, uptime, user-info"));
        assert!(text.contains("`!help [command name]`"));
    }

    #[tokio::test]
    async fn test_help_details_by_alias() {
        let (_, sent) = run("!commands whoami").await;
        assert_eq!(
            sent[0].content(),
            "**Name:** user-info\n**Aliases:** whoami\n**Description:** Display info about yourself\n**Cooldown:** 3 second(s)"
        );
    }

    #[tokio::test]
    async fn test_help_details_include_usage_and_own_cooldown() {
        let (_, sent) = run("!help ping").await;
        assert!(sent[0].content().contains("**Cooldown:** 5 second(s)"));

        let (_, sent) = run("!help args").await;
        assert!(sent[0].content().contains("**Usage:** `!args <arg> [more args...]`"));
    }

    #[tokio::test]
    async fn test_help_unknown_command() {
        let (_, sent) = run("!help nope").await;
        assert_eq!(sent, vec![Outbound::Reply("that's not a valid command!".to_string())]);
    }

    #[tokio::test]
    async fn test_server_reports_guild() {
        let (_, sent) = run("!server-info").await;
        assert_eq!(sent[0].content(), "Server name: Pod Squad\nTotal members: 42");
    }

    #[tokio::test]
    async fn test_server_refused_in_dm() {
        let responder = RecordingResponder::new();
        let outcome = dispatcher().dispatch(&direct_message("!server"), &responder).await;
        assert_eq!(outcome, DispatchOutcome::GuildOnly { command: "server" });
        assert_eq!(
            responder.outbound(),
            vec![Outbound::Reply("I can't execute that command inside DMs!".to_string())]
        );
    }

    #[tokio::test]
    async fn test_user_info() {
        let (_, sent) = run("!whoami").await;
        assert_eq!(sent[0].content(), "Your username: podder\nYour ID: 123456789");
    }

    #[tokio::test]
    async fn test_uptime() {
        let (_, sent) = run("!uptime").await;
        assert!(sent[0].content().starts_with("Uptime: "));
    }
}
