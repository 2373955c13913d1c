//! End-to-end dispatch tests: configuration through the bot's dispatcher,
//! with a recording responder standing in for Discord.

use async_trait::async_trait;
use podbot::PodBot;
use podbot_commands::testing::{
    bot_message, direct_message, guild_message, FailingResponder, Outbound, RecordingResponder,
};
use podbot_commands::{
    Command, CommandContext, CommandError, CommandRegistry, CommandResult, DispatchOutcome,
    Dispatcher, IgnoreReason,
};
use podbot_config::Config;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Records the arguments of every invocation.
#[derive(Default)]
struct Echo {
    calls: Arc<Mutex<Vec<Vec<String>>>>,
}

#[async_trait]
impl Command for Echo {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["say"]
    }

    fn usage(&self) -> Option<&'static str> {
        Some("<text>")
    }

    fn args_required(&self) -> bool {
        true
    }

    fn cooldown(&self) -> Option<Duration> {
        Some(Duration::from_millis(200))
    }

    async fn execute(&self, ctx: &CommandContext<'_>, args: &[String]) -> CommandResult {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(args.to_vec());
        }
        ctx.send(&args.join(" ")).await
    }
}

struct Broken;

#[async_trait]
impl Command for Broken {
    fn name(&self) -> &'static str {
        "broken"
    }

    async fn execute(&self, _ctx: &CommandContext<'_>, _args: &[String]) -> CommandResult {
        Err(CommandError::Execution("backend unreachable".to_string()))
    }
}

struct Explodes;

#[async_trait]
impl Command for Explodes {
    fn name(&self) -> &'static str {
        "explode"
    }

    async fn execute(&self, _ctx: &CommandContext<'_>, _args: &[String]) -> CommandResult {
        panic!("boom");
    }
}

fn custom_dispatcher() -> (Dispatcher, Arc<Mutex<Vec<Vec<String>>>>) {
    let echo = Echo::default();
    let calls = Arc::clone(&echo.calls);
    let mut registry = CommandRegistry::new();
    registry.register(Arc::new(echo)).unwrap();
    registry.register(Arc::new(Broken)).unwrap();
    registry.register(Arc::new(Explodes)).unwrap();
    (Dispatcher::new("!", registry, Duration::from_secs(3)), calls)
}

fn recorded_calls(calls: &Arc<Mutex<Vec<Vec<String>>>>) -> Vec<Vec<String>> {
    calls.lock().unwrap().clone()
}

#[tokio::test]
async fn test_args_example_through_configured_bot() {
    let bot = PodBot::from_config(Config::default()).unwrap();
    let responder = RecordingResponder::new();

    let outcome = bot
        .dispatcher()
        .dispatch(&guild_message("!args foo bar"), &responder)
        .await;

    assert_eq!(outcome, DispatchOutcome::Executed { command: "args" });
    assert_eq!(
        responder.outbound(),
        vec![Outbound::Send("Arguments (2): foo, bar".to_string())]
    );
}

#[tokio::test]
async fn test_configured_prefix_is_honoured() {
    let mut config = Config::default();
    config.discord.prefix = "pod.".to_string();
    let bot = PodBot::from_config(config).unwrap();
    let responder = RecordingResponder::new();

    let ignored = bot.dispatcher().dispatch(&guild_message("!ping"), &responder).await;
    assert_eq!(ignored, DispatchOutcome::Ignored(IgnoreReason::NoPrefix));

    let executed = bot.dispatcher().dispatch(&guild_message("pod.ping"), &responder).await;
    assert_eq!(executed, DispatchOutcome::Executed { command: "ping" });
    assert_eq!(responder.last(), Some(Outbound::Send("Pong.".to_string())));
}

#[tokio::test]
async fn test_plain_and_bot_messages_run_nothing() {
    let (dispatcher, calls) = custom_dispatcher();
    let responder = RecordingResponder::new();

    let plain = dispatcher.dispatch(&guild_message("echo hi"), &responder).await;
    let from_bot = dispatcher.dispatch(&bot_message("!echo hi"), &responder).await;

    assert_eq!(plain, DispatchOutcome::Ignored(IgnoreReason::NoPrefix));
    assert_eq!(from_bot, DispatchOutcome::Ignored(IgnoreReason::BotAuthor));
    assert!(recorded_calls(&calls).is_empty());
    assert!(responder.is_empty());
}

#[tokio::test]
async fn test_unknown_command_is_silent() {
    let (dispatcher, _) = custom_dispatcher();
    let responder = RecordingResponder::new();

    let outcome = dispatcher.dispatch(&guild_message("!nope"), &responder).await;

    assert_eq!(outcome, DispatchOutcome::UnknownCommand("nope".to_string()));
    assert!(responder.is_empty());
}

#[tokio::test]
async fn test_alias_invokes_handler_with_tokens() {
    let (dispatcher, calls) = custom_dispatcher();
    let responder = RecordingResponder::new();

    let outcome = dispatcher
        .dispatch(&direct_message("!SAY   Hello   World"), &responder)
        .await;

    assert_eq!(outcome, DispatchOutcome::Executed { command: "echo" });
    assert_eq!(
        recorded_calls(&calls),
        vec![vec!["Hello".to_string(), "World".to_string()]]
    );
    assert_eq!(responder.last(), Some(Outbound::Send("Hello World".to_string())));
}

#[tokio::test]
async fn test_missing_arguments_sends_usage_without_executing() {
    let (dispatcher, calls) = custom_dispatcher();
    let responder = RecordingResponder::new();

    let outcome = dispatcher.dispatch(&guild_message("!echo"), &responder).await;

    assert_eq!(outcome, DispatchOutcome::MissingArguments { command: "echo" });
    assert!(recorded_calls(&calls).is_empty());
    assert_eq!(
        responder.outbound(),
        vec![Outbound::Send(
            "You didn't provide any arguments, <@123456789>!\nThe proper usage would be: `!echo <text>`"
                .to_string()
        )]
    );
}

#[tokio::test]
async fn test_cooldown_rejects_then_allows_after_window() {
    let (dispatcher, calls) = custom_dispatcher();
    let responder = RecordingResponder::new();

    let first = dispatcher.dispatch(&guild_message("!echo one"), &responder).await;
    let second = dispatcher.dispatch(&guild_message("!echo two"), &responder).await;

    assert_eq!(first, DispatchOutcome::Executed { command: "echo" });
    match second {
        DispatchOutcome::CoolingDown { command, remaining } => {
            assert_eq!(command, "echo");
            assert!(remaining <= Duration::from_millis(200));
        }
        other => panic!("expected cooldown, got {other:?}"),
    }
    match responder.last() {
        Some(Outbound::Reply(text)) => {
            assert!(text.starts_with("please wait "));
            assert!(text.ends_with("more second(s) before reusing the `echo` command."));
        }
        other => panic!("expected cooldown reply, got {other:?}"),
    }

    tokio::time::sleep(Duration::from_millis(250)).await;

    let third = dispatcher.dispatch(&guild_message("!echo three"), &responder).await;
    assert_eq!(third, DispatchOutcome::Executed { command: "echo" });
    assert_eq!(recorded_calls(&calls).len(), 2);
}

#[tokio::test]
async fn test_failing_command_reports_generic_error() {
    let (dispatcher, _) = custom_dispatcher();
    let responder = RecordingResponder::new();

    let outcome = dispatcher.dispatch(&guild_message("!broken"), &responder).await;

    assert_eq!(outcome, DispatchOutcome::Failed { command: "broken" });
    assert_eq!(
        responder.last(),
        Some(Outbound::Reply(
            "there was an error trying to execute that command!".to_string()
        ))
    );
}

#[tokio::test]
async fn test_panicking_command_is_contained() {
    let (dispatcher, _) = custom_dispatcher();
    let responder = RecordingResponder::new();

    let outcome = dispatcher.dispatch(&guild_message("!explode"), &responder).await;
    assert_eq!(outcome, DispatchOutcome::Failed { command: "explode" });

    // The dispatcher keeps working afterwards.
    let after = dispatcher.dispatch(&guild_message("!echo still here"), &responder).await;
    assert_eq!(after, DispatchOutcome::Executed { command: "echo" });
}

#[tokio::test]
async fn test_undeliverable_notices_do_not_propagate() {
    let bot = PodBot::from_config(Config::default()).unwrap();

    let outcome = bot
        .dispatcher()
        .dispatch(&direct_message("!server"), &FailingResponder)
        .await;
    assert_eq!(outcome, DispatchOutcome::GuildOnly { command: "server" });

    let outcome = bot
        .dispatcher()
        .dispatch(&guild_message("!ping"), &FailingResponder)
        .await;
    assert_eq!(outcome, DispatchOutcome::Failed { command: "ping" });
}
