//! Gateway event handling and the serenity-backed reply surface.

use crate::error::Error;
use async_trait::async_trait;
use podbot_commands::{
    Author, CommandError, DispatchOutcome, Dispatcher, GuildInfo, IncomingMessage, Responder,
};
use podbot_common::{truncate_string, ChannelId, GuildId, UserId};
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Longest message Discord accepts.
const MESSAGE_LIMIT: usize = 2000;

/// Room left for the `<@id> ` prefix of mention replies.
const MENTION_ALLOWANCE: usize = 32;

/// Shared application state handed to every event callback.
pub struct Data {
    /// Prefix command dispatcher.
    pub dispatcher: Arc<Dispatcher>,
}

impl std::fmt::Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Data")
            .field("prefix", &self.dispatcher.prefix())
            .field("commands", &self.dispatcher.registry().len())
            .finish()
    }
}

/// Posts replies back into the channel a message came from.
pub struct ChannelResponder<'a> {
    ctx: &'a serenity::Context,
    message: &'a serenity::Message,
}

impl<'a> ChannelResponder<'a> {
    /// Creates a responder answering `message`.
    pub const fn new(ctx: &'a serenity::Context, message: &'a serenity::Message) -> Self {
        Self { ctx, message }
    }
}

#[async_trait]
impl Responder for ChannelResponder<'_> {
    async fn send(&self, content: &str) -> Result<(), CommandError> {
        self.message
            .channel_id
            .say(&self.ctx.http, truncate_string(content, MESSAGE_LIMIT))
            .await
            .map(|_| ())
            .map_err(|e| CommandError::Delivery(e.to_string()))
    }

    async fn reply(&self, content: &str) -> Result<(), CommandError> {
        self.message
            .reply_mention(self.ctx, truncate_string(content, MESSAGE_LIMIT - MENTION_ALLOWANCE))
            .await
            .map(|_| ())
            .map_err(|e| CommandError::Delivery(e.to_string()))
    }
}

/// Converts a gateway message into the dispatcher's view of it.
///
/// Guild name and member count come from the cache and are absent when the
/// guild has not been cached yet.
pub fn incoming_from(ctx: &serenity::Context, message: &serenity::Message) -> IncomingMessage {
    let author = Author {
        id: UserId(message.author.id.get()),
        username: message.author.name.clone(),
        bot: message.author.bot,
    };
    let mut incoming = IncomingMessage::new(
        message.content.clone(),
        author,
        ChannelId(message.channel_id.get()),
    );

    if let Some(guild_id) = message.guild_id {
        incoming = incoming.in_guild(GuildId(guild_id.get()));
        let info = guild_id.to_guild_cached(&ctx.cache).map(|guild| GuildInfo {
            name: guild.name.clone(),
            member_count: guild.member_count,
        });
        if let Some(info) = info {
            incoming = incoming.with_guild_info(info);
        }
    }

    incoming
}

/// Event handler registered with the poise framework.
pub async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    match event {
        serenity::FullEvent::Ready { data_about_bot } => {
            info!(
                "Connected as {} on shard {}",
                data_about_bot.user.name,
                data_about_bot.shard.map_or(0, |s| s.id.0)
            );
        }
        serenity::FullEvent::Resume { .. } => {
            info!("Gateway session resumed");
        }
        serenity::FullEvent::ShardStageUpdate { event } => {
            if matches!(event.new, serenity::ConnectionStage::Disconnected) {
                warn!("Shard {} disconnected (was {:?})", event.shard_id.0, event.old);
            } else {
                debug!("Shard {} stage {:?} -> {:?}", event.shard_id.0, event.old, event.new);
            }
        }
        serenity::FullEvent::Message { new_message } => {
            handle_message(ctx, new_message, data).await;
        }
        _ => {}
    }
    Ok(())
}

async fn handle_message(ctx: &serenity::Context, message: &serenity::Message, data: &Data) {
    // Skip the cache lookup for ordinary chatter.
    if message.author.bot || !message.content.starts_with(data.dispatcher.prefix()) {
        return;
    }

    let incoming = incoming_from(ctx, message);
    let responder = ChannelResponder::new(ctx, message);
    match data.dispatcher.dispatch(&incoming, &responder).await {
        DispatchOutcome::Executed { command } => {
            debug!(command, user = %incoming.author.id, "Command executed");
        }
        DispatchOutcome::Failed { command } => {
            warn!(command, user = %incoming.author.id, "Command failed");
        }
        outcome => debug!(?outcome, "Message not executed"),
    }
}

/// Global error handler for the framework.
pub async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {:?}", error);
        }
        poise::FrameworkError::EventHandler { error, event, .. } => {
            error!("Error in event handler for {}: {:?}", event.snake_case_name(), error);
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling framework error: {}", e);
            }
        }
    }
}
