//! Core bot logic using the Poise framework.

use crate::error::{BotError, BotResult, Error};
use crate::handler::{event_handler, on_error, Data};
use podbot_commands::{CommandRegistry, Dispatcher};
use podbot_config::Config;
use poise::serenity_prelude::{self as serenity, GatewayIntents};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Shortest token accepted before attempting to connect.
const MIN_TOKEN_LEN: usize = 50;

/// Main bot structure.
pub struct PodBot {
    config: Arc<Config>,
    dispatcher: Arc<Dispatcher>,
}

impl PodBot {
    /// Creates a bot around an already built dispatcher.
    pub fn new(config: Config, dispatcher: Dispatcher) -> Self {
        Self {
            config: Arc::new(config),
            dispatcher: Arc::new(dispatcher),
        }
    }

    /// Creates a bot serving the built-in command set.
    pub fn from_config(config: Config) -> BotResult<Self> {
        let registry = CommandRegistry::with_builtins()?;
        info!("Registered {} commands: {}", registry.len(), registry.names().join(", "));
        let dispatcher = Dispatcher::new(
            config.discord.prefix.clone(),
            registry,
            config.commands.default_cooldown(),
        );
        Ok(Self::new(config, dispatcher))
    }

    /// Loaded configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Dispatcher shared with the event handler.
    pub fn dispatcher(&self) -> &Arc<Dispatcher> {
        &self.dispatcher
    }

    /// Gateway intents needed to read prefix commands in guilds and DMs.
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS
            | GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::DIRECT_MESSAGES
            | GatewayIntents::MESSAGE_CONTENT
    }

    /// Builds the poise framework. Prefix parsing is left to the dispatcher,
    /// so poise itself registers no commands.
    pub fn framework(&self) -> poise::Framework<Data, Error> {
        let data = Data {
            dispatcher: Arc::clone(&self.dispatcher),
        };

        poise::Framework::builder()
            .options(poise::FrameworkOptions {
                commands: vec![],
                on_error: |error| Box::pin(on_error(error)),
                event_handler: |ctx, event, framework, data| {
                    Box::pin(event_handler(ctx, event, framework, data))
                },
                prefix_options: poise::PrefixFrameworkOptions {
                    prefix: None,
                    mention_as_prefix: false,
                    ..Default::default()
                },
                ..Default::default()
            })
            .setup(move |_ctx, ready, _framework| {
                info!("Ready! Logged in as {}", ready.user.name);
                info!("Serving {} guilds", ready.guilds.len());
                Box::pin(async move { Ok(data) })
            })
            .build()
    }

    /// Connects to the gateway and runs until shutdown or a fatal client
    /// error.
    pub async fn start(&self) -> BotResult<()> {
        validate_token(&self.config.discord.token)?;

        let sweeper = self
            .dispatcher
            .cooldowns()
            .spawn_sweeper(self.config.commands.sweep_interval());

        let mut client = serenity::ClientBuilder::new(&self.config.discord.token, Self::intents())
            .framework(self.framework())
            .await?;

        info!("Discord client created");

        let shard_manager = client.shard_manager.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {:?}", e);
                return;
            }

            info!("Received shutdown signal, starting graceful shutdown");
            shard_manager.shutdown_all().await;
            info!("Discord client shutdown complete");
        });

        let result = client.start().await;
        sweeper.abort();

        if let Err(e) = result {
            error!("Client error: {:?}", e);
            return Err(BotError::Discord(e));
        }

        info!("podbot stopped");
        Ok(())
    }
}

/// Rejects tokens that cannot possibly authenticate.
pub fn validate_token(token: &str) -> BotResult<()> {
    if token.is_empty() {
        return Err(BotError::InvalidToken("Discord token cannot be empty".to_string()));
    }

    if token.len() < MIN_TOKEN_LEN {
        return Err(BotError::InvalidToken(format!(
            "Discord token appears to be too short (minimum {MIN_TOKEN_LEN} characters expected)"
        )));
    }

    // Bot tokens are three dot-separated segments.
    if !token.contains('.') {
        warn!("Discord token format may be invalid (missing dots)");
    }

    debug!("Discord token validation passed");
    Ok(())
}
