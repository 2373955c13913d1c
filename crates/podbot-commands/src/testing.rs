//! Fakes for exercising commands without Discord.

use crate::command::Responder;
use crate::error::CommandError;
use crate::message::{Author, GuildInfo, IncomingMessage};
use async_trait::async_trait;
use podbot_common::{ChannelId, GuildId, UserId};
use std::sync::Mutex;

/// A message produced through a [`Responder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outbound {
    /// Posted to the channel.
    Send(String),
    /// Addressed to the author.
    Reply(String),
}

impl Outbound {
    /// Message text regardless of delivery mode.
    pub fn content(&self) -> &str {
        match self {
            Self::Send(content) | Self::Reply(content) => content,
        }
    }
}

/// Responder that records everything instead of sending it.
#[derive(Debug, Default)]
pub struct RecordingResponder {
    outbound: Mutex<Vec<Outbound>>,
}

impl RecordingResponder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far.
    pub fn outbound(&self) -> Vec<Outbound> {
        self.outbound.lock().map(|v| v.clone()).unwrap_or_default()
    }

    /// Last recorded message.
    pub fn last(&self) -> Option<Outbound> {
        self.outbound().pop()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.outbound().is_empty()
    }

    fn push(&self, message: Outbound) {
        if let Ok(mut outbound) = self.outbound.lock() {
            outbound.push(message);
        }
    }
}

#[async_trait]
impl Responder for RecordingResponder {
    async fn send(&self, content: &str) -> Result<(), CommandError> {
        self.push(Outbound::Send(content.to_string()));
        Ok(())
    }

    async fn reply(&self, content: &str) -> Result<(), CommandError> {
        self.push(Outbound::Reply(content.to_string()));
        Ok(())
    }
}

/// Responder whose every delivery fails.
#[derive(Debug, Default)]
pub struct FailingResponder;

#[async_trait]
impl Responder for FailingResponder {
    async fn send(&self, _content: &str) -> Result<(), CommandError> {
        Err(CommandError::Delivery("channel unavailable".to_string()))
    }

    async fn reply(&self, _content: &str) -> Result<(), CommandError> {
        Err(CommandError::Delivery("channel unavailable".to_string()))
    }
}

/// Author used by the message fixtures.
pub fn test_author() -> Author {
    Author::new(UserId(123_456_789), "podder")
}

/// A message from [`test_author`] posted in a cached guild.
pub fn guild_message(content: &str) -> IncomingMessage {
    IncomingMessage::new(content, test_author(), ChannelId(555))
        .in_guild(GuildId(777))
        .with_guild_info(GuildInfo {
            name: "Pod Squad".to_string(),
            member_count: 42,
        })
}

/// A direct message from [`test_author`].
pub fn direct_message(content: &str) -> IncomingMessage {
    IncomingMessage::new(content, test_author(), ChannelId(556))
}

/// A guild message from a bot account.
pub fn bot_message(content: &str) -> IncomingMessage {
    let mut message = guild_message(content);
    message.author = Author::new(UserId(1), "podbot").as_bot();
    message
}
