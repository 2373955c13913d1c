//! Platform-neutral view of an inbound chat message.

use podbot_common::{ChannelId, GuildId, UserId};

/// Author of an inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    /// Discord user id.
    pub id: UserId,
    /// Account name.
    pub username: String,
    /// Whether the account is a bot (this bot included).
    pub bot: bool,
}

impl Author {
    /// Creates a human author.
    pub fn new(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            bot: false,
        }
    }

    /// Marks the author as a bot account.
    #[must_use]
    pub fn as_bot(mut self) -> Self {
        self.bot = true;
        self
    }

    /// Discord mention markup for the author.
    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }
}

/// Where a message was posted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    /// Direct message with the bot.
    Direct,
    /// Channel belonging to a guild.
    Guild(GuildId),
}

/// Cached details of the guild a message came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildInfo {
    /// Guild name.
    pub name: String,
    /// Member count as last reported by the gateway.
    pub member_count: u64,
}

/// An inbound message as seen by the dispatcher.
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    /// Raw message text.
    pub content: String,
    /// Message author.
    pub author: Author,
    /// Channel the message was posted in.
    pub channel_id: ChannelId,
    /// Channel kind.
    pub channel: ChannelKind,
    /// Guild details, when the guild is cached.
    pub guild: Option<GuildInfo>,
}

impl IncomingMessage {
    /// Creates a direct message.
    pub fn new(content: impl Into<String>, author: Author, channel_id: ChannelId) -> Self {
        Self {
            content: content.into(),
            author,
            channel_id,
            channel: ChannelKind::Direct,
            guild: None,
        }
    }

    /// Places the message in a guild channel.
    #[must_use]
    pub fn in_guild(mut self, guild_id: GuildId) -> Self {
        self.channel = ChannelKind::Guild(guild_id);
        self
    }

    /// Attaches cached guild details.
    #[must_use]
    pub fn with_guild_info(mut self, info: GuildInfo) -> Self {
        self.guild = Some(info);
        self
    }

    /// Whether the message was sent as a direct message.
    pub fn is_direct(&self) -> bool {
        self.channel == ChannelKind::Direct
    }
}
