//! Test helpers shared by the workspace crates.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialize logging for tests. Safe to call from every test.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Discord identifiers used by fixtures.
pub mod discord_fixtures {
    use crate::types::{ChannelId, GuildId, UserId};

    /// A user id for tests.
    pub const fn test_user_id() -> UserId {
        UserId(123_456_789_012_345_678)
    }

    /// A second, distinct user id for tests.
    pub const fn other_user_id() -> UserId {
        UserId(876_543_210_987_654_321)
    }

    /// A channel id for tests.
    pub const fn test_channel_id() -> ChannelId {
        ChannelId(987_654_321_098_765_432)
    }

    /// A guild id for tests.
    pub const fn test_guild_id() -> GuildId {
        GuildId(111_111_111_111_111_111)
    }
}
