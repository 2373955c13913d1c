//! Per-command, per-user cooldown tracking.

use dashmap::DashMap;
use podbot_common::UserId;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::debug;

/// Rejection returned while a cooldown is running.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CooldownError {
    /// The user used the command too recently.
    #[error("User {user_id} is on cooldown for command '{command}' ({remaining:?} remaining)")]
    UserOnCooldown {
        /// Command name.
        command: String,
        /// User that is waiting.
        user_id: UserId,
        /// Time until the command may be used again.
        remaining: Duration,
    },
}

impl CooldownError {
    /// Time left before the command may be reused.
    pub const fn remaining(&self) -> Duration {
        match self {
            Self::UserOnCooldown { remaining, .. } => *remaining,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    last_used: Instant,
    /// `None` when the window reaches past what `Instant` can represent.
    expires_at: Option<Instant>,
}

impl Entry {
    fn remaining(&self, now: Instant) -> Option<Duration> {
        match self.expires_at {
            Some(expires_at) => (now < expires_at).then(|| expires_at - now),
            None => Some(Duration::MAX),
        }
    }
}

/// Tracks the last invocation of each command by each user.
///
/// Layout is `command -> user -> entry`. An entry is honoured only while
/// its window is open; [`sweep_expired`](Self::sweep_expired) removes the
/// stale ones.
#[derive(Debug, Default)]
pub struct CooldownTracker {
    timestamps: DashMap<String, HashMap<UserId, Entry>>,
}

impl CooldownTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects the invocation if `user` used `command` less than `window`
    /// ago, otherwise records it.
    pub fn check_and_record(
        &self,
        command: &str,
        user: UserId,
        window: Duration,
    ) -> Result<(), CooldownError> {
        self.check_and_record_at(command, user, window, Instant::now())
    }

    /// [`check_and_record`](Self::check_and_record) against an explicit clock.
    pub fn check_and_record_at(
        &self,
        command: &str,
        user: UserId,
        window: Duration,
        now: Instant,
    ) -> Result<(), CooldownError> {
        if window.is_zero() {
            return Ok(());
        }

        let mut users = self.timestamps.entry(command.to_string()).or_default();
        if let Some(entry) = users.get(&user) {
            let current = Entry {
                expires_at: entry.last_used.checked_add(window),
                ..*entry
            };
            if let Some(remaining) = current.remaining(now) {
                return Err(CooldownError::UserOnCooldown {
                    command: command.to_string(),
                    user_id: user,
                    remaining,
                });
            }
        }

        users.insert(
            user,
            Entry {
                last_used: now,
                expires_at: now.checked_add(window),
            },
        );
        Ok(())
    }

    /// Time left on `user`'s cooldown for `command`, if any.
    pub fn remaining_at(&self, command: &str, user: UserId, now: Instant) -> Option<Duration> {
        let users = self.timestamps.get(command)?;
        users.get(&user)?.remaining(now)
    }

    /// Drops every entry whose window has closed. Returns how many went.
    pub fn sweep_expired(&self) -> usize {
        self.sweep_expired_at(Instant::now())
    }

    /// [`sweep_expired`](Self::sweep_expired) against an explicit clock.
    pub fn sweep_expired_at(&self, now: Instant) -> usize {
        let mut removed = 0;
        self.timestamps.retain(|_, users| {
            let before = users.len();
            users.retain(|_, entry| entry.remaining(now).is_some());
            removed += before - users.len();
            !users.is_empty()
        });

        if removed > 0 {
            debug!("Swept {} expired cooldown entries", removed);
        }
        removed
    }

    /// Clears all cooldowns for a command.
    pub fn clear_command(&self, command: &str) {
        self.timestamps.remove(command);
        debug!("Cleared all cooldowns for command '{}'", command);
    }

    /// Clears all cooldowns for a user.
    pub fn clear_user(&self, user: UserId) {
        self.timestamps.retain(|_, users| {
            users.remove(&user);
            !users.is_empty()
        });
        debug!("Cleared all cooldowns for user {}", user);
    }

    /// Number of tracked (command, user) entries.
    pub fn active_count(&self) -> usize {
        self.timestamps.iter().map(|users| users.len()).sum()
    }

    /// Spawns a background task sweeping expired entries every `every`.
    pub fn spawn_sweeper(self: &Arc<Self>, every: Duration) -> JoinHandle<()> {
        let tracker = Arc::clone(self);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                tracker.sweep_expired();
            }
        })
    }
}
