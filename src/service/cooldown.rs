//! Cooldown buckets for rate-limited commands.
//!
//! This module provides the `CooldownService`, an in-memory store of recent command
//! uses. Each command declares how many uses it allows per window and whether the
//! bucket is shared by everyone or kept per user (see `CommandName::cooldown`).
//! Buckets live only for the lifetime of the process.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use serenity::all::UserId;
use tokio::sync::RwLock;

use crate::error::command::CommandError;
use crate::model::command::{BucketScope, CommandName};

/// Identifies one bucket: a command plus the user for per-user scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct BucketKey {
    command: CommandName,
    user: Option<UserId>,
}

impl BucketKey {
    fn new(command: CommandName, user: UserId) -> Self {
        let user = match command.cooldown().scope {
            BucketScope::Global => None,
            BucketScope::User => Some(user),
        };

        Self { command, user }
    }
}

/// Service tracking command uses against their cooldown windows.
///
/// Cloning is cheap and clones share the same buckets.
#[derive(Clone, Default)]
pub struct CooldownService {
    /// Use timestamps per bucket, oldest first.
    buckets: Arc<RwLock<HashMap<BucketKey, Vec<Instant>>>>,
}

impl CooldownService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a use of `command` by `user` if its bucket has room.
    ///
    /// # Returns
    /// - `Ok(())` - Use accepted and recorded
    /// - `Err(CommandError::OnCooldown)` - Bucket is full; nothing is recorded
    pub async fn hit(&self, command: CommandName, user: UserId) -> Result<(), CommandError> {
        self.hit_at(command, user, Instant::now()).await
    }

    /// Same as `hit` with an explicit clock reading.
    pub async fn hit_at(
        &self,
        command: CommandName,
        user: UserId,
        now: Instant,
    ) -> Result<(), CommandError> {
        let cooldown = command.cooldown();
        let mut buckets = self.buckets.write().await;
        let uses = buckets.entry(BucketKey::new(command, user)).or_default();

        // Drop uses that fell out of the window
        uses.retain(|used_at| now.saturating_duration_since(*used_at) < cooldown.per);

        if uses.len() >= cooldown.uses {
            let oldest = uses[0];
            let retry_after = cooldown.per - now.saturating_duration_since(oldest);
            return Err(CommandError::OnCooldown {
                command,
                retry_after,
            });
        }

        uses.push(now);
        Ok(())
    }

    /// Clears every bucket of `command`.
    #[cfg(test)]
    pub async fn reset(&self, command: CommandName) {
        self.buckets
            .write()
            .await
            .retain(|key, _| key.command != command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn user(id: u64) -> UserId {
        UserId::new(id)
    }

    /// Tests the 12-hour per-user department cooldown.
    ///
    /// Verifies a second use within the window is rejected with the remaining
    /// time, and accepted once the window has elapsed.
    ///
    /// Expected: Ok, Err(OnCooldown), Ok
    #[tokio::test]
    async fn departments_allows_one_use_per_twelve_hours() {
        let service = CooldownService::new();
        let start = Instant::now();

        assert!(service
            .hit_at(CommandName::Departments, user(1), start)
            .await
            .is_ok());

        let an_hour_later = start + Duration::from_secs(3_600);
        let result = service
            .hit_at(CommandName::Departments, user(1), an_hour_later)
            .await;
        assert_eq!(
            result,
            Err(CommandError::OnCooldown {
                command: CommandName::Departments,
                retry_after: Duration::from_secs(43_200 - 3_600),
            })
        );

        let after_window = start + Duration::from_secs(43_200);
        assert!(service
            .hit_at(CommandName::Departments, user(1), after_window)
            .await
            .is_ok());
    }

    /// Tests that per-user buckets don't affect each other.
    ///
    /// Expected: both users accepted
    #[tokio::test]
    async fn departments_buckets_are_per_user() {
        let service = CooldownService::new();
        let now = Instant::now();

        assert!(service.hit_at(CommandName::Departments, user(1), now).await.is_ok());
        assert!(service.hit_at(CommandName::Departments, user(2), now).await.is_ok());
    }

    /// Tests the global 3-per-15-seconds repeat bucket.
    ///
    /// Verifies three uses by different moderators fill the bucket and the fourth
    /// is rejected until the oldest use expires.
    ///
    /// Expected: 3x Ok, Err(OnCooldown), Ok after the oldest expires
    #[tokio::test]
    async fn repeat_bucket_is_shared_globally() {
        let service = CooldownService::new();
        let start = Instant::now();

        for (offset, id) in [(0, 1), (1, 2), (2, 3)] {
            let at = start + Duration::from_secs(offset);
            assert!(service.hit_at(CommandName::Repeat, user(id), at).await.is_ok());
        }

        let blocked = service
            .hit_at(CommandName::Repeat, user(4), start + Duration::from_secs(5))
            .await;
        assert!(matches!(
            blocked,
            Err(CommandError::OnCooldown { retry_after, .. }) if retry_after == Duration::from_secs(10)
        ));

        let after_oldest = start + Duration::from_secs(15);
        assert!(service
            .hit_at(CommandName::Repeat, user(4), after_oldest)
            .await
            .is_ok());
    }

    /// Tests that a rejected use is not recorded.
    ///
    /// Expected: window still measured from the first accepted use
    #[tokio::test]
    async fn rejected_use_does_not_extend_window() {
        let service = CooldownService::new();
        let start = Instant::now();

        assert!(service.hit_at(CommandName::Departments, user(1), start).await.is_ok());
        for hours in 1..12 {
            let at = start + Duration::from_secs(hours * 3_600);
            assert!(service.hit_at(CommandName::Departments, user(1), at).await.is_err());
        }
        assert!(service
            .hit_at(CommandName::Departments, user(1), start + Duration::from_secs(43_200))
            .await
            .is_ok());
    }

    /// Tests that different commands keep separate buckets.
    ///
    /// Expected: filling the rules bucket leaves roles untouched
    #[tokio::test]
    async fn commands_have_separate_buckets() {
        let service = CooldownService::new();
        let now = Instant::now();

        for _ in 0..3 {
            assert!(service.hit_at(CommandName::Rules, user(1), now).await.is_ok());
        }
        assert!(service.hit_at(CommandName::Rules, user(1), now).await.is_err());
        assert!(service.hit_at(CommandName::Roles, user(1), now).await.is_ok());

        service.reset(CommandName::Rules).await;
        assert!(service.hit_at(CommandName::Rules, user(1), now).await.is_ok());
    }
}
