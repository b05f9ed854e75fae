use std::sync::RwLock;
use std::time::{Duration, Instant};

use serde_json::Value;

use crate::error::AppError;
use crate::models::github::RepoRecord;

/// How long a fetched GitHub resource stays fresh.
pub const CACHE_TTL: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Clone)]
struct Cached<T> {
    value: T,
    fetched_at: Instant,
}

/// Single-slot store holding at most one value with a fixed time-to-live.
///
/// `store` overwrites the slot and restamps it in one locked assignment, so
/// concurrent readers never observe a value paired with the wrong
/// timestamp. There is no eviction: a stale value simply stops being
/// returned until the next `store`.
#[derive(Debug)]
pub struct FreshCell<T> {
    ttl: Duration,
    slot: RwLock<Option<Cached<T>>>,
}

impl<T: Clone> FreshCell<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: RwLock::new(None),
        }
    }

    /// Return the stored value if one exists and its TTL has not elapsed.
    pub fn get_fresh(&self) -> Result<Option<T>, AppError> {
        let slot = self
            .slot
            .read()
            .map_err(|_| AppError::Internal("Failed to acquire cache lock".into()))?;

        Ok(slot
            .as_ref()
            .filter(|cached| cached.fetched_at.elapsed() < self.ttl)
            .map(|cached| cached.value.clone()))
    }

    /// Overwrite the slot with a new value stamped at the current instant.
    pub fn store(&self, value: T) -> Result<(), AppError> {
        let mut slot = self
            .slot
            .write()
            .map_err(|_| AppError::Internal("Failed to acquire cache lock".into()))?;

        *slot = Some(Cached {
            value,
            fetched_at: Instant::now(),
        });
        Ok(())
    }
}

/// The two cached GitHub resources.
///
/// Each entry carries its own fetch timestamp: refreshing the repository
/// list does not extend the profile's freshness, and vice versa.
#[derive(Debug)]
pub struct GithubCache {
    pub user: FreshCell<Value>,
    pub repos: FreshCell<Vec<RepoRecord>>,
}

impl GithubCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            user: FreshCell::new(ttl),
            repos: FreshCell::new(ttl),
        }
    }
}

impl Default for GithubCache {
    fn default() -> Self {
        Self::new(CACHE_TTL)
    }
}
