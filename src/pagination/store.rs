//! Token store
//!
//! Maps opaque continuation tokens to saved cursors. A lookup is
//! take-and-remove under a single write lock, which is what makes tokens
//! single-use even when the same token races in from several tasks.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{Error, Result};
use crate::pagination::cursor::Cursor;

// ============================================================================
// Store configuration
// ============================================================================

/// Tuning knobs for `CursorStore`.
///
/// The defaults keep every entry until it is taken, so an abandoned
/// sequence lives forever. Both knobs are opt-in.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Entries older than this are treated as gone
    pub ttl: Option<Duration>,
    /// Oldest entries are evicted once the store would exceed this size
    pub max_entries: Option<usize>,
}

impl StoreConfig {
    /// Create a config with no expiry and no size cap
    pub fn new() -> Self {
        Self::default()
    }

    /// Expire entries after `ttl`
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Cap the store at `max_entries` live tokens, evicting oldest first
    #[must_use]
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = Some(max_entries);
        self
    }
}

// ============================================================================
// Store
// ============================================================================

/// A saved cursor plus the instant it was saved
#[derive(Debug, Clone)]
struct StoreEntry {
    cursor: Cursor,
    created_at: DateTime<Utc>,
}

/// Shared map from continuation token to saved cursor.
///
/// Cloning is cheap and every clone shares the same underlying map, so
/// the store can be handed to as many tasks as needed.
#[derive(Debug, Clone, Default)]
pub struct CursorStore {
    entries: Arc<RwLock<HashMap<String, StoreEntry>>>,
    config: StoreConfig,
}

impl CursorStore {
    /// Create an empty store with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given configuration
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            config,
        }
    }

    /// Save `cursor` under `token`.
    ///
    /// Exhausted cursors are refused: a finished sequence must complete
    /// instead of parking an empty entry. A token collision is refused
    /// too, the entry already present wins.
    pub async fn put(&self, token: impl Into<String>, cursor: Cursor) -> Result<()> {
        if cursor.is_exhausted() {
            return Err(Error::invalid_argument("refusing to store an exhausted cursor"));
        }

        let token = token.into();
        let mut entries = self.entries.write().await;

        if let Some(ttl) = self.config.ttl {
            let now = Utc::now();
            entries.retain(|_, entry| !is_expired_at(entry, ttl, now));
        }

        if entries.contains_key(&token) {
            return Err(Error::token_generation(format!("token collision: {token}")));
        }

        if let Some(max) = self.config.max_entries {
            // A zero cap still admits the entry being saved
            while entries.len() >= max.max(1) {
                let oldest = entries
                    .iter()
                    .min_by_key(|(_, entry)| entry.created_at)
                    .map(|(token, _)| token.clone());
                let Some(victim) = oldest else { break };
                debug!("Evicting oldest token {} to stay under capacity", victim);
                entries.remove(&victim);
            }
        }

        entries.insert(
            token,
            StoreEntry {
                cursor,
                created_at: Utc::now(),
            },
        );
        Ok(())
    }

    /// Atomically look up and remove the cursor saved under `token`.
    ///
    /// At most one caller ever gets the cursor back; every other caller
    /// sees `None`. Expired entries are treated as absent.
    pub async fn take(&self, token: &str) -> Option<Cursor> {
        let entry = self.entries.write().await.remove(token)?;

        if let Some(ttl) = self.config.ttl {
            if is_expired_at(&entry, ttl, Utc::now()) {
                debug!("Token {} expired before use", token);
                return None;
            }
        }

        Some(entry.cursor)
    }

    /// Number of live tokens
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the store holds no tokens
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Drop all expired entries, returning how many were removed.
    ///
    /// A no-op unless a TTL is configured.
    pub async fn purge_expired(&self) -> usize {
        let Some(ttl) = self.config.ttl else {
            return 0;
        };

        let now = Utc::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !is_expired_at(entry, ttl, now));
        before - entries.len()
    }
}

fn is_expired_at(entry: &StoreEntry, ttl: Duration, now: DateTime<Utc>) -> bool {
    now.signed_duration_since(entry.created_at)
        .to_std()
        .is_ok_and(|age| age >= ttl)
}
