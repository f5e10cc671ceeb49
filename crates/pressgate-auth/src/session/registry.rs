//! Active-session registry.
//!
//! Every issued token is recorded here by its `jti`. Logout removes the
//! entry, so a still-valid cookie presented afterwards (for example from
//! another browser tab) is treated as logged out. Removals bump a watch
//! channel so interested tasks get an explicit change notification instead
//! of having to poll.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tokio::sync::watch;
use uuid::Uuid;

use crate::jwt::Claims;

/// One active session.
#[derive(Debug, Clone)]
pub struct SessionRecord {
    /// Token ID.
    pub jti: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Email of the owning user.
    pub email: String,
    /// When the session's token expires.
    pub expires_at: DateTime<Utc>,
}

impl SessionRecord {
    /// Build a record from token claims.
    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            jti: claims.jti,
            user_id: claims.sub,
            email: claims.email.clone(),
            expires_at: DateTime::from_timestamp(claims.exp, 0).unwrap_or_else(Utc::now),
        }
    }
}

/// In-memory registry of active sessions keyed by token ID.
#[derive(Debug)]
pub struct SessionRegistry {
    sessions: DashMap<Uuid, SessionRecord>,
    revision: watch::Sender<u64>,
}

impl SessionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            sessions: DashMap::new(),
            revision,
        }
    }

    /// Record a newly issued session.
    pub fn insert(&self, record: SessionRecord) {
        self.sessions.insert(record.jti, record);
    }

    /// Whether the given token ID is still active.
    pub fn contains(&self, jti: &Uuid) -> bool {
        self.sessions.contains_key(jti)
    }

    /// Remove one session. Returns whether it existed.
    pub fn remove(&self, jti: &Uuid) -> bool {
        let removed = self.sessions.remove(jti).is_some();
        if removed {
            self.bump();
        }
        removed
    }

    /// Remove every session belonging to a user (e.g. on re-verification).
    pub fn remove_for_user(&self, user_id: &Uuid) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, record| record.user_id != *user_id);
        let removed = before - self.sessions.len();
        if removed > 0 {
            self.bump();
        }
        removed
    }

    /// Drop sessions whose tokens have expired. Returns how many were removed.
    pub fn remove_expired(&self, now: DateTime<Utc>) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, record| record.expires_at > now);
        let removed = before - self.sessions.len();
        if removed > 0 {
            self.bump();
        }
        removed
    }

    /// Number of active sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Subscribe to removal notifications. The value is a revision counter
    /// that increases whenever sessions are removed.
    pub fn changes(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    fn bump(&self) {
        self.revision.send_modify(|rev| *rev += 1);
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
