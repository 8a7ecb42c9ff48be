//! In-process session store
//!
//! Holds sessions in a mutex-guarded map so the check and the write of
//! `insert_if_absent` happen under one lock. Faults can be switched on per
//! operation and every call is counted, which makes it the store of choice
//! for exercising the service without a database.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::error;
use uuid::Uuid;

use super::SessionStore;
use crate::models::PlayerSession;

#[derive(Debug, Default)]
struct Faults {
    insert: AtomicBool,
    lookup: AtomicBool,
    delete: AtomicBool,
}

#[derive(Debug, Default)]
struct CallCounts {
    insert: AtomicUsize,
    lookup: AtomicUsize,
    delete: AtomicUsize,
}

/// Mutex-guarded map implementation of [`SessionStore`].
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    sessions: Arc<Mutex<HashMap<Uuid, PlayerSession>>>,
    faults: Arc<Faults>,
    calls: Arc<CallCounts>,
}

impl MemorySessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent insert fail as if the backend were down
    pub fn fail_inserts(&self, enabled: bool) {
        self.faults.insert.store(enabled, Ordering::SeqCst);
    }

    /// Make every subsequent lookup fail
    pub fn fail_lookups(&self, enabled: bool) {
        self.faults.lookup.store(enabled, Ordering::SeqCst);
    }

    /// Make every subsequent delete fail
    pub fn fail_deletes(&self, enabled: bool) {
        self.faults.delete.store(enabled, Ordering::SeqCst);
    }

    /// Number of `insert_if_absent` calls so far
    pub fn insert_calls(&self) -> usize {
        self.calls.insert.load(Ordering::SeqCst)
    }

    /// Number of `find_by_player_id` calls so far
    pub fn lookup_calls(&self) -> usize {
        self.calls.lookup.load(Ordering::SeqCst)
    }

    /// Number of `delete_by_player_id` calls so far
    pub fn delete_calls(&self) -> usize {
        self.calls.delete.load(Ordering::SeqCst)
    }

    /// Total number of store calls so far
    pub fn total_calls(&self) -> usize {
        self.insert_calls() + self.lookup_calls() + self.delete_calls()
    }

    /// Number of live sessions
    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    /// Whether no session is live
    pub async fn is_empty(&self) -> bool {
        self.sessions.lock().await.is_empty()
    }

    /// Snapshot of the session stored for `player_id`, bypassing faults and counters
    pub async fn get(&self, player_id: Uuid) -> Option<PlayerSession> {
        self.sessions.lock().await.get(&player_id).cloned()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn insert_if_absent(&self, session: &PlayerSession) -> bool {
        self.calls.insert.fetch_add(1, Ordering::SeqCst);
        if self.faults.insert.load(Ordering::SeqCst) {
            error!(
                player_id = %session.player_id,
                reason = "injected_fault",
                "Player session insert failed"
            );
            return false;
        }

        match self.sessions.lock().await.entry(session.player_id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(session.clone());
                true
            }
        }
    }

    async fn find_by_player_id(&self, player_id: Uuid) -> Option<PlayerSession> {
        self.calls.lookup.fetch_add(1, Ordering::SeqCst);
        if self.faults.lookup.load(Ordering::SeqCst) {
            error!(
                player_id = %player_id,
                reason = "injected_fault",
                "Player session fetch failed"
            );
            return None;
        }

        self.sessions.lock().await.get(&player_id).cloned()
    }

    async fn delete_by_player_id(&self, player_id: Uuid) -> bool {
        self.calls.delete.fetch_add(1, Ordering::SeqCst);
        if self.faults.delete.load(Ordering::SeqCst) {
            error!(
                player_id = %player_id,
                reason = "injected_fault",
                "Player session delete failed"
            );
            return false;
        }

        self.sessions.lock().await.remove(&player_id).is_some()
    }
}
