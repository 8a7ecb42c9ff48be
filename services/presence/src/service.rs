//! Player presence: login admission and logout
//!
//! A login claims the player's row with a conditional insert. The store's
//! uniqueness constraint is the only thing deciding who wins; the lookup that
//! follows a failed insert only classifies the rejection for the caller and
//! may already be stale by the time it runs.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::models::{LoginReply, LoginStatus, LogoutReply, PlayerSession};
use crate::store::SessionStore;
use crate::validation::parse_player_id;

pub const MSG_INVALID_PLAYER_ID: &str = "player_id must be a UUID";
pub const MSG_ACCEPTED: &str = "player accepted";
pub const MSG_ALREADY_ONLINE: &str = "player already online";
pub const MSG_VERIFY_FAILED: &str = "unable to verify player session";
pub const MSG_REMOVED: &str = "player removed";
pub const MSG_NOT_FOUND: &str = "player session not found";

/// Presence service over a [`SessionStore`].
///
/// Holds no state of its own; clones are cheap and share the store.
#[derive(Clone)]
pub struct PresenceService {
    store: Arc<dyn SessionStore>,
    clock: Arc<dyn Clock>,
}

impl PresenceService {
    /// Create a presence service stamping sessions with the wall clock
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    /// Create a presence service with an explicit time source
    pub fn with_clock(store: Arc<dyn SessionStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Try to mark the player online.
    pub async fn login(&self, raw_player_id: &str) -> LoginReply {
        let player_id = match parse_player_id(raw_player_id) {
            Ok(id) => id,
            Err(e) => {
                warn!(reason = %e, "Player login rejected (reason=invalid_player_id)");
                return LoginReply::new(LoginStatus::InvalidRequest, MSG_INVALID_PLAYER_ID);
            }
        };

        let session = PlayerSession::new(player_id, self.clock.now());
        if self.store.insert_if_absent(&session).await {
            info!(player_id = %player_id, result = "accepted", "Player session created");
            return LoginReply::new(LoginStatus::Accepted, MSG_ACCEPTED);
        }

        // The failed insert is either a conflict or a fault; only an existing
        // row proves the former.
        match self.store.find_by_player_id(player_id).await {
            Some(existing) => {
                info!(
                    player_id = %player_id,
                    connected_at = %existing.connected_at,
                    reason = "already_online",
                    "Player session rejected"
                );
                LoginReply::new(LoginStatus::AlreadyOnline, MSG_ALREADY_ONLINE)
            }
            None => {
                error!(player_id = %player_id, "Player session verification failed");
                LoginReply::new(LoginStatus::Error, MSG_VERIFY_FAILED)
            }
        }
    }

    /// Mark the player offline.
    pub async fn logout(&self, raw_player_id: &str) -> LogoutReply {
        let player_id = match parse_player_id(raw_player_id) {
            Ok(id) => id,
            Err(e) => {
                warn!(reason = %e, "Player logout rejected (reason=invalid_player_id)");
                return LogoutReply::new(false, MSG_INVALID_PLAYER_ID);
            }
        };

        if self.store.delete_by_player_id(player_id).await {
            info!(player_id = %player_id, result = "logout", "Player session removed");
            LogoutReply::new(true, MSG_REMOVED)
        } else {
            debug!(player_id = %player_id, reason = "not_found", "Player logout had no session");
            LogoutReply::new(false, MSG_NOT_FOUND)
        }
    }
}
