//! Player session model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A live "player is online" record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct PlayerSession {
    pub player_id: Uuid,
    pub connected_at: DateTime<Utc>,
}

impl PlayerSession {
    pub fn new(player_id: Uuid, connected_at: DateTime<Utc>) -> Self {
        Self {
            player_id,
            connected_at,
        }
    }
}
