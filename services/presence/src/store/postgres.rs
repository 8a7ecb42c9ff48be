//! PostgreSQL-backed session store

use async_trait::async_trait;
use common::error::{DatabaseError, DatabaseResult};
use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;

use super::SessionStore;
use crate::models::PlayerSession;

/// Session store over the `player_sessions` table.
///
/// The primary key on `player_id` is what keeps a player online at most once;
/// concurrent inserts for the same id resolve to a single row.
#[derive(Clone)]
pub struct PgSessionStore {
    pool: PgPool,
}

impl PgSessionStore {
    /// Create a new session store
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn try_insert(&self, session: &PlayerSession) -> DatabaseResult<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO player_sessions (player_id, connected_at)
            VALUES ($1, $2)
            ON CONFLICT (player_id) DO NOTHING
            "#,
        )
        .bind(session.player_id)
        .bind(session.connected_at)
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(result.rows_affected() > 0)
    }

    async fn try_find(&self, player_id: Uuid) -> DatabaseResult<Option<PlayerSession>> {
        sqlx::query_as::<_, PlayerSession>(
            r#"
            SELECT player_id, connected_at
            FROM player_sessions
            WHERE player_id = $1
            "#,
        )
        .bind(player_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::Query)
    }

    async fn try_delete(&self, player_id: Uuid) -> DatabaseResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM player_sessions
            WHERE player_id = $1
            "#,
        )
        .bind(player_id)
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl SessionStore for PgSessionStore {
    async fn insert_if_absent(&self, session: &PlayerSession) -> bool {
        match self.try_insert(session).await {
            Ok(inserted) => inserted,
            Err(e) => {
                error!(
                    player_id = %session.player_id,
                    reason = "sql_error",
                    error = %e,
                    "Player session insert failed"
                );
                false
            }
        }
    }

    async fn find_by_player_id(&self, player_id: Uuid) -> Option<PlayerSession> {
        self.try_find(player_id).await.unwrap_or_else(|e| {
            error!(
                player_id = %player_id,
                reason = "sql_error",
                error = %e,
                "Player session fetch failed"
            );
            None
        })
    }

    async fn delete_by_player_id(&self, player_id: Uuid) -> bool {
        self.try_delete(player_id).await.unwrap_or_else(|e| {
            error!(
                player_id = %player_id,
                reason = "sql_error",
                error = %e,
                "Player session delete failed"
            );
            false
        })
    }
}
