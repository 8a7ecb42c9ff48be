//! Application state shared across handlers

use sqlx::PgPool;

use crate::service::PresenceService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub presence: PresenceService,
    /// Pool probed by the health endpoint; absent when running on the in-memory store
    pub db_pool: Option<PgPool>,
}

impl AppState {
    pub fn new(presence: PresenceService) -> Self {
        Self {
            presence,
            db_pool: None,
        }
    }

    pub fn with_db_pool(mut self, pool: PgPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
