//! Session store contract and its implementations
//!
//! Every method is a single atomic unit of work. Storage faults never cross
//! this boundary: implementations log them and report a negative or empty
//! result instead.

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::PlayerSession;

pub mod memory;
pub mod postgres;

pub use memory::MemorySessionStore;
pub use postgres::PgSessionStore;

/// Durable mapping from player id to live session.
#[async_trait]
pub trait SessionStore: Send + Sync + 'static {
    /// Insert `session` unless a row for its player already exists.
    ///
    /// Returns `true` iff a new row was created. `false` covers both an
    /// existing row and a failed write; callers cannot tell the two apart
    /// from this result alone.
    async fn insert_if_absent(&self, session: &PlayerSession) -> bool;

    /// Fetch the live session for `player_id`, if any.
    async fn find_by_player_id(&self, player_id: Uuid) -> Option<PlayerSession>;

    /// Remove the session for `player_id`. Returns `true` iff a row was removed.
    async fn delete_by_player_id(&self, player_id: Uuid) -> bool;
}
