//! Player presence service
//!
//! Tracks which players are online. A player is admitted by atomically
//! claiming a row in the session store and released by deleting it; the
//! store's uniqueness constraint guarantees a player is online at most once.

pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod validation;

/// Embedded schema migrations for the `player_sessions` table
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
