//! Presence service models

pub mod presence;
pub mod session;

// Re-export for convenience
pub use presence::{LoginReply, LoginStatus, LogoutReply, PlayerIdRequest};
pub use session::PlayerSession;
