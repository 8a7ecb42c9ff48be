//! Request and reply payloads for the login and logout operations

use serde::{Deserialize, Serialize};

/// Login outcome reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoginStatus {
    /// The identifier was empty or not a UUID
    InvalidRequest,
    /// A new session was created
    Accepted,
    /// A session for the player already exists
    AlreadyOnline,
    /// The insert failed and no existing session could be found
    Error,
}

/// Request body shared by login and logout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerIdRequest {
    #[serde(default)]
    pub player_id: String,
}

/// Reply for a login attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginReply {
    pub status: LoginStatus,
    pub message: String,
}

impl LoginReply {
    pub fn new(status: LoginStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// Reply for a logout attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoutReply {
    pub removed: bool,
    pub message: String,
}

impl LogoutReply {
    pub fn new(removed: bool, message: impl Into<String>) -> Self {
        Self {
            removed,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_status_wire_names() {
        assert_eq!(
            serde_json::to_value(LoginStatus::InvalidRequest).unwrap(),
            json!("INVALID_REQUEST")
        );
        assert_eq!(
            serde_json::to_value(LoginStatus::AlreadyOnline).unwrap(),
            json!("ALREADY_ONLINE")
        );
    }

    #[test]
    fn test_missing_player_id_defaults_to_empty() {
        let request: PlayerIdRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(request.player_id, "");
    }
}
