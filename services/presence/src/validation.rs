//! Input validation utilities

use thiserror::Error;
use uuid::Uuid;

/// Length of the hyphenated `8-4-4-4-12` UUID form
const HYPHENATED_LEN: usize = 36;

/// Reasons a raw player identifier is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerIdError {
    #[error("player_id is empty")]
    Empty,
    #[error("player_id is not a hyphenated UUID")]
    Malformed,
}

/// Parse a caller-supplied player identifier.
///
/// Surrounding whitespace is ignored and hex digits may be either case. Only
/// the hyphenated form is accepted; simple, braced and URN encodings are
/// rejected.
pub fn parse_player_id(raw: &str) -> Result<Uuid, PlayerIdError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PlayerIdError::Empty);
    }

    if trimmed.len() != HYPHENATED_LEN {
        return Err(PlayerIdError::Malformed);
    }

    Uuid::try_parse(trimmed).map_err(|_| PlayerIdError::Malformed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

    #[test]
    fn test_parse_canonical_id() {
        let id = parse_player_id(ID).unwrap();
        assert_eq!(id.to_string(), ID);
    }

    #[test]
    fn test_parse_ignores_surrounding_whitespace() {
        let padded = parse_player_id(&format!("  {ID} \t\n")).unwrap();
        assert_eq!(padded, parse_player_id(ID).unwrap());
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let upper = parse_player_id(&ID.to_uppercase()).unwrap();
        assert_eq!(upper, parse_player_id(ID).unwrap());
    }

    #[test]
    fn test_parse_rejects_empty_and_blank() {
        assert_eq!(parse_player_id(""), Err(PlayerIdError::Empty));
        assert_eq!(parse_player_id("   \t "), Err(PlayerIdError::Empty));
    }

    #[test]
    fn test_parse_rejects_non_uuid_text() {
        for raw in [
            "not-a-uuid",
            "bad-id",
            "3fa85f64-5717-4562-b3fc-2c963f66afaZ",
            "3fa85f64-5717-4562-b3fc-2c963f66afa",
            "3fa85f64-5717-4562-b3fc-2c963f66afa6-",
            "3fa85f64 5717 4562 b3fc 2c963f66afa6",
        ] {
            assert_eq!(parse_player_id(raw), Err(PlayerIdError::Malformed), "{raw}");
        }
    }

    #[test]
    fn test_parse_rejects_other_uuid_encodings() {
        for raw in [
            "3fa85f6457174562b3fc2c963f66afa6",
            "{3fa85f64-5717-4562-b3fc-2c963f66afa6}",
            "urn:uuid:3fa85f64-5717-4562-b3fc-2c963f66afa6",
        ] {
            assert_eq!(parse_player_id(raw), Err(PlayerIdError::Malformed), "{raw}");
        }
    }
}
