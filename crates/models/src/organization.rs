use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Number of characters in an organization join code.
pub const JOIN_CODE_LENGTH: usize = 8;

lazy_static! {
    static ref JOIN_CODE_RE: Regex = Regex::new(r"^[A-Z0-9]{8}$").unwrap();
}

/// Returns true when `code` has the shape of a join code (8 uppercase
/// alphanumerics). Does not check existence.
pub fn is_valid_join_code(code: &str) -> bool {
    JOIN_CODE_RE.is_match(code)
}

/// An organization grouping mentors and mentees under one join code.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Organization {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub join_code: String,
    pub is_active: bool,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Request to create a new organization
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateOrganization {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(max = 2000))]
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_code_shape() {
        assert!(is_valid_join_code("A1B2C3D4"));
        assert!(is_valid_join_code("ZZZZ9999"));
        assert!(!is_valid_join_code("a1b2c3d4")); // lowercase
        assert!(!is_valid_join_code("A1B2C3D")); // too short
        assert!(!is_valid_join_code("A1B2C3D45")); // too long
        assert!(!is_valid_join_code("A1B2-3D4")); // punctuation
    }
}
