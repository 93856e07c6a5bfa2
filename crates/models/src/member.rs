use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A platform member. Every member holds exactly one role for their
/// lifetime and belongs to at most one organization at a time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Member {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    pub role: String, // 'mentor' or 'mentee'
    pub organization_id: Option<Uuid>,
    pub phone_number: Option<String>,
    pub email_notifications_enabled: bool,
    pub sms_notifications_enabled: bool,
    pub bio: String,
    pub created_at: DateTime<Utc>,
}

/// Request to register a new member
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterMember {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 200))]
    pub display_name: String,

    #[validate(length(min = 1, max = 10))]
    pub role: String,

    pub phone_number: Option<String>,

    #[validate(length(max = 2000))]
    #[serde(default)]
    pub bio: String,
}

/// Request to change a member's notification preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateNotificationPreferences {
    pub email_notifications_enabled: bool,
    pub sms_notifications_enabled: bool,
    pub phone_number: Option<String>,
}

/// The two member roles
pub mod roles {
    pub const MENTOR: &str = "mentor";
    pub const MENTEE: &str = "mentee";

    pub fn is_valid(role: &str) -> bool {
        matches!(role, MENTOR | MENTEE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_validity() {
        assert!(roles::is_valid("mentor"));
        assert!(roles::is_valid("mentee"));
        assert!(!roles::is_valid("admin"));
        assert!(!roles::is_valid("Mentor"));
        assert!(!roles::is_valid(""));
    }
}
