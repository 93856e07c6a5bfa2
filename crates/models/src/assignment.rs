use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A mentor-mentee pairing. Rows are never deleted; superseded pairings
/// are kept with `is_active = false` so the full history survives.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MentorAssignment {
    pub id: Uuid,
    pub mentee_id: Uuid,
    pub mentor_id: Uuid,
    pub assigned_by: Option<Uuid>,
    pub assigned_at: DateTime<Utc>,
    pub is_active: bool,
    pub notes: String,
}

/// Request to record a new assignment
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewAssignment {
    pub mentee_id: Uuid,
    pub mentor_id: Uuid,
    pub assigned_by: Option<Uuid>,

    #[validate(length(max = 2000))]
    #[serde(default)]
    pub notes: String,
}
