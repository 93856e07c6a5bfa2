use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A mentee's todo list for one day. One list per mentee per date.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TodoList {
    pub id: Uuid,
    pub mentee_id: Uuid,
    pub submission_date: NaiveDate,
    pub is_submitted_to_mentor: bool,
    pub mentor_notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A single task on a todo list
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TodoItem {
    pub id: Uuid,
    pub todo_list_id: Uuid,
    pub title: String,
    pub priority: String, // 'low', 'medium' or 'high'
    pub status: String,   // 'pending' or 'completed'
}

/// One item in a list-creation request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewTodoItem {
    #[validate(length(max = 200))]
    pub title: String,

    #[serde(default = "default_priority")]
    pub priority: String,
}

fn default_priority() -> String {
    priorities::MEDIUM.to_string()
}

/// Task priorities
pub mod priorities {
    pub const LOW: &str = "low";
    pub const MEDIUM: &str = "medium";
    pub const HIGH: &str = "high";

    pub fn is_valid(priority: &str) -> bool {
        matches!(priority, LOW | MEDIUM | HIGH)
    }
}

/// Task statuses
pub mod statuses {
    pub const PENDING: &str = "pending";
    pub const COMPLETED: &str = "completed";

    pub fn is_valid(status: &str) -> bool {
        matches!(status, PENDING | COMPLETED)
    }
}
