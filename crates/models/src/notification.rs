use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A recorded notification. The row is written before delivery is
/// attempted; `sent_successfully` and `error_message` describe what the
/// dispatcher managed to do afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    pub id: Uuid,
    pub recipient_id: Uuid,
    pub notification_type: String, // 'email', 'sms' or 'in_app'
    pub trigger_event: String,
    pub subject: String,
    pub message: String,
    pub sent_successfully: bool,
    pub error_message: Option<String>,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
}

/// Fields needed to record a notification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewNotification {
    pub recipient_id: Uuid,
    pub notification_type: String,
    pub trigger_event: String,
    pub subject: String,
    pub message: String,
}

/// Delivery channels
pub mod notification_types {
    pub const EMAIL: &str = "email";
    pub const SMS: &str = "sms";
    pub const IN_APP: &str = "in_app";

    pub fn is_valid(kind: &str) -> bool {
        matches!(kind, EMAIL | SMS | IN_APP)
    }
}

/// Events that produce notifications
pub mod trigger_events {
    pub const MORNING_REMINDER: &str = "morning_reminder";
    pub const EVENING_REMINDER: &str = "evening_reminder";
    pub const TODO_SUBMITTED: &str = "todo_submitted";
    pub const REPORT_SUBMITTED: &str = "report_submitted";
    pub const MESSAGE_RECEIVED: &str = "message_received";
    pub const MENTOR_ASSIGNED: &str = "mentor_assigned";

    pub fn is_valid(event: &str) -> bool {
        matches!(
            event,
            MORNING_REMINDER
                | EVENING_REMINDER
                | TODO_SUBMITTED
                | REPORT_SUBMITTED
                | MESSAGE_RECEIVED
                | MENTOR_ASSIGNED
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_kinds_and_events() {
        assert!(notification_types::is_valid("email"));
        assert!(notification_types::is_valid("sms"));
        assert!(notification_types::is_valid("in_app"));
        assert!(!notification_types::is_valid("carrier_pigeon"));

        assert!(trigger_events::is_valid("mentor_assigned"));
        assert!(trigger_events::is_valid("morning_reminder"));
        assert!(!trigger_events::is_valid("unknown_event"));
    }
}
