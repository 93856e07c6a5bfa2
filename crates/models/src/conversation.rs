use crate::member::Member;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A direct-message thread between two members. The pair is unique
/// regardless of orientation; `updated_at` is bumped by the message
/// write path so inboxes sort by latest activity.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Conversation {
    pub id: Uuid,
    pub participant1_id: Uuid,
    pub participant2_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    /// The participant other than `member_id`.
    pub fn other_participant(&self, member_id: Uuid) -> Uuid {
        if self.participant1_id == member_id {
            self.participant2_id
        } else {
            self.participant1_id
        }
    }

    pub fn has_participant(&self, member_id: Uuid) -> bool {
        self.participant1_id == member_id || self.participant2_id == member_id
    }
}

/// A single message within a conversation
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ChatMessage {
    pub id: Uuid,
    pub conversation_id: Uuid,
    pub sender_id: Uuid,
    pub content: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// Request to send a message
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewChatMessage {
    #[validate(length(min = 1, max = 10000))]
    pub content: String,
}

/// One inbox row: a conversation annotated with what the list view needs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub conversation: Conversation,
    pub other_participant: Member,
    pub last_message: Option<ChatMessage>,
    pub unread_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conversation(p1: Uuid, p2: Uuid) -> Conversation {
        Conversation {
            id: Uuid::new_v4(),
            participant1_id: p1,
            participant2_id: p2,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_other_participant() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let conv = conversation(a, b);

        assert_eq!(conv.other_participant(a), b);
        assert_eq!(conv.other_participant(b), a);
        assert!(conv.has_participant(a));
        assert!(conv.has_participant(b));
        assert!(!conv.has_participant(Uuid::new_v4()));
    }
}
