use crate::error::{Result, ServiceError};
use crate::notification::NotificationService;
use mentorship_database::{ConversationRepository, Database, MemberRepository};
use mentorship_models::{
    roles, ChatMessage, Conversation, ConversationSummary, Member, NewChatMessage,
};
use uuid::Uuid;
use validator::Validate;

/// Who may open a conversation with whom. Both members must share an
/// organization; mentees can reach mentors, mentors can reach other
/// mentors and their own active mentees.
pub fn can_message(sender: &Member, recipient: &Member, sender_mentee_ids: &[Uuid]) -> bool {
    let same_org = match (sender.organization_id, recipient.organization_id) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    };
    if !same_org || sender.id == recipient.id {
        return false;
    }

    match (sender.role.as_str(), recipient.role.as_str()) {
        (roles::MENTEE, roles::MENTOR) => true,
        (roles::MENTOR, roles::MENTOR) => true,
        (roles::MENTOR, roles::MENTEE) => sender_mentee_ids.contains(&recipient.id),
        _ => false,
    }
}

pub struct MessagingService {
    conversation_repo: ConversationRepository,
    member_repo: MemberRepository,
    notifications: NotificationService,
}

impl MessagingService {
    pub fn new(db: &Database, notifications: NotificationService) -> Self {
        let pool = db.pool().clone();

        Self {
            conversation_repo: ConversationRepository::new(pool.clone()),
            member_repo: MemberRepository::new(pool),
            notifications,
        }
    }

    /// Open (or return the existing) conversation between two members.
    pub async fn start_conversation(
        &self,
        initiator_id: Uuid,
        other_id: Uuid,
    ) -> Result<Conversation> {
        let initiator = self.member_repo.find_by_id(initiator_id).await?;
        let other = self.member_repo.find_by_id(other_id).await?;

        let mentee_ids: Vec<Uuid> = if initiator.role == roles::MENTOR {
            self.member_repo
                .active_mentees(initiator.id)
                .await?
                .into_iter()
                .map(|m| m.id)
                .collect()
        } else {
            Vec::new()
        };

        if !can_message(&initiator, &other, &mentee_ids) {
            return Err(ServiceError::Forbidden(
                "you can only message people in your organization".to_string(),
            ));
        }

        if let Some(existing) = self
            .conversation_repo
            .find_pair(initiator_id, other_id)
            .await?
        {
            return Ok(existing);
        }

        Ok(self.conversation_repo.create(initiator_id, other_id).await?)
    }

    /// Append a message and bump the conversation's activity timestamp.
    pub async fn send_message(
        &self,
        conversation_id: Uuid,
        sender_id: Uuid,
        request: &NewChatMessage,
    ) -> Result<ChatMessage> {
        request.validate()?;
        if request.content.trim().is_empty() {
            return Err(ServiceError::InvalidInput(
                "message content cannot be blank".to_string(),
            ));
        }

        let conversation = self.conversation_repo.find_by_id(conversation_id).await?;
        if !conversation.has_participant(sender_id) {
            return Err(ServiceError::Forbidden(
                "you are not part of this conversation".to_string(),
            ));
        }

        let message = self
            .conversation_repo
            .insert_message(conversation_id, sender_id, request.content.trim())
            .await?;

        // Explicit activity bump instead of a save-time hook.
        self.conversation_repo.touch(conversation_id).await?;

        let sender = self.member_repo.find_by_id(sender_id).await?;
        let recipient = self
            .member_repo
            .find_by_id(conversation.other_participant(sender_id))
            .await?;
        self.notifications
            .notify_message_received(&recipient, &sender)
            .await;

        Ok(message)
    }

    /// A conversation's messages, oldest first. Viewing marks the other
    /// participant's messages as read.
    pub async fn messages(&self, conversation_id: Uuid, member_id: Uuid) -> Result<Vec<ChatMessage>> {
        let conversation = self.conversation_repo.find_by_id(conversation_id).await?;
        if !conversation.has_participant(member_id) {
            return Err(ServiceError::Forbidden(
                "you are not part of this conversation".to_string(),
            ));
        }

        self.conversation_repo
            .mark_read(conversation_id, member_id)
            .await?;

        Ok(self.conversation_repo.messages(conversation_id).await?)
    }

    /// All of a member's conversations, latest activity first.
    pub async fn inbox(&self, member_id: Uuid) -> Result<Vec<ConversationSummary>> {
        let conversations = self.conversation_repo.list_for_member(member_id).await?;

        let mut summaries = Vec::with_capacity(conversations.len());
        for conversation in conversations {
            let other = self
                .member_repo
                .find_by_id(conversation.other_participant(member_id))
                .await?;
            let last_message = self.conversation_repo.last_message(conversation.id).await?;
            let unread_count = self
                .conversation_repo
                .unread_count(conversation.id, member_id)
                .await?;

            summaries.push(ConversationSummary {
                conversation,
                other_participant: other,
                last_message,
                unread_count,
            });
        }

        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn org_a() -> Uuid {
        Uuid::from_u128(0xA)
    }

    fn org_b() -> Uuid {
        Uuid::from_u128(0xB)
    }

    fn member(id: u128, role: &str, organization_id: Option<Uuid>) -> Member {
        Member {
            id: Uuid::from_u128(id),
            email: format!("member-{}@example.com", id),
            display_name: format!("Member {}", id),
            role: role.to_string(),
            organization_id,
            phone_number: None,
            email_notifications_enabled: true,
            sms_notifications_enabled: false,
            bio: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_mentee_can_message_mentor_in_same_org() {
        let mentee = member(1, roles::MENTEE, Some(org_a()));
        let mentor = member(2, roles::MENTOR, Some(org_a()));

        assert!(can_message(&mentee, &mentor, &[]));
    }

    #[test]
    fn test_mentee_cannot_message_mentee() {
        let a = member(1, roles::MENTEE, Some(org_a()));
        let b = member(2, roles::MENTEE, Some(org_a()));

        assert!(!can_message(&a, &b, &[]));
    }

    #[test]
    fn test_mentor_can_message_own_mentee_only() {
        let mentor = member(1, roles::MENTOR, Some(org_a()));
        let own = member(2, roles::MENTEE, Some(org_a()));
        let foreign = member(3, roles::MENTEE, Some(org_a()));

        let mentee_ids = vec![own.id];
        assert!(can_message(&mentor, &own, &mentee_ids));
        assert!(!can_message(&mentor, &foreign, &mentee_ids));
    }

    #[test]
    fn test_mentors_can_message_each_other() {
        let a = member(1, roles::MENTOR, Some(org_a()));
        let b = member(2, roles::MENTOR, Some(org_a()));

        assert!(can_message(&a, &b, &[]));
    }

    #[test]
    fn test_cross_org_messaging_is_blocked() {
        let mentee = member(1, roles::MENTEE, Some(org_a()));
        let mentor = member(2, roles::MENTOR, Some(org_b()));

        assert!(!can_message(&mentee, &mentor, &[]));
    }

    #[test]
    fn test_unaffiliated_members_cannot_message() {
        let mentee = member(1, roles::MENTEE, None);
        let mentor = member(2, roles::MENTOR, Some(org_a()));

        assert!(!can_message(&mentee, &mentor, &[]));
        assert!(!can_message(&mentor, &mentee, &[]));
    }
}
