use crate::error::{Result, ServiceError};
use mentorship_database::{Database, MemberRepository, OrganizationRepository};
use mentorship_models::{
    roles, Member, Organization, RegisterMember, UpdateNotificationPreferences,
};
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

/// A member plus the context their profile page shows.
#[derive(Debug, Clone, Serialize)]
pub struct MemberProfile {
    pub member: Member,
    pub organization: Option<Organization>,
    /// The currently assigned mentor; always None for mentors.
    pub current_mentor: Option<Member>,
}

/// Role-dependent dashboard payload.
#[derive(Debug, Clone, Serialize)]
pub struct MemberDashboard {
    pub member: Member,
    pub organization: Option<Organization>,
    /// Mentors: their active mentees. Empty for mentees.
    pub mentees: Vec<Member>,
    /// Mentees: their current mentor.
    pub current_mentor: Option<Member>,
}

pub struct MemberService {
    member_repo: MemberRepository,
    org_repo: OrganizationRepository,
}

impl MemberService {
    pub fn new(db: &Database) -> Self {
        let pool = db.pool().clone();

        Self {
            member_repo: MemberRepository::new(pool.clone()),
            org_repo: OrganizationRepository::new(pool),
        }
    }

    /// Register a member. The role is fixed here for good.
    pub async fn register(&self, request: &RegisterMember) -> Result<Member> {
        request.validate()?;

        if !roles::is_valid(&request.role) {
            return Err(ServiceError::InvalidInput(format!(
                "Invalid role: {}. Must be one of: mentor, mentee",
                request.role
            )));
        }

        if self.member_repo.email_exists(&request.email).await? {
            return Err(ServiceError::AlreadyExists(
                "a member with this email already exists".to_string(),
            ));
        }

        let member = self.member_repo.create(request).await?;

        tracing::info!(
            member_id = %member.id,
            role = %member.role,
            "member registered"
        );

        Ok(member)
    }

    pub async fn profile(&self, member_id: Uuid) -> Result<MemberProfile> {
        let member = self.member_repo.find_by_id(member_id).await?;

        let organization = match member.organization_id {
            Some(org_id) => Some(self.org_repo.find_by_id(org_id).await?),
            None => None,
        };

        let current_mentor = if member.role == roles::MENTEE {
            self.member_repo.current_mentor(member.id).await?
        } else {
            None
        };

        Ok(MemberProfile {
            member,
            organization,
            current_mentor,
        })
    }

    /// Mentors see their active mentees; mentees see their mentor.
    pub async fn dashboard(&self, member_id: Uuid) -> Result<MemberDashboard> {
        let member = self.member_repo.find_by_id(member_id).await?;

        let organization = match member.organization_id {
            Some(org_id) => Some(self.org_repo.find_by_id(org_id).await?),
            None => None,
        };

        let (mentees, current_mentor) = if member.role == roles::MENTOR {
            (self.member_repo.active_mentees(member.id).await?, None)
        } else {
            (
                Vec::new(),
                self.member_repo.current_mentor(member.id).await?,
            )
        };

        Ok(MemberDashboard {
            member,
            organization,
            mentees,
            current_mentor,
        })
    }

    pub async fn update_notification_preferences(
        &self,
        member_id: Uuid,
        prefs: &UpdateNotificationPreferences,
    ) -> Result<Member> {
        if prefs.sms_notifications_enabled && prefs.phone_number.is_none() {
            return Err(ServiceError::InvalidInput(
                "SMS notifications require a phone number".to_string(),
            ));
        }

        Ok(self
            .member_repo
            .update_notification_preferences(member_id, prefs)
            .await?)
    }
}
