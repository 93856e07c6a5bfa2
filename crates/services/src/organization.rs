use crate::assignment::{AssignmentOutcome, AssignmentPolicy};
use crate::error::{Result, ServiceError};
use crate::join_code;
use crate::notification::NotificationService;
use mentorship_database::{
    AssignmentRepository, Database, MemberRepository, OrganizationRepository,
};
use mentorship_models::{is_valid_join_code, roles, CreateOrganization, Member, Organization};
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

/// What joining an organization produced. `assigned_mentor` is None for
/// mentors, and for mentees who joined an organization that has no
/// mentors yet.
#[derive(Debug, Clone, Serialize)]
pub struct JoinOutcome {
    pub organization: Organization,
    pub member: Member,
    pub assigned_mentor: Option<Member>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrganizationRoster {
    pub organization: Organization,
    pub mentors: Vec<Member>,
    pub mentees: Vec<Member>,
}

pub struct OrganizationService {
    org_repo: OrganizationRepository,
    member_repo: MemberRepository,
    assignment_repo: AssignmentRepository,
    notifications: NotificationService,
}

impl OrganizationService {
    pub fn new(db: &Database, notifications: NotificationService) -> Self {
        let pool = db.pool().clone();

        Self {
            org_repo: OrganizationRepository::new(pool.clone()),
            member_repo: MemberRepository::new(pool.clone()),
            assignment_repo: AssignmentRepository::new(pool),
            notifications,
        }
    }

    /// Create an organization with a fresh join code. The creator joins
    /// it immediately.
    pub async fn create_organization(
        &self,
        request: &CreateOrganization,
        creator_id: Uuid,
    ) -> Result<Organization> {
        request.validate()?;

        let creator = self.member_repo.find_by_id(creator_id).await?;
        if creator.organization_id.is_some() {
            return Err(ServiceError::AlreadyExists(
                "creator is already a member of an organization".to_string(),
            ));
        }

        if self.org_repo.name_exists(&request.name).await? {
            return Err(ServiceError::AlreadyExists(format!(
                "organization named '{}' already exists",
                request.name
            )));
        }

        let code = join_code::generate(&self.org_repo).await?;
        let organization = self
            .org_repo
            .create(&request.name, &request.description, &code, Some(creator_id))
            .await?;

        self.member_repo
            .set_organization(creator_id, organization.id)
            .await?;

        tracing::info!(
            organization_id = %organization.id,
            name = %organization.name,
            "organization created"
        );

        Ok(organization)
    }

    /// Join an organization by its code. Mentees are auto-assigned to
    /// the least-loaded mentor when one exists.
    pub async fn join_organization(&self, join_code: &str, member_id: Uuid) -> Result<JoinOutcome> {
        let code = join_code.trim().to_uppercase();
        if !is_valid_join_code(&code) {
            return Err(ServiceError::InvalidInput(
                "join codes are 8 letters and digits".to_string(),
            ));
        }

        let member = self.member_repo.find_by_id(member_id).await?;
        if member.organization_id.is_some() {
            return Err(ServiceError::AlreadyExists(
                "already a member of an organization".to_string(),
            ));
        }

        let organization = self
            .org_repo
            .find_by_join_code(&code)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound("no active organization with that join code".to_string())
            })?;

        let member = self
            .member_repo
            .set_organization(member_id, organization.id)
            .await?;

        if member.role == roles::MENTOR {
            tracing::info!(
                member_id = %member.id,
                organization_id = %organization.id,
                "mentor joined organization"
            );
            return Ok(JoinOutcome {
                organization,
                member,
                assigned_mentor: None,
            });
        }

        let policy =
            AssignmentPolicy::new(self.member_repo.clone(), self.assignment_repo.clone());
        let outcome = policy
            .assign_least_loaded(
                organization.id,
                &member,
                "Auto-assigned on joining organization",
            )
            .await?;

        let assigned_mentor = match outcome {
            AssignmentOutcome::Assigned(assignment) => {
                let mentor = self.member_repo.find_by_id(assignment.mentor_id).await?;
                self.notifications.notify_assignment(&mentor, &member).await;
                Some(mentor)
            }
            AssignmentOutcome::NoMentorsAvailable => {
                tracing::info!(
                    member_id = %member.id,
                    organization_id = %organization.id,
                    "mentee joined but no mentors available"
                );
                None
            }
        };

        Ok(JoinOutcome {
            organization,
            member,
            assigned_mentor,
        })
    }

    /// Organization detail plus its mentors and mentees.
    pub async fn roster(&self, organization_id: Uuid) -> Result<OrganizationRoster> {
        let organization = self.org_repo.find_by_id(organization_id).await?;
        let mentors = self
            .member_repo
            .list_by_role(organization_id, roles::MENTOR)
            .await?;
        let mentees = self
            .member_repo
            .list_by_role(organization_id, roles::MENTEE)
            .await?;

        Ok(OrganizationRoster {
            organization,
            mentors,
            mentees,
        })
    }
}
