use crate::error::{DatabaseError, Result};
use mentorship_models::{Member, RegisterMember, UpdateNotificationPreferences};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct MemberRepository {
    pool: PgPool,
}

impl MemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new member. Role is fixed for the member's lifetime.
    pub async fn create(&self, request: &RegisterMember) -> Result<Member> {
        let member = sqlx::query_as::<_, Member>(
            r#"
            INSERT INTO members
                (email, display_name, role, phone_number, bio,
                 email_notifications_enabled, sms_notifications_enabled)
            VALUES ($1, $2, $3, $4, $5, TRUE, FALSE)
            RETURNING *
            "#,
        )
        .bind(&request.email)
        .bind(&request.display_name)
        .bind(&request.role)
        .bind(&request.phone_number)
        .bind(&request.bio)
        .fetch_one(&self.pool)
        .await?;

        Ok(member)
    }

    /// Find member by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Member> {
        let member = sqlx::query_as::<_, Member>("SELECT * FROM members WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Member", &id.to_string()))?;

        Ok(member)
    }

    /// Check if a member with this email already exists
    pub async fn email_exists(&self, email: &str) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM members WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    /// List members of an organization with a given role, ordered by
    /// ascending id so callers see a deterministic order.
    pub async fn list_by_role(&self, organization_id: Uuid, role: &str) -> Result<Vec<Member>> {
        let members = sqlx::query_as::<_, Member>(
            r#"
            SELECT * FROM members
            WHERE organization_id = $1 AND role = $2
            ORDER BY id ASC
            "#,
        )
        .bind(organization_id)
        .bind(role)
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }

    /// Count of a mentor's currently active mentees
    pub async fn active_mentee_count(&self, mentor_id: Uuid) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM mentor_assignments
            WHERE mentor_id = $1 AND is_active = TRUE
            "#,
        )
        .bind(mentor_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// The mentees currently assigned to a mentor
    pub async fn active_mentees(&self, mentor_id: Uuid) -> Result<Vec<Member>> {
        let members = sqlx::query_as::<_, Member>(
            r#"
            SELECT m.* FROM members m
            INNER JOIN mentor_assignments a ON a.mentee_id = m.id
            WHERE a.mentor_id = $1 AND a.is_active = TRUE
            ORDER BY m.id ASC
            "#,
        )
        .bind(mentor_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }

    /// The mentor currently assigned to a mentee, if any
    pub async fn current_mentor(&self, mentee_id: Uuid) -> Result<Option<Member>> {
        let mentor = sqlx::query_as::<_, Member>(
            r#"
            SELECT m.* FROM members m
            INNER JOIN mentor_assignments a ON a.mentor_id = m.id
            WHERE a.mentee_id = $1 AND a.is_active = TRUE
            "#,
        )
        .bind(mentee_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(mentor)
    }

    /// Put a member into an organization
    pub async fn set_organization(&self, member_id: Uuid, organization_id: Uuid) -> Result<Member> {
        let member = sqlx::query_as::<_, Member>(
            r#"
            UPDATE members
            SET organization_id = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(member_id)
        .bind(organization_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Member", &member_id.to_string()))?;

        Ok(member)
    }

    /// Update a member's notification preferences
    pub async fn update_notification_preferences(
        &self,
        member_id: Uuid,
        prefs: &UpdateNotificationPreferences,
    ) -> Result<Member> {
        let member = sqlx::query_as::<_, Member>(
            r#"
            UPDATE members
            SET email_notifications_enabled = $2,
                sms_notifications_enabled = $3,
                phone_number = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(member_id)
        .bind(prefs.email_notifications_enabled)
        .bind(prefs.sms_notifications_enabled)
        .bind(&prefs.phone_number)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Member", &member_id.to_string()))?;

        Ok(member)
    }

    /// All mentees who opted into email notifications, across every
    /// organization. Used by the reminder sweeps.
    pub async fn mentees_with_email_enabled(&self) -> Result<Vec<Member>> {
        let members = sqlx::query_as::<_, Member>(
            r#"
            SELECT * FROM members
            WHERE role = 'mentee' AND email_notifications_enabled = TRUE
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }
}
