use crate::error::{DatabaseError, Result};
use mentorship_models::{roles, MentorAssignment, NewAssignment};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct AssignmentRepository {
    pool: PgPool,
}

impl AssignmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a new active assignment for a mentee.
    ///
    /// Runs as one transaction: the mentee's member row is locked
    /// FOR UPDATE so concurrent assignment attempts for the same mentee
    /// serialize, both parties are checked to be in the same
    /// organization (hard failure otherwise, nothing is written), every
    /// other assignment for the mentee is deactivated, and the new row
    /// is inserted active.
    pub async fn create(&self, new: &NewAssignment) -> Result<MentorAssignment> {
        let mut tx = self.pool.begin().await?;

        let mentee: Option<(String, Option<Uuid>)> = sqlx::query_as(
            "SELECT role, organization_id FROM members WHERE id = $1 FOR UPDATE",
        )
        .bind(new.mentee_id)
        .fetch_optional(&mut *tx)
        .await?;

        let (mentee_role, mentee_org) = mentee
            .ok_or_else(|| DatabaseError::not_found("Member", &new.mentee_id.to_string()))?;

        let mentor: Option<(String, Option<Uuid>)> =
            sqlx::query_as("SELECT role, organization_id FROM members WHERE id = $1")
                .bind(new.mentor_id)
                .fetch_optional(&mut *tx)
                .await?;

        let (mentor_role, mentor_org) = mentor
            .ok_or_else(|| DatabaseError::not_found("Member", &new.mentor_id.to_string()))?;

        if mentee_role != roles::MENTEE {
            return Err(DatabaseError::ConstraintViolation(
                "assignment mentee must have the mentee role".to_string(),
            ));
        }
        if mentor_role != roles::MENTOR {
            return Err(DatabaseError::ConstraintViolation(
                "assignment mentor must have the mentor role".to_string(),
            ));
        }

        match (mentee_org, mentor_org) {
            (Some(a), Some(b)) if a == b => {}
            _ => {
                return Err(DatabaseError::ConstraintViolation(
                    "mentor and mentee must belong to the same organization".to_string(),
                ));
            }
        }

        sqlx::query(
            r#"
            UPDATE mentor_assignments
            SET is_active = FALSE
            WHERE mentee_id = $1 AND is_active = TRUE
            "#,
        )
        .bind(new.mentee_id)
        .execute(&mut *tx)
        .await?;

        let assignment = sqlx::query_as::<_, MentorAssignment>(
            r#"
            INSERT INTO mentor_assignments (mentee_id, mentor_id, assigned_by, notes, is_active)
            VALUES ($1, $2, $3, $4, TRUE)
            RETURNING *
            "#,
        )
        .bind(new.mentee_id)
        .bind(new.mentor_id)
        .bind(new.assigned_by)
        .bind(&new.notes)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(assignment)
    }

    /// Full assignment history for a mentee, newest first
    pub async fn history_for_mentee(&self, mentee_id: Uuid) -> Result<Vec<MentorAssignment>> {
        let assignments = sqlx::query_as::<_, MentorAssignment>(
            r#"
            SELECT * FROM mentor_assignments
            WHERE mentee_id = $1
            ORDER BY assigned_at DESC
            "#,
        )
        .bind(mentee_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(assignments)
    }

    /// The mentee's currently active assignment, if any
    pub async fn active_for_mentee(&self, mentee_id: Uuid) -> Result<Option<MentorAssignment>> {
        let assignment = sqlx::query_as::<_, MentorAssignment>(
            r#"
            SELECT * FROM mentor_assignments
            WHERE mentee_id = $1 AND is_active = TRUE
            "#,
        )
        .bind(mentee_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(assignment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::{Database, DatabaseConfig};

    // Exercises the deactivate-then-insert transaction against a real
    // database; the fixture ids must exist beforehand.
    #[tokio::test]
    #[ignore] // Only run with database available
    async fn test_create_keeps_single_active_assignment() {
        let db = Database::new(DatabaseConfig::from_env())
            .await
            .expect("Failed to connect to database");
        let repo = AssignmentRepository::new(db.pool().clone());

        let mentee_id: Uuid = std::env::var("TEST_MENTEE_ID")
            .expect("TEST_MENTEE_ID must be set")
            .parse()
            .unwrap();
        let mentor_id: Uuid = std::env::var("TEST_MENTOR_ID")
            .expect("TEST_MENTOR_ID must be set")
            .parse()
            .unwrap();

        let new = NewAssignment {
            mentee_id,
            mentor_id,
            assigned_by: None,
            notes: "integration test".to_string(),
        };

        repo.create(&new).await.expect("first create failed");
        repo.create(&new).await.expect("second create failed");

        let history = repo.history_for_mentee(mentee_id).await.unwrap();
        let active: Vec<_> = history.iter().filter(|a| a.is_active).collect();
        assert_eq!(active.len(), 1);
    }
}
