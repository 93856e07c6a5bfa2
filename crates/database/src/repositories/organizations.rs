use crate::error::{DatabaseError, Result};
use mentorship_models::Organization;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct OrganizationRepository {
    pool: PgPool,
}

impl OrganizationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new organization with an already-generated join code
    pub async fn create(
        &self,
        name: &str,
        description: &str,
        join_code: &str,
        created_by: Option<Uuid>,
    ) -> Result<Organization> {
        let org = sqlx::query_as::<_, Organization>(
            r#"
            INSERT INTO organizations (name, description, join_code, created_by, is_active)
            VALUES ($1, $2, $3, $4, TRUE)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(join_code)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(org)
    }

    /// Find organization by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Organization> {
        let org = sqlx::query_as::<_, Organization>("SELECT * FROM organizations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Organization", &id.to_string()))?;

        Ok(org)
    }

    /// Find an active organization by its join code
    pub async fn find_by_join_code(&self, join_code: &str) -> Result<Option<Organization>> {
        let org = sqlx::query_as::<_, Organization>(
            "SELECT * FROM organizations WHERE join_code = $1 AND is_active = TRUE",
        )
        .bind(join_code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(org)
    }

    /// Check whether a join code is already taken (active or not)
    pub async fn join_code_exists(&self, join_code: &str) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM organizations WHERE join_code = $1)",
        )
        .bind(join_code)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// Check whether an organization name is already taken
    pub async fn name_exists(&self, name: &str) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM organizations WHERE name = $1)")
                .bind(name)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    /// List organizations, newest first - paginated
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Organization>> {
        let orgs = sqlx::query_as::<_, Organization>(
            r#"
            SELECT * FROM organizations
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(orgs)
    }
}
