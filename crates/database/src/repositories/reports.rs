use crate::error::{DatabaseError, Result};
use chrono::NaiveDate;
use mentorship_models::{DailyReport, SubmitDailyReport};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_mentee_and_date(
        &self,
        mentee_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<DailyReport>> {
        let report = sqlx::query_as::<_, DailyReport>(
            "SELECT * FROM daily_reports WHERE mentee_id = $1 AND report_date = $2",
        )
        .bind(mentee_id)
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(report)
    }

    pub async fn create(
        &self,
        mentee_id: Uuid,
        date: NaiveDate,
        request: &SubmitDailyReport,
    ) -> Result<DailyReport> {
        let report = sqlx::query_as::<_, DailyReport>(
            r#"
            INSERT INTO daily_reports
                (mentee_id, report_date, mood, achievements, challenges, learnings, next_steps)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(mentee_id)
        .bind(date)
        .bind(request.mood)
        .bind(&request.achievements)
        .bind(&request.challenges)
        .bind(&request.learnings)
        .bind(&request.next_steps)
        .fetch_one(&self.pool)
        .await?;

        Ok(report)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<DailyReport> {
        let report = sqlx::query_as::<_, DailyReport>("SELECT * FROM daily_reports WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("DailyReport", &id.to_string()))?;

        Ok(report)
    }

    /// A mentee's reports, newest first
    pub async fn list_for_mentee(&self, mentee_id: Uuid) -> Result<Vec<DailyReport>> {
        let reports = sqlx::query_as::<_, DailyReport>(
            r#"
            SELECT * FROM daily_reports
            WHERE mentee_id = $1
            ORDER BY report_date DESC
            "#,
        )
        .bind(mentee_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reports)
    }

    pub async fn set_feedback(&self, id: Uuid, feedback: &str) -> Result<DailyReport> {
        let report = sqlx::query_as::<_, DailyReport>(
            r#"
            UPDATE daily_reports
            SET mentor_feedback = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(feedback)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("DailyReport", &id.to_string()))?;

        Ok(report)
    }

    /// The given mentees' reports for one date
    pub async fn reports_for_mentees(
        &self,
        mentee_ids: &[Uuid],
        date: NaiveDate,
    ) -> Result<Vec<DailyReport>> {
        let reports = sqlx::query_as::<_, DailyReport>(
            r#"
            SELECT * FROM daily_reports
            WHERE mentee_id = ANY($1) AND report_date = $2
            ORDER BY mentee_id ASC
            "#,
        )
        .bind(mentee_ids.to_vec())
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(reports)
    }
}
