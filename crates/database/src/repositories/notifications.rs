use crate::error::Result;
use mentorship_models::{NewNotification, Notification};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a notification before any delivery attempt
    pub async fn create(&self, new: &NewNotification) -> Result<Notification> {
        let notification = sqlx::query_as::<_, Notification>(
            r#"
            INSERT INTO notifications
                (recipient_id, notification_type, trigger_event, subject, message,
                 sent_successfully)
            VALUES ($1, $2, $3, $4, $5, FALSE)
            RETURNING *
            "#,
        )
        .bind(new.recipient_id)
        .bind(&new.notification_type)
        .bind(&new.trigger_event)
        .bind(&new.subject)
        .bind(&new.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(notification)
    }

    /// Flag a notification as delivered
    pub async fn mark_sent(&self, id: Uuid) -> Result<()> {
        sqlx::query("UPDATE notifications SET sent_successfully = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Record a delivery failure on the notification row
    pub async fn record_failure(&self, id: Uuid, error: &str) -> Result<()> {
        sqlx::query("UPDATE notifications SET error_message = $2 WHERE id = $1")
            .bind(id)
            .bind(error)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// A member's notifications, newest first
    pub async fn list_for_recipient(&self, recipient_id: Uuid) -> Result<Vec<Notification>> {
        let notifications = sqlx::query_as::<_, Notification>(
            r#"
            SELECT * FROM notifications
            WHERE recipient_id = $1
            ORDER BY sent_at DESC
            "#,
        )
        .bind(recipient_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(notifications)
    }

    /// Mark one of the recipient's notifications read. Returns false
    /// when the row doesn't exist or belongs to someone else.
    pub async fn mark_read(&self, id: Uuid, recipient_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE notifications
            SET read_at = NOW()
            WHERE id = $1 AND recipient_id = $2 AND read_at IS NULL
            "#,
        )
        .bind(id)
        .bind(recipient_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
