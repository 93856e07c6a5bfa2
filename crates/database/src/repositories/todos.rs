use crate::error::{DatabaseError, Result};
use chrono::NaiveDate;
use mentorship_models::{TodoItem, TodoList};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct TodoRepository {
    pool: PgPool,
}

impl TodoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_mentee_and_date(
        &self,
        mentee_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<TodoList>> {
        let list = sqlx::query_as::<_, TodoList>(
            "SELECT * FROM todo_lists WHERE mentee_id = $1 AND submission_date = $2",
        )
        .bind(mentee_id)
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(list)
    }

    pub async fn create_list(
        &self,
        mentee_id: Uuid,
        date: NaiveDate,
        submitted_to_mentor: bool,
    ) -> Result<TodoList> {
        let list = sqlx::query_as::<_, TodoList>(
            r#"
            INSERT INTO todo_lists (mentee_id, submission_date, is_submitted_to_mentor)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(mentee_id)
        .bind(date)
        .bind(submitted_to_mentor)
        .fetch_one(&self.pool)
        .await?;

        Ok(list)
    }

    pub async fn find_list(&self, id: Uuid) -> Result<TodoList> {
        let list = sqlx::query_as::<_, TodoList>("SELECT * FROM todo_lists WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("TodoList", &id.to_string()))?;

        Ok(list)
    }

    pub async fn insert_item(
        &self,
        todo_list_id: Uuid,
        title: &str,
        priority: &str,
    ) -> Result<TodoItem> {
        let item = sqlx::query_as::<_, TodoItem>(
            r#"
            INSERT INTO todo_items (todo_list_id, title, priority, status)
            VALUES ($1, $2, $3, 'pending')
            RETURNING *
            "#,
        )
        .bind(todo_list_id)
        .bind(title)
        .bind(priority)
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    /// Items of a list in insertion order
    pub async fn items(&self, todo_list_id: Uuid) -> Result<Vec<TodoItem>> {
        let items = sqlx::query_as::<_, TodoItem>(
            "SELECT * FROM todo_items WHERE todo_list_id = $1 ORDER BY id ASC",
        )
        .bind(todo_list_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    pub async fn find_item(&self, id: Uuid) -> Result<TodoItem> {
        let item = sqlx::query_as::<_, TodoItem>("SELECT * FROM todo_items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("TodoItem", &id.to_string()))?;

        Ok(item)
    }

    pub async fn update_item_status(&self, id: Uuid, status: &str) -> Result<TodoItem> {
        let item = sqlx::query_as::<_, TodoItem>(
            r#"
            UPDATE todo_items
            SET status = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("TodoItem", &id.to_string()))?;

        Ok(item)
    }

    pub async fn set_mentor_notes(&self, id: Uuid, notes: &str) -> Result<TodoList> {
        let list = sqlx::query_as::<_, TodoList>(
            r#"
            UPDATE todo_lists
            SET mentor_notes = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(notes)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("TodoList", &id.to_string()))?;

        Ok(list)
    }

    /// The given mentees' lists for one date
    pub async fn lists_for_mentees(
        &self,
        mentee_ids: &[Uuid],
        date: NaiveDate,
    ) -> Result<Vec<TodoList>> {
        let lists = sqlx::query_as::<_, TodoList>(
            r#"
            SELECT * FROM todo_lists
            WHERE mentee_id = ANY($1) AND submission_date = $2
            ORDER BY mentee_id ASC
            "#,
        )
        .bind(mentee_ids.to_vec())
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(lists)
    }
}
