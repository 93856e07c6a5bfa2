use crate::error::{Result, ServiceError};
use crate::notification::NotificationService;
use chrono::Utc;
use mentorship_database::{Database, MemberRepository, TodoRepository};
use mentorship_models::{priorities, roles, statuses, NewTodoItem, TodoItem, TodoList};
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

/// A todo list with its items and completion progress.
#[derive(Debug, Clone, Serialize)]
pub struct TodoListWithItems {
    pub list: TodoList,
    pub items: Vec<TodoItem>,
    pub completed_count: usize,
    pub total_count: usize,
}

impl TodoListWithItems {
    fn build(list: TodoList, items: Vec<TodoItem>) -> Self {
        let total_count = items.len();
        let completed_count = items
            .iter()
            .filter(|i| i.status == statuses::COMPLETED)
            .count();

        Self {
            list,
            items,
            completed_count,
            total_count,
        }
    }
}

pub struct TodoService {
    todo_repo: TodoRepository,
    member_repo: MemberRepository,
    notifications: NotificationService,
}

impl TodoService {
    pub fn new(db: &Database, notifications: NotificationService) -> Self {
        let pool = db.pool().clone();

        Self {
            todo_repo: TodoRepository::new(pool.clone()),
            member_repo: MemberRepository::new(pool),
            notifications,
        }
    }

    /// Create today's todo list for a mentee. One list per day; blank
    /// item titles are skipped. The mentee's mentor is notified.
    pub async fn create_today(
        &self,
        mentee_id: Uuid,
        items: &[NewTodoItem],
    ) -> Result<TodoListWithItems> {
        let mentee = self.member_repo.find_by_id(mentee_id).await?;
        if mentee.role != roles::MENTEE {
            return Err(ServiceError::Forbidden(
                "only mentees can create todo lists".to_string(),
            ));
        }

        let today = Utc::now().date_naive();
        if self
            .todo_repo
            .find_by_mentee_and_date(mentee_id, today)
            .await?
            .is_some()
        {
            return Err(ServiceError::AlreadyExists(
                "a todo list for today already exists".to_string(),
            ));
        }

        for item in items {
            item.validate()?;
            if !priorities::is_valid(&item.priority) {
                return Err(ServiceError::InvalidInput(format!(
                    "Invalid priority: {}. Must be one of: low, medium, high",
                    item.priority
                )));
            }
        }

        let mentor = self.member_repo.current_mentor(mentee_id).await?;

        let list = self
            .todo_repo
            .create_list(mentee_id, today, mentor.is_some())
            .await?;

        let mut created = Vec::new();
        for item in items {
            let title = item.title.trim();
            if title.is_empty() {
                continue;
            }
            created.push(
                self.todo_repo
                    .insert_item(list.id, title, &item.priority)
                    .await?,
            );
        }

        if let Some(mentor) = mentor {
            self.notifications
                .notify_todo_submitted(&mentor, &mentee)
                .await;
        }

        Ok(TodoListWithItems::build(list, created))
    }

    /// Today's list for a mentee, if they created one.
    pub async fn today(&self, mentee_id: Uuid) -> Result<Option<TodoListWithItems>> {
        let today = Utc::now().date_naive();
        let list = self
            .todo_repo
            .find_by_mentee_and_date(mentee_id, today)
            .await?;

        match list {
            Some(list) => {
                let items = self.todo_repo.items(list.id).await?;
                Ok(Some(TodoListWithItems::build(list, items)))
            }
            None => Ok(None),
        }
    }

    /// Flip one of the mentee's own items between pending/completed.
    pub async fn set_item_status(
        &self,
        member_id: Uuid,
        item_id: Uuid,
        status: &str,
    ) -> Result<TodoItem> {
        if !statuses::is_valid(status) {
            return Err(ServiceError::InvalidInput(format!(
                "Invalid status: {}. Must be one of: pending, completed",
                status
            )));
        }

        let item = self.todo_repo.find_item(item_id).await?;
        let list = self.todo_repo.find_list(item.todo_list_id).await?;
        if list.mentee_id != member_id {
            return Err(ServiceError::Forbidden(
                "you can only update your own todo items".to_string(),
            ));
        }

        Ok(self.todo_repo.update_item_status(item_id, status).await?)
    }

    /// Attach mentor notes to a list. Restricted to the mentee's
    /// currently assigned mentor.
    pub async fn add_mentor_notes(
        &self,
        mentor_id: Uuid,
        list_id: Uuid,
        notes: &str,
    ) -> Result<TodoList> {
        let list = self.todo_repo.find_list(list_id).await?;
        let current = self.member_repo.current_mentor(list.mentee_id).await?;

        match current {
            Some(mentor) if mentor.id == mentor_id => {}
            _ => {
                return Err(ServiceError::Forbidden(
                    "only the assigned mentor can annotate this list".to_string(),
                ))
            }
        }

        Ok(self.todo_repo.set_mentor_notes(list_id, notes).await?)
    }

    /// Today's lists across all of a mentor's active mentees.
    pub async fn lists_for_mentor(&self, mentor_id: Uuid) -> Result<Vec<TodoListWithItems>> {
        let mentor = self.member_repo.find_by_id(mentor_id).await?;
        if mentor.role != roles::MENTOR {
            return Err(ServiceError::Forbidden(
                "only mentors can review mentee todo lists".to_string(),
            ));
        }

        let mentees = self.member_repo.active_mentees(mentor_id).await?;
        let mentee_ids: Vec<Uuid> = mentees.iter().map(|m| m.id).collect();
        if mentee_ids.is_empty() {
            return Ok(Vec::new());
        }

        let today = Utc::now().date_naive();
        let lists = self
            .todo_repo
            .lists_for_mentees(&mentee_ids, today)
            .await?;

        let mut result = Vec::with_capacity(lists.len());
        for list in lists {
            let items = self.todo_repo.items(list.id).await?;
            result.push(TodoListWithItems::build(list, items));
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn list(mentee: Uuid) -> TodoList {
        TodoList {
            id: Uuid::new_v4(),
            mentee_id: mentee,
            submission_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            is_submitted_to_mentor: true,
            mentor_notes: None,
            created_at: Utc::now(),
        }
    }

    fn item(list_id: Uuid, status: &str) -> TodoItem {
        TodoItem {
            id: Uuid::new_v4(),
            todo_list_id: list_id,
            title: "task".to_string(),
            priority: priorities::MEDIUM.to_string(),
            status: status.to_string(),
        }
    }

    #[test]
    fn test_progress_counts() {
        let mentee = Uuid::new_v4();
        let list = list(mentee);
        let items = vec![
            item(list.id, statuses::COMPLETED),
            item(list.id, statuses::PENDING),
            item(list.id, statuses::COMPLETED),
        ];

        let view = TodoListWithItems::build(list, items);
        assert_eq!(view.completed_count, 2);
        assert_eq!(view.total_count, 3);
    }
}
