//! Wire shapes of the resources returned by the API. Timestamps are RFC 3339
//! in UTC; password hashes never leave the server.

use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::{TaskPriority, TaskStatus};
use crate::repos::categories::Category;
use crate::repos::task_categories::TaskCategoryLink;
use crate::repos::tasks::Task;
use crate::repos::users::User;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub due_date: OffsetDateTime,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            user_id: task.user_id,
            title: task.title,
            description: task.description,
            due_date: task.due_date,
            status: task.status,
            priority: task.priority,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            user_id: category.user_id,
            name: category.name,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub id: i64,
    pub task_id: i64,
    pub category_id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<TaskCategoryLink> for LinkResponse {
    fn from(link: TaskCategoryLink) -> Self {
        Self {
            id: link.id,
            task_id: link.task_id,
            category_id: link.category_id,
            created_at: link.created_at,
        }
    }
}

/// Convert every element of `items`.
pub fn all<T, R: From<T>>(items: Vec<T>) -> Vec<R> {
    items.into_iter().map(R::from).collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::macros::datetime;

    use super::*;

    #[test]
    fn task_serializes_camel_case_with_rfc3339_dates() {
        let at = datetime!(2024-06-01 10:00 UTC);
        let task = Task {
            id: 3,
            user_id: 1,
            title: "Write report".into(),
            description: None,
            due_date: at,
            status: TaskStatus::InProgress,
            priority: TaskPriority::High,
            created_at: at,
            updated_at: at,
        };

        let value = serde_json::to_value(TaskResponse::from(task)).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 3,
                "userId": 1,
                "title": "Write report",
                "description": null,
                "dueDate": "2024-06-01T10:00:00Z",
                "status": "IN_PROGRESS",
                "priority": "HIGH",
                "createdAt": "2024-06-01T10:00:00Z",
                "updatedAt": "2024-06-01T10:00:00Z",
            })
        );
    }

    #[test]
    fn user_response_has_no_password_hash() {
        let at = datetime!(2024-06-01 0:00 UTC);
        let user = User {
            id: 1,
            username: "ada".into(),
            email: "ada@example.com".into(),
            password_hash: "$argon2id$secret".into(),
            created_at: at,
            updated_at: at,
        };

        let value = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert!(value.get("passwordHash").is_none());
        assert!(!value.to_string().contains("argon2"));
    }
}
