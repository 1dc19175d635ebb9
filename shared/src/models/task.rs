//! Task Model
//!
//! The task is the central entity: it belongs to exactly one board, may
//! reference a parent task, and carries tags, dates and a workflow status.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Comment, Tag, TagInput};

/// Task workflow status (closed set, kebab-case on the wire and in the store)
///
/// Ordering among these is presentational only; no state machine is enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "kebab-case"))]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Blocked,
    OnHold,
    Review,
    Testing,
    Done,
    Achieved,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Blocked => "blocked",
            TaskStatus::OnHold => "on-hold",
            TaskStatus::Review => "review",
            TaskStatus::Testing => "testing",
            TaskStatus::Done => "done",
            TaskStatus::Achieved => "achieved",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task priority (closed set, no numeric weight)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task entity
///
/// `created_at`/`updated_at` are epoch milliseconds; `created_at` is
/// immutable once set, `updated_at` advances on every mutating operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Task {
    pub id: String,
    pub board_id: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub created_at: i64,
    pub updated_at: i64,
    pub start_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub parent_id: Option<String>,
}

/// Task with relations loaded (detail view)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDetail {
    #[serde(flatten)]
    pub task: Task,
    pub tags: Vec<Tag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_task: Option<Task>,
    pub subtasks: Vec<Task>,
    pub comments: Vec<Comment>,
}

/// Create task payload
///
/// `start_date` defaults to the current date, `description` to empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreate {
    pub title: String,
    pub board_id: String,
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub parent_id: Option<String>,
    pub tags: Option<Vec<TagInput>>,
}

/// Update task payload — only supplied fields change
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub board_id: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub parent_id: Option<String>,
    pub tags: Option<Vec<TagInput>>,
}

/// Clients send `"N/A"` (or an empty string) to mean "no parent".
fn is_no_parent(value: &str) -> bool {
    value == "N/A" || value.is_empty()
}

impl TaskCreate {
    /// Strip the "no parent" sentinel so the write omits the field entirely
    /// instead of persisting an empty foreign key.
    pub fn normalized(mut self) -> Self {
        if self.parent_id.as_deref().is_some_and(is_no_parent) {
            self.parent_id = None;
        }
        self
    }
}

impl TaskUpdate {
    /// Same sentinel handling as [`TaskCreate::normalized`]: a sentinel in a
    /// partial patch drops the field from the write, leaving any existing
    /// parent reference untouched.
    pub fn normalized(mut self) -> Self {
        if self.parent_id.as_deref().is_some_and(is_no_parent) {
            self.parent_id = None;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_kebab_case_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!(
            serde_json::from_str::<TaskStatus>("\"on-hold\"").unwrap(),
            TaskStatus::OnHold
        );
        assert_eq!(TaskStatus::Achieved.to_string(), "achieved");
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(serde_json::from_str::<TaskStatus>("\"paused\"").is_err());
    }

    #[test]
    fn na_sentinel_strips_parent_on_create() {
        let payload: TaskCreate = serde_json::from_str(
            r#"{"title": "t", "boardId": "b1", "parentId": "N/A"}"#,
        )
        .unwrap();
        assert_eq!(payload.normalized().parent_id, None);
    }

    #[test]
    fn empty_sentinel_strips_parent_on_update() {
        let payload = TaskUpdate {
            parent_id: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(payload.normalized().parent_id, None);
    }

    #[test]
    fn real_parent_id_survives_normalization() {
        let payload = TaskUpdate {
            parent_id: Some("task-7".into()),
            ..Default::default()
        };
        assert_eq!(payload.normalized().parent_id.as_deref(), Some("task-7"));
    }
}
