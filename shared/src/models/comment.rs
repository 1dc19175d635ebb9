//! Comment Model

use serde::{Deserialize, Serialize};

/// Task comment with one level of threaded replies via `parent_id`.
///
/// Display-only in the current surface: returned as part of a task's detail
/// view, never written over HTTP.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Comment {
    pub id: String,
    pub task_id: String,
    pub user_id: String,
    pub content: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub parent_id: Option<String>,
}
