//! Board Model

use serde::{Deserialize, Serialize};

use crate::models::Task;

/// Board entity — a named column of tasks
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Board {
    pub id: String,
    pub title: String,
}

/// Board with its tasks loaded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardWithTasks {
    pub id: String,
    pub title: String,
    pub tasks: Vec<Task>,
}

/// Create board payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardCreate {
    pub title: String,
}

/// Update board payload (only supplied fields change)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardUpdate {
    pub title: Option<String>,
}
