//! Task API Handlers

use axum::Json;
use axum::extract::{Path, State};

use crate::core::ServerState;
use crate::db::repository::{board, task};
use crate::utils::{AppError, AppResult};
use shared::models::{BoardWithTasks, Task, TaskCreate, TaskDetail, TaskUpdate};

/// GET /api/tasks - every task, grouped by its board
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<BoardWithTasks>>> {
    let boards = board::find_all_with_tasks(state.pool()).await?;
    Ok(Json(boards))
}

/// GET /api/tasks/{id} - task detail with tags, parent, subtasks, comments
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<TaskDetail>> {
    let t = task::find_detail(state.pool(), &id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Task {id} not found")))?;
    Ok(Json(t))
}

/// POST /api/tasks - create a task
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TaskCreate>,
) -> AppResult<Json<Task>> {
    tracing::info!(
        title = %payload.title,
        board_id = %payload.board_id,
        status = %payload.status,
        "Creating task"
    );

    let t = task::create(state.pool(), payload).await?;
    Ok(Json(t))
}

/// PUT /api/tasks/{id} - partial patch
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<TaskUpdate>,
) -> AppResult<Json<Task>> {
    tracing::info!(task_id = %id, "Updating task");

    let t = task::update(state.pool(), &id, payload).await?;
    Ok(Json(t))
}

/// DELETE /api/tasks/{id} - delete; subtasks are unlinked, tags remain
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Task>> {
    tracing::info!(task_id = %id, "Deleting task");

    let t = task::delete(state.pool(), &id).await?;
    Ok(Json(t))
}
