//! Board API Handlers

use axum::Json;
use axum::extract::{Path, State};

use crate::core::ServerState;
use crate::db::repository::board;
use crate::utils::{AppError, AppResult};
use shared::models::{Board, BoardCreate, BoardUpdate, BoardWithTasks};

/// GET /api/boards - all boards with their tasks nested
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<BoardWithTasks>>> {
    let boards = board::find_all_with_tasks(state.pool()).await?;
    Ok(Json(boards))
}

/// GET /api/boards/{id} - one board with its tasks
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<BoardWithTasks>> {
    let b = board::find_with_tasks(state.pool(), &id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Board {id} not found")))?;
    Ok(Json(b))
}

/// POST /api/boards - create a board
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BoardCreate>,
) -> AppResult<Json<Board>> {
    tracing::info!(title = %payload.title, "Creating board");

    let b = board::create(state.pool(), payload).await?;
    Ok(Json(b))
}

/// PUT /api/boards/{id} - partial patch
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<BoardUpdate>,
) -> AppResult<Json<Board>> {
    tracing::info!(board_id = %id, "Updating board");

    let b = board::update(state.pool(), &id, payload).await?;
    Ok(Json(b))
}

/// DELETE /api/boards/{id} - delete, cascading to owned tasks
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Board>> {
    tracing::info!(board_id = %id, "Deleting board");

    let b = board::delete(state.pool(), &id).await?;
    Ok(Json(b))
}
