//! Chat API Handlers

use axum::Json;
use axum::extract::State;

use crate::core::ServerState;
use crate::db::repository::board;
use crate::utils::{AppError, AppResult};
use shared::models::{ChatReply, ChatRequest};

/// POST /api/chat - forward a conversation to the assistant
///
/// The first turn sent upstream is a synthetic snapshot of every board and
/// its tasks, so the model can answer questions about current state.
pub async fn chat(
    State(state): State<ServerState>,
    Json(payload): Json<ChatRequest>,
) -> AppResult<Json<ChatReply>> {
    if payload.messages.is_empty() {
        return Err(AppError::validation("Messages are required"));
    }

    tracing::info!(turns = payload.messages.len(), "Forwarding chat to assistant");

    let boards = board::find_all_with_tasks(state.pool()).await?;
    let content = state.assistant.chat(&boards, &payload.messages).await?;
    Ok(Json(ChatReply { content }))
}
