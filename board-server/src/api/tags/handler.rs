//! Tag API Handlers
//!
//! Tags are created through task writes (connect-or-create); the only
//! direct surface is the read-only listing.

use axum::Json;
use axum::extract::State;

use crate::core::ServerState;
use crate::db::repository::tag;
use crate::utils::AppResult;
use shared::models::Tag;

/// GET /api/tags - all tags, sorted by name ascending
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Tag>>> {
    let tags = tag::find_all(state.pool()).await?;
    Ok(Json(tags))
}
