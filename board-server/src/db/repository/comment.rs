//! Comment Repository
//!
//! Comments are display-only: no endpoint writes them, the task detail
//! view reads them.

use shared::models::Comment;
use sqlx::SqlitePool;

use super::RepoResult;

pub async fn find_by_task(pool: &SqlitePool, task_id: &str) -> RepoResult<Vec<Comment>> {
    let comments = sqlx::query_as::<_, Comment>(
        "SELECT id, task_id, user_id, content, created_at, updated_at, parent_id FROM comment WHERE task_id = ? ORDER BY created_at, id",
    )
    .bind(task_id)
    .fetch_all(pool)
    .await?;
    Ok(comments)
}
