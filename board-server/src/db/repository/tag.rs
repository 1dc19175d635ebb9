//! Tag Repository

use shared::models::{DEFAULT_TAG_COLOR, Tag, TagInput};
use shared::util::new_id;
use sqlx::SqlitePool;

use super::RepoResult;

/// All tags, lexicographically ascending by name
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Tag>> {
    let tags = sqlx::query_as::<_, Tag>("SELECT id, name, color FROM tag ORDER BY name ASC")
        .fetch_all(pool)
        .await?;
    Ok(tags)
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Tag>> {
    let tag = sqlx::query_as::<_, Tag>("SELECT id, name, color FROM tag WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(tag)
}

/// Tags attached to one task
pub async fn find_by_task(pool: &SqlitePool, task_id: &str) -> RepoResult<Vec<Tag>> {
    let tags = sqlx::query_as::<_, Tag>(
        "SELECT t.id, t.name, t.color FROM tag t JOIN task_tag tt ON tt.tag_id = t.id WHERE tt.task_id = ? ORDER BY t.name ASC",
    )
    .bind(task_id)
    .fetch_all(pool)
    .await?;
    Ok(tags)
}

/// Attach a tag to a task, creating the tag row when the id is unknown.
///
/// An existing row is linked as-is: reusing an id with a different name or
/// color does not rewrite the stored tag. Re-linking an already attached
/// tag is a no-op.
pub async fn connect_or_create(
    pool: &SqlitePool,
    task_id: &str,
    input: TagInput,
) -> RepoResult<Tag> {
    let existing = match input.id.as_deref().filter(|id| !id.is_empty()) {
        Some(id) => find_by_id(pool, id).await?,
        None => None,
    };

    let tag = match existing {
        Some(tag) => tag,
        None => {
            let id = input.id.filter(|id| !id.is_empty()).unwrap_or_else(new_id);
            let color = input
                .color
                .unwrap_or_else(|| DEFAULT_TAG_COLOR.to_string());
            sqlx::query("INSERT INTO tag (id, name, color) VALUES (?, ?, ?)")
                .bind(&id)
                .bind(&input.name)
                .bind(&color)
                .execute(pool)
                .await?;
            Tag {
                id,
                name: input.name,
                color,
            }
        }
    };

    sqlx::query("INSERT OR IGNORE INTO task_tag (task_id, tag_id) VALUES (?, ?)")
        .bind(task_id)
        .bind(&tag.id)
        .execute(pool)
        .await?;

    Ok(tag)
}
