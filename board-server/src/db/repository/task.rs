//! Task Repository

use std::collections::HashSet;

use chrono::Utc;
use shared::models::{Task, TaskCreate, TaskDetail, TaskUpdate};
use shared::util::{new_id, now_millis};
use sqlx::SqlitePool;

use super::{RepoError, RepoResult, comment, tag};

pub(in crate::db) const TASK_SELECT: &str = "SELECT id, board_id, title, description, status, priority, created_at, updated_at, start_date, due_date, parent_id FROM task";

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Task>> {
    let sql = format!("{TASK_SELECT} WHERE id = ?");
    let task: Option<Task> = sqlx::query_as(&sql).bind(id).fetch_optional(pool).await?;
    Ok(task)
}

pub async fn find_by_board(pool: &SqlitePool, board_id: &str) -> RepoResult<Vec<Task>> {
    let sql = format!("{TASK_SELECT} WHERE board_id = ? ORDER BY created_at, id");
    let tasks: Vec<Task> = sqlx::query_as(&sql).bind(board_id).fetch_all(pool).await?;
    Ok(tasks)
}

async fn find_subtasks(pool: &SqlitePool, parent_id: &str) -> RepoResult<Vec<Task>> {
    let sql = format!("{TASK_SELECT} WHERE parent_id = ? ORDER BY created_at, id");
    let tasks: Vec<Task> = sqlx::query_as(&sql).bind(parent_id).fetch_all(pool).await?;
    Ok(tasks)
}

/// Task with tags, parent, subtasks and comments loaded
pub async fn find_detail(pool: &SqlitePool, id: &str) -> RepoResult<Option<TaskDetail>> {
    let Some(task) = find_by_id(pool, id).await? else {
        return Ok(None);
    };

    let tags = tag::find_by_task(pool, id).await?;
    let parent_task = match task.parent_id.as_deref() {
        Some(parent_id) => find_by_id(pool, parent_id).await?,
        None => None,
    };
    let subtasks = find_subtasks(pool, id).await?;
    let comments = comment::find_by_task(pool, id).await?;

    Ok(Some(TaskDetail {
        task,
        tags,
        parent_task,
        subtasks,
        comments,
    }))
}

async fn ensure_board_exists(pool: &SqlitePool, board_id: &str) -> RepoResult<()> {
    let exists: Option<String> = sqlx::query_scalar("SELECT id FROM board WHERE id = ?")
        .bind(board_id)
        .fetch_optional(pool)
        .await?;
    if exists.is_none() {
        return Err(RepoError::NotFound(format!("Board {board_id} not found")));
    }
    Ok(())
}

async fn ensure_parent_exists(pool: &SqlitePool, parent_id: &str) -> RepoResult<()> {
    find_by_id(pool, parent_id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Parent task {parent_id} not found")))?;
    Ok(())
}

/// Reject a parent assignment that loops back to the task itself.
///
/// Walks the ancestor chain starting at the proposed parent; the chain is
/// two levels in practice but the guard holds for any depth.
async fn ensure_no_cycle(pool: &SqlitePool, task_id: &str, parent_id: &str) -> RepoResult<()> {
    if task_id == parent_id {
        return Err(RepoError::Validation(
            "Task cannot be its own parent".into(),
        ));
    }

    let mut seen = HashSet::new();
    let mut current = Some(parent_id.to_string());
    while let Some(ancestor) = current {
        if ancestor == task_id {
            return Err(RepoError::Validation(
                "Parent assignment would create a cycle".into(),
            ));
        }
        if !seen.insert(ancestor.clone()) {
            // pre-existing loop upstream; this assignment does not reach task_id
            break;
        }
        let next: Option<Option<String>> =
            sqlx::query_scalar("SELECT parent_id FROM task WHERE id = ?")
                .bind(ancestor)
                .fetch_optional(pool)
                .await?;
        current = next.flatten();
    }
    Ok(())
}

pub async fn create(pool: &SqlitePool, data: TaskCreate) -> RepoResult<Task> {
    let data = data.normalized();

    ensure_board_exists(pool, &data.board_id).await?;
    if let Some(ref parent_id) = data.parent_id {
        ensure_parent_exists(pool, parent_id).await?;
    }

    let id = new_id();
    let now = now_millis();
    let start_date = data.start_date.unwrap_or_else(|| Utc::now().date_naive());

    sqlx::query(
        "INSERT INTO task (id, board_id, title, description, status, priority, created_at, updated_at, start_date, due_date, parent_id) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&id)
    .bind(&data.board_id)
    .bind(&data.title)
    .bind(data.description.unwrap_or_default())
    .bind(data.status)
    .bind(data.priority)
    .bind(now)
    .bind(now)
    .bind(start_date)
    .bind(data.due_date)
    .bind(&data.parent_id)
    .execute(pool)
    .await?;

    if let Some(tags) = data.tags {
        for entry in tags {
            tag::connect_or_create(pool, &id, entry).await?;
        }
    }

    find_by_id(pool, &id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create task".into()))
}

pub async fn update(pool: &SqlitePool, id: &str, data: TaskUpdate) -> RepoResult<Task> {
    let data = data.normalized();

    // The row must exist before any relation checks
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Task {id} not found")))?;

    if let Some(ref board_id) = data.board_id {
        ensure_board_exists(pool, board_id).await?;
    }
    if let Some(ref parent_id) = data.parent_id {
        ensure_parent_exists(pool, parent_id).await?;
        ensure_no_cycle(pool, id, parent_id).await?;
    }

    let now = now_millis();
    sqlx::query(
        "UPDATE task SET title = COALESCE(?, title), board_id = COALESCE(?, board_id), description = COALESCE(?, description), status = COALESCE(?, status), priority = COALESCE(?, priority), start_date = COALESCE(?, start_date), due_date = COALESCE(?, due_date), parent_id = COALESCE(?, parent_id), updated_at = ? WHERE id = ?",
    )
    .bind(data.title)
    .bind(data.board_id)
    .bind(data.description)
    .bind(data.status)
    .bind(data.priority)
    .bind(data.start_date)
    .bind(data.due_date)
    .bind(data.parent_id)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    if let Some(tags) = data.tags {
        for entry in tags {
            tag::connect_or_create(pool, id, entry).await?;
        }
    }

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Task {id} not found")))
}

/// Delete a task and return it. Subtasks stay with their parent reference
/// cleared by the FK; tag rows stay for reuse; links and comments go.
pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<Task> {
    let task = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Task {id} not found")))?;
    sqlx::query("DELETE FROM task WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(task)
}
