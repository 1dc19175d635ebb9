//! Board Repository

use std::collections::HashMap;

use shared::models::{Board, BoardCreate, BoardUpdate, BoardWithTasks, Task};
use shared::util::{new_id, now_millis};
use sqlx::SqlitePool;

use super::task::TASK_SELECT;
use super::{RepoError, RepoResult};

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Board>> {
    let boards =
        sqlx::query_as::<_, Board>("SELECT id, title FROM board ORDER BY created_at, id")
            .fetch_all(pool)
            .await?;
    Ok(boards)
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Board>> {
    let board = sqlx::query_as::<_, Board>("SELECT id, title FROM board WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(board)
}

/// All boards with their tasks nested, grouped in memory from two queries
pub async fn find_all_with_tasks(pool: &SqlitePool) -> RepoResult<Vec<BoardWithTasks>> {
    let boards = find_all(pool).await?;

    let sql = format!("{TASK_SELECT} ORDER BY created_at, id");
    let tasks: Vec<Task> = sqlx::query_as(&sql).fetch_all(pool).await?;

    let mut grouped: HashMap<String, Vec<Task>> = HashMap::new();
    for task in tasks {
        grouped.entry(task.board_id.clone()).or_default().push(task);
    }

    Ok(boards
        .into_iter()
        .map(|board| {
            let tasks = grouped.remove(&board.id).unwrap_or_default();
            BoardWithTasks {
                id: board.id,
                title: board.title,
                tasks,
            }
        })
        .collect())
}

/// One board with its tasks nested
pub async fn find_with_tasks(pool: &SqlitePool, id: &str) -> RepoResult<Option<BoardWithTasks>> {
    let Some(board) = find_by_id(pool, id).await? else {
        return Ok(None);
    };
    let tasks = super::task::find_by_board(pool, id).await?;
    Ok(Some(BoardWithTasks {
        id: board.id,
        title: board.title,
        tasks,
    }))
}

pub async fn create(pool: &SqlitePool, data: BoardCreate) -> RepoResult<Board> {
    let id = new_id();
    let now = now_millis();
    sqlx::query("INSERT INTO board (id, title, created_at, updated_at) VALUES (?, ?, ?, ?)")
        .bind(&id)
        .bind(&data.title)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;
    find_by_id(pool, &id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create board".into()))
}

pub async fn update(pool: &SqlitePool, id: &str, data: BoardUpdate) -> RepoResult<Board> {
    let now = now_millis();
    let rows =
        sqlx::query("UPDATE board SET title = COALESCE(?, title), updated_at = ? WHERE id = ?")
            .bind(data.title)
            .bind(now)
            .bind(id)
            .execute(pool)
            .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Board {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Board {id} not found")))
}

/// Delete a board and return it; owned tasks go with it (FK cascade)
pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<Board> {
    let board = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Board {id} not found")))?;
    sqlx::query("DELETE FROM board WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(board)
}
