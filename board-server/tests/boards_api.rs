mod common;

use axum::http::StatusCode;
use common::{create_board, create_task, spawn_app};
use serde_json::json;

#[tokio::test]
async fn created_board_starts_with_no_tasks() {
    let app = spawn_app().await;

    let (status, board) = app.post("/api/boards", json!({ "title": "Sprint 1" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(board["title"], "Sprint 1");
    let id = board["id"].as_str().expect("board id");

    let (status, fetched) = app.get(&format!("/api/boards/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["title"], "Sprint 1");
    assert_eq!(fetched["tasks"], json!([]));
}

#[tokio::test]
async fn fetching_missing_board_returns_404() {
    let app = spawn_app().await;

    let (status, body) = app.get("/api/boards/no-such-board").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(
        body["error"].as_str().expect("error message").contains("not found"),
        "unexpected error body: {body}"
    );
}

#[tokio::test]
async fn board_title_can_be_patched() {
    let app = spawn_app().await;
    let id = create_board(&app, "Backlog").await;

    let (status, updated) = app
        .put(&format!("/api/boards/{id}"), json!({ "title": "Icebox" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["title"], "Icebox");
}

#[tokio::test]
async fn updating_missing_board_returns_404() {
    let app = spawn_app().await;

    let (status, _) = app
        .put("/api/boards/no-such-board", json!({ "title": "x" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn board_list_nests_tasks_under_their_board() {
    let app = spawn_app().await;
    let sprint = create_board(&app, "Sprint").await;
    let done = create_board(&app, "Done").await;
    create_task(&app, json!({ "title": "Write tests", "boardId": sprint })).await;
    create_task(&app, json!({ "title": "Ship 0.1", "boardId": done })).await;

    let (status, boards) = app.get("/api/boards").await;
    assert_eq!(status, StatusCode::OK);
    let boards = boards.as_array().expect("board array");
    assert_eq!(boards.len(), 2);

    let sprint_entry = boards
        .iter()
        .find(|b| b["id"] == sprint.as_str())
        .expect("sprint board present");
    assert_eq!(sprint_entry["tasks"][0]["title"], "Write tests");

    let done_entry = boards
        .iter()
        .find(|b| b["id"] == done.as_str())
        .expect("done board present");
    assert_eq!(done_entry["tasks"][0]["title"], "Ship 0.1");
}

#[tokio::test]
async fn deleting_a_board_deletes_its_tasks() {
    let app = spawn_app().await;
    let board = create_board(&app, "Doomed").await;
    let keeper = create_board(&app, "Keeper").await;
    let t1 = create_task(&app, json!({ "title": "First", "boardId": board })).await;
    let t2 = create_task(&app, json!({ "title": "Second", "boardId": board })).await;
    let survivor = create_task(&app, json!({ "title": "Unrelated", "boardId": keeper })).await;

    let (status, deleted) = app.delete(&format!("/api/boards/{board}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["id"], board.as_str());

    for task in [&t1, &t2] {
        let (status, _) = app.get(&format!("/api/tasks/{task}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "task {task} should be gone");
    }

    let (status, _) = app.get(&format!("/api/tasks/{survivor}")).await;
    assert_eq!(status, StatusCode::OK, "other boards' tasks stay");
}

#[tokio::test]
async fn deleting_missing_board_returns_404() {
    let app = spawn_app().await;

    let (status, _) = app.delete("/api/boards/no-such-board").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
