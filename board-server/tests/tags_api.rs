mod common;

use axum::http::StatusCode;
use common::{create_board, create_task, spawn_app};
use serde_json::json;

#[tokio::test]
async fn tags_are_listed_sorted_by_name() {
    let app = spawn_app().await;
    let board = create_board(&app, "Inbox").await;
    create_task(
        &app,
        json!({
            "title": "Tagged",
            "boardId": board,
            "tags": [
                { "id": "t-z", "name": "zeta", "color": "#ff0000" },
                { "id": "t-a", "name": "alpha", "color": "#00ff00" },
                { "id": "t-m", "name": "mid", "color": "#0000ff" }
            ]
        }),
    )
    .await;

    let (status, tags) = app.get("/api/tags").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = tags
        .as_array()
        .expect("tag array")
        .iter()
        .map(|t| t["name"].as_str().expect("tag name"))
        .collect();
    assert_eq!(names, vec!["alpha", "mid", "zeta"]);
}

#[tokio::test]
async fn same_tag_id_links_one_shared_row() {
    let app = spawn_app().await;
    let board = create_board(&app, "Inbox").await;
    let first = create_task(
        &app,
        json!({
            "title": "First",
            "boardId": board,
            "tags": [{ "id": "t-urgent", "name": "urgent", "color": "#ff0000" }]
        }),
    )
    .await;
    let second = create_task(
        &app,
        json!({
            "title": "Second",
            "boardId": board,
            "tags": [{ "id": "t-urgent", "name": "renamed", "color": "#000000" }]
        }),
    )
    .await;

    // one global row, first write wins; reusing the id does not rename it
    let (status, tags) = app.get("/api/tags").await;
    assert_eq!(status, StatusCode::OK);
    let tags = tags.as_array().expect("tag array");
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0]["id"], "t-urgent");
    assert_eq!(tags[0]["name"], "urgent");
    assert_eq!(tags[0]["color"], "#ff0000");

    for task in [&first, &second] {
        let (_, detail) = app.get(&format!("/api/tasks/{task}")).await;
        assert_eq!(detail["tags"][0]["id"], "t-urgent");
        assert_eq!(detail["tags"][0]["name"], "urgent");
    }
}

#[tokio::test]
async fn tag_without_id_gets_a_generated_one() {
    let app = spawn_app().await;
    let board = create_board(&app, "Inbox").await;
    let task = create_task(
        &app,
        json!({
            "title": "Fresh",
            "boardId": board,
            "tags": [{ "name": "fresh" }]
        }),
    )
    .await;

    let (_, detail) = app.get(&format!("/api/tasks/{task}")).await;
    let tag = &detail["tags"][0];
    assert_eq!(tag["name"], "fresh");
    assert!(tag["id"].as_str().is_some_and(|id| !id.is_empty()));
    // default swatch applied
    assert_eq!(tag["color"], "#3B82F6");
}

#[tokio::test]
async fn tags_can_be_attached_via_update() {
    let app = spawn_app().await;
    let board = create_board(&app, "Inbox").await;
    let task = create_task(&app, json!({ "title": "Late tag", "boardId": board })).await;

    let (status, _) = app
        .put(
            &format!("/api/tasks/{task}"),
            json!({ "tags": [{ "id": "t-late", "name": "late", "color": "#123456" }] }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, detail) = app.get(&format!("/api/tasks/{task}")).await;
    assert_eq!(detail["tags"][0]["id"], "t-late");
}

#[tokio::test]
async fn deleting_a_task_keeps_tag_rows() {
    let app = spawn_app().await;
    let board = create_board(&app, "Inbox").await;
    let task = create_task(
        &app,
        json!({
            "title": "Short-lived",
            "boardId": board,
            "tags": [{ "id": "t-keep", "name": "keep", "color": "#abcdef" }]
        }),
    )
    .await;

    let (status, _) = app.delete(&format!("/api/tasks/{task}")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, tags) = app.get("/api/tags").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tags.as_array().expect("tag array").len(), 1);
    assert_eq!(tags[0]["id"], "t-keep");
}
