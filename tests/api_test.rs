//! Tests for the puzzle REST API.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::NamedTempFile;
use tower::ServiceExt;

use nonogram_studio::{AppState, PuzzleRepository, build_router};

/// Builds a router over a fresh temp database. The file handle must stay in
/// scope to keep the database alive.
fn setup_test_app() -> (NamedTempFile, Router) {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();

    let repo = PuzzleRepository::new(db_path);
    repo.run_migrations().expect("Migrations failed");

    let app = build_router(AppState::new(repo));
    (db_file, app)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .expect("Request failed");
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).expect("Non-JSON response");
    (status, value)
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .expect("Request failed");
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).expect("Non-JSON response");
    (status, value)
}

#[tokio::test]
async fn test_root_greeting() {
    let (_db, app) = setup_test_app();
    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Welcome to the Nonogram Studio API");
}

#[tokio::test]
async fn test_list_starts_empty() {
    let (_db, app) = setup_test_app();
    let (status, body) = get(&app, "/api/nonograms/list").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "names": [] }));
}

#[tokio::test]
async fn test_create_then_get() {
    let (_db, app) = setup_test_app();

    let (status, created) = send_json(
        &app,
        "POST",
        "/api/nonograms",
        json!({
            "name": "tiny",
            "board": [[true, false], [false, true]],
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["name"], "tiny");
    assert_eq!(created["descriptors"]["rows"], json!([[1], [1]]));
    assert_eq!(created["descriptors"]["columns"], json!([[1], [1]]));

    let (status, fetched) = get(&app, "/api/nonograms/tiny").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, list) = get(&app, "/api/nonograms/list").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!({ "names": ["tiny"] }));
}

#[tokio::test]
async fn test_get_missing_is_404() {
    let (_db, app) = setup_test_app();
    let (status, body) = get(&app, "/api/nonograms/nonexistent").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_create_duplicate_is_409() {
    let (_db, app) = setup_test_app();
    let request = json!({ "name": "dup", "board": [[true]] });

    let (status, _) = send_json(&app, "POST", "/api/nonograms", request.clone()).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send_json(&app, "POST", "/api/nonograms", request).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "conflict");
}

#[tokio::test]
async fn test_create_ragged_board_is_400() {
    let (_db, app) = setup_test_app();
    let (status, body) = send_json(
        &app,
        "POST",
        "/api/nonograms",
        json!({ "name": "ragged", "board": [[true, false], [true]] }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_create_invalid_name_is_400() {
    let (_db, app) = setup_test_app();
    let (status, body) = send_json(
        &app,
        "POST",
        "/api/nonograms",
        json!({ "name": "bad/name", "board": [[true]] }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_name_with_space_round_trips() {
    let (_db, app) = setup_test_app();
    let (status, _) = send_json(
        &app,
        "POST",
        "/api/nonograms",
        json!({ "name": "two words", "board": [[true]] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, fetched) = get(&app, "/api/nonograms/two%20words").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "two words");
}

#[tokio::test]
async fn test_search_by_clue() {
    let (_db, app) = setup_test_app();
    send_json(
        &app,
        "POST",
        "/api/nonograms",
        json!({ "name": "plus", "board": [
            [false, true, false],
            [true, true, true],
            [false, true, false],
        ] }),
    )
    .await;
    send_json(
        &app,
        "POST",
        "/api/nonograms",
        json!({ "name": "square", "board": [[true, true], [true, true]] }),
    )
    .await;

    let (status, body) = get(&app, "/api/nonograms/search?clue=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "matches": ["plus"] }));

    let (status, body) = get(&app, "/api/nonograms/search?clue=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "matches": ["square"] }));

    let (status, body) = get(&app, "/api/nonograms/search?clue=7").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "matches": [] }));

    // Unparseable clues match nothing rather than erroring.
    let (status, body) = get(&app, "/api/nonograms/search?clue=abc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "matches": [] }));
}

#[tokio::test]
async fn test_update_replaces_board() {
    let (_db, app) = setup_test_app();
    send_json(
        &app,
        "POST",
        "/api/nonograms",
        json!({ "name": "tiny", "board": [[true, false], [false, true]] }),
    )
    .await;

    let (status, updated) = send_json(
        &app,
        "PUT",
        "/api/nonograms/tiny",
        json!({ "board": [[true, true], [false, false]] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["descriptors"]["rows"], json!([[2], [0]]));

    let (_, fetched) = get(&app, "/api/nonograms/tiny").await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_missing_is_404() {
    let (_db, app) = setup_test_app();
    let (status, body) = send_json(
        &app,
        "PUT",
        "/api/nonograms/nonexistent",
        json!({ "board": [[true]] }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}
