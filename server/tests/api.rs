use std::sync::Arc;

use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use todo_server::{app, ErrorBody, TodoItem, TodoStore, UpdateAck};
use tower::ServiceExt;

fn fresh_app() -> axum::Router {
    app(Arc::new(TodoStore::new()))
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri("/api/todos")
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn list_request() -> Request<String> {
    Request::builder()
        .uri("/api/todos")
        .body(String::new())
        .unwrap()
}

// --- list ---

#[tokio::test]
async fn list_todos_empty() {
    let resp = fresh_app().oneshot(list_request()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<TodoItem> = body_json(resp).await;
    assert!(todos.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_todo_returns_201() {
    let resp = fresh_app()
        .oneshot(json_request("POST", r#"{"text":"Buy milk"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let todo: TodoItem = body_json(resp).await;
    assert_eq!(todo.text, "Buy milk");
    assert!(!todo.completed);
}

#[tokio::test]
async fn create_todo_empty_text_returns_400() {
    let resp = fresh_app()
        .oneshot(json_request("POST", r#"{"text":""}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = body_json(resp).await;
    assert!(body.error.contains("empty"));
}

#[tokio::test]
async fn create_todo_missing_text_returns_400() {
    let store = Arc::new(TodoStore::new());
    for body in ["{}", r#"{"title":"wrong"}"#, r#"{"text":null}"#] {
        let resp = app(store.clone())
            .oneshot(json_request("POST", body))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{body}");
        let err: ErrorBody = body_json(resp).await;
        assert_eq!(err.error, "text is required", "{body}");
    }
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn create_todo_wrong_text_type_returns_422() {
    let resp = fresh_app()
        .oneshot(json_request("POST", r#"{"text":5}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_todo_without_json_content_type_returns_415() {
    let resp = fresh_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/todos")
                .body(r#"{"text":"x"}"#.to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

// --- update ---

#[tokio::test]
async fn update_unknown_id_is_acknowledged() {
    let resp = fresh_app()
        .oneshot(json_request("PUT", r#"{"id":9999999,"completed":true}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let ack: UpdateAck = body_json(resp).await;
    assert_eq!(ack.message, "Todo updated");
}

#[tokio::test]
async fn delete_is_not_routed() {
    let resp = fresh_app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/todos")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// --- full lifecycle ---

#[tokio::test]
async fn buy_milk_scenario() {
    let store = Arc::new(TodoStore::new());

    // create
    let resp = app(store.clone())
        .oneshot(json_request("POST", r#"{"text":"buy milk"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: TodoItem = body_json(resp).await;
    let id = created.id;

    // list — exactly the new item
    let resp = app(store.clone()).oneshot(list_request()).await.unwrap();
    let todos: Vec<TodoItem> = body_json(resp).await;
    assert_eq!(
        todos,
        vec![TodoItem {
            id,
            text: "buy milk".to_string(),
            completed: false,
        }]
    );

    // update — twice, same value
    for _ in 0..2 {
        let resp = app(store.clone())
            .oneshot(json_request(
                "PUT",
                &format!(r#"{{"id":{id},"completed":true}}"#),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    // list — completed, text unchanged
    let resp = app(store.clone()).oneshot(list_request()).await.unwrap();
    let todos: Vec<TodoItem> = body_json(resp).await;
    assert_eq!(
        todos,
        vec![TodoItem {
            id,
            text: "buy milk".to_string(),
            completed: true,
        }]
    );
}

#[tokio::test]
async fn list_preserves_creation_order() {
    let store = Arc::new(TodoStore::new());
    for text in ["A", "B", "C"] {
        let resp = app(store.clone())
            .oneshot(json_request("POST", &format!(r#"{{"text":"{text}"}}"#)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = app(store).oneshot(list_request()).await.unwrap();
    let todos: Vec<TodoItem> = body_json(resp).await;
    let texts: Vec<&str> = todos.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["A", "B", "C"]);
}
