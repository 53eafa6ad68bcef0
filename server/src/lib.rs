//! HTTP surface for the todo list.
//!
//! # Design
//! A single resource path, `/api/todos`, carries all three operations:
//! `GET` lists, `POST` creates, `PUT` updates the `completed` flag. The
//! router shares one [`TodoStore`] through axum state; the store itself
//! serializes mutations.

pub mod error;
pub mod store;

use std::{future::Future, sync::Arc};

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use error::{Error, ErrorBody};
pub use store::{TodoItem, TodoStore};

pub const TODOS_PATH: &str = "/api/todos";

/// Acknowledgement text returned by every update.
pub const UPDATE_MESSAGE: &str = "Todo updated";

/// Create payload. `text` is optional at the JSON layer so that a missing
/// or `null` value reaches the store's presence check.
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTodo {
    pub id: u64,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAck {
    pub message: String,
}

pub type Db = Arc<TodoStore>;

pub fn app(store: Db) -> Router {
    Router::new()
        .route(TODOS_PATH, get(list_todos).post(create_todo).put(update_todo))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

pub async fn run(listener: TcpListener, store: Db) -> Result<(), Error> {
    axum::serve(listener, app(store)).await?;
    Ok(())
}

/// Serve until `shutdown` resolves, then drain in-flight requests.
pub async fn run_until<F>(listener: TcpListener, store: Db, shutdown: F) -> Result<(), Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(store))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

async fn list_todos(State(store): State<Db>) -> Json<Vec<TodoItem>> {
    Json(store.list().await)
}

async fn create_todo(
    State(store): State<Db>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<TodoItem>), Error> {
    let todo = store.create(input.text).await?;
    tracing::info!(id = todo.id, "todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(State(store): State<Db>, Json(input): Json<UpdateTodo>) -> Json<UpdateAck> {
    if store.update(input.id, input.completed).await {
        tracing::info!(id = input.id, completed = input.completed, "todo updated");
    } else {
        tracing::debug!(id = input.id, "update for unknown todo ignored");
    }
    Json(UpdateAck {
        message: UPDATE_MESSAGE.to_string(),
    })
}
