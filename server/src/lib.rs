use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use todo_store::{StoreError, TodoId, TodoItem, TodoPatch, TodoStore};

/// Request body for `POST /todos`. Unknown fields, notably a client-supplied
/// `id`, are ignored; ids are server-assigned only.
#[derive(Deserialize)]
pub struct CreateTodo {
    pub text: String,
}

/// JSON body carried by 4xx responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Store outcome translated to an HTTP response.
struct ApiError(StoreError);

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_validation() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::NOT_FOUND
        };
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

type SharedStore = Arc<TodoStore>;

pub fn app() -> Router {
    let store: SharedStore = Arc::new(TodoStore::new());
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo)
                .put(update_todo)
                .patch(update_todo)
                .delete(delete_todo),
        )
        .with_state(store)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(store): State<SharedStore>) -> Json<Vec<TodoItem>> {
    Json(store.list())
}

async fn create_todo(
    State(store): State<SharedStore>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<TodoItem>), ApiError> {
    let todo = store.create(&input.text)?;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn get_todo(
    State(store): State<SharedStore>,
    Path(id): Path<TodoId>,
) -> Result<Json<TodoItem>, ApiError> {
    Ok(Json(store.get(id)?))
}

// PUT and PATCH share the partial-merge semantics; there is no
// replace-the-whole-record path.
async fn update_todo(
    State(store): State<SharedStore>,
    Path(id): Path<TodoId>,
    Json(patch): Json<TodoPatch>,
) -> Result<Json<TodoItem>, ApiError> {
    Ok(Json(store.update(id, patch)?))
}

async fn delete_todo(
    State(store): State<SharedStore>,
    Path(id): Path<TodoId>,
) -> Result<StatusCode, ApiError> {
    if store.delete(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError(StoreError::NotFound(id)))
    }
}
