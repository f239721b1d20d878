//! Todo handlers: map each service outcome to a status code and body.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use db::{NewTodo, Todo};
use serde_json::json;
use service::ServiceError;

use crate::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, StatusCode> {
    match state.todos.find_all().await {
        Ok(todos) => Ok(Json(todos)),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

pub async fn get(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Todo>, Response> {
    match state.todos.get_by_id(id).await {
        Ok(todo) => Ok(Json(todo)),
        Err(e @ ServiceError::NotFound) => Err((
            StatusCode::NOT_FOUND,
            Json(json!({ "message": e.to_string() })),
        )
            .into_response()),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR.into_response()),
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewTodo>,
) -> Result<(StatusCode, Json<i64>), StatusCode> {
    match state.todos.create(&payload).await {
        Ok(id) => Ok((StatusCode::CREATED, Json(id))),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

pub async fn update(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<NewTodo>,
) -> StatusCode {
    match state.todos.update(id, &payload).await {
        Ok(()) => StatusCode::OK,
        Err(ServiceError::NotFound) => StatusCode::NOT_FOUND,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub async fn delete(Path(id): Path<i64>, State(state): State<AppState>) -> StatusCode {
    match state.todos.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
