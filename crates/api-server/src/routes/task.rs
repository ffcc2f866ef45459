//! Task API endpoints
//!
//! `GET /tasks/{id}` takes a *user* id and lists that user's tasks; the
//! other `{id}` routes take a task id.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use taskdesk_core::task::Task;

use crate::error::ApiResult;
use crate::extract::{IdPath, JsonBody};
use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub user_id: i64,
}

/// Full replacement of a task's editable fields, addressed by `id`.
/// The owner is fixed at creation, so a `user_id` in the body is ignored.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_completed: bool,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
        })
    }
}

impl From<UpdateTaskRequest> for Task {
    fn from(req: UpdateTaskRequest) -> Self {
        Task {
            id: req.id,
            title: req.title,
            description: req.description,
            is_completed: req.is_completed,
            ..Task::default()
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /tasks - Create a new task
async fn create_task(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    let task = Task::new(req.title, req.user_id).with_description(req.description);
    let created = state.tasks().create_task(task).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /tasks/{user_id} - List tasks of a user
async fn list_user_tasks(
    State(state): State<AppState>,
    IdPath(user_id): IdPath,
) -> ApiResult<Json<Vec<Task>>> {
    let tasks = state.tasks().get_tasks_for_user(user_id).await?;
    Ok(Json(tasks))
}

/// PUT /tasks - Update a task, answering with the stored row
async fn update_task(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<UpdateTaskRequest>,
) -> ApiResult<Json<Task>> {
    let updated = state.tasks().update_task(Task::from(req)).await?;
    Ok(Json(updated))
}

/// PUT /tasks/{id}/complete - Mark a task as complete
async fn mark_task_complete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<MessageResponse>> {
    state.tasks().mark_task_complete(id).await?;
    Ok(MessageResponse::new("Task marked as complete"))
}

/// DELETE /tasks/{id} - Delete a task
async fn delete_task(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<MessageResponse>> {
    state.tasks().delete_task(id).await?;
    Ok(MessageResponse::new("Task deleted"))
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tasks", post(create_task).put(update_task))
        .route("/tasks/{id}", delete(delete_task).get(list_user_tasks))
        .route("/tasks/{id}/complete", put(mark_task_complete))
}
