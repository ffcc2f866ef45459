//! User API endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use taskdesk_core::user::User;

use crate::error::ApiResult;
use crate::extract::{IdPath, JsonBody};
use crate::state::AppState;

// ============================================================================
// Request types
// ============================================================================

/// Missing fields default to empty so the service reports them
#[derive(Debug, Deserialize)]
pub struct UserRequest {
    #[serde(default)]
    pub name: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /users - Create a user
async fn create_user(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<UserRequest>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let created = state.users().create_user(User::new(req.name)).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /users/{id} - Get a single user
async fn get_user(State(state): State<AppState>, IdPath(id): IdPath) -> ApiResult<Json<User>> {
    let user = state.users().get_user(id).await?;
    Ok(Json(user))
}

/// PUT /users/{id} - Rename a user
async fn update_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(req): JsonBody<UserRequest>,
) -> ApiResult<Json<User>> {
    let updated = state.users().update_user(id, req.name).await?;
    Ok(Json(updated))
}

/// DELETE /users/{id} - Delete a user
async fn delete_user(State(state): State<AppState>, IdPath(id): IdPath) -> ApiResult<StatusCode> {
    state.users().delete_user(id).await?;
    tracing::debug!(user_id = id, "User deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new().route("/users", post(create_user)).route(
        "/users/{id}",
        get(get_user).put(update_user).delete(delete_user),
    )
}
