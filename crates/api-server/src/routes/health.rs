//! Greeting and health check endpoints

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::config::StoreKind;
use crate::state::AppState;

#[derive(Serialize)]
struct GreetingResponse {
    message: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    store: StoreKind,
}

async fn greet() -> Json<GreetingResponse> {
    Json(GreetingResponse {
        message: "Hello from taskdesk".to_string(),
    })
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: state.store(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(greet))
        .route("/health", get(health_check))
}
