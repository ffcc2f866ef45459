//! HTTP server for Taskdesk
//!
//! Exposes user and task CRUD over REST. The binary in `main.rs` wires the
//! configuration and logging around [`app`].

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

use std::time::Duration;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::AppState;

/// Build the full router with middleware applied
pub fn app(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        .merge(routes::health::router())
        .merge(routes::user::router())
        .merge(routes::task::router())
        .with_state(state);

    with_middleware(router, config.cors_permissive, config.request_timeout)
}

/// Requests that run past `request_timeout` are dropped with 408.
fn with_middleware(router: Router, cors_permissive: bool, request_timeout: Duration) -> Router {
    let router = router
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http());

    if cors_permissive {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    }
}
