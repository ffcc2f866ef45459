//! API error type
//!
//! Every failure leaves the server as `{"error": "<message>"}` with a
//! status from one taxonomy: validation 400, not found 404, store 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            Self::BadRequest(msg) | Self::NotFound(msg) => msg,
            Self::Internal(msg) => {
                // Log the actual error, return generic message
                tracing::error!("Internal error: {}", msg);
                "an internal error occurred".to_string()
            }
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

impl From<taskdesk_core::Error> for ApiError {
    fn from(e: taskdesk_core::Error) -> Self {
        if e.is_validation() {
            Self::BadRequest(e.to_string())
        } else if e.is_not_found() {
            Self::NotFound(e.to_string())
        } else {
            Self::Internal(e.to_string())
        }
    }
}
