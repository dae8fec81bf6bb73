// crates/service/src/error.rs
//! Error handling for the upload service.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use comment_ripper_engine::error::RipperError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] RipperError),

    #[error("Store error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Upload error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("{0}")]
    BadRequest(String),

    #[error("'{0}' not found")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            // A broken comment structure is the uploader's problem, not ours.
            Self::Engine(RipperError::MalformedComment(e)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
            }
            Self::Engine(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            Self::Store(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            Self::Io(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            Self::Multipart(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::NotFound(name) => (StatusCode::NOT_FOUND, format!("'{name}' not found")),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            tracing::error!("{message}");
        } else {
            tracing::warn!("{message}");
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}
