//! Unified error types for the feed viewer
//!
//! This module defines error types for each layer:
//! - `PostsApiError`: Posts backend client errors
//! - `AppError`: Application layer errors (wraps backend errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Posts backend client errors
#[derive(Debug, Error)]
pub enum PostsApiError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("HTTP client error: {0}")]
    Client(String),
}

impl PostsApiError {
    /// Short message safe to show to users. Never includes the backend body.
    pub fn summary(&self) -> String {
        match self {
            PostsApiError::Api { status, .. } => format!("posts service returned {}", status),
            PostsApiError::Request(e) if e.is_timeout() => "posts service timed out".to_string(),
            PostsApiError::Request(_) => "posts service unreachable".to_string(),
            PostsApiError::Deserialization(_) => "posts service sent an unreadable feed".to_string(),
            PostsApiError::Client(_) => "HTTP client unavailable".to_string(),
        }
    }

    /// Status the viewer answers with when this error ends a request
    pub fn http_status(&self) -> StatusCode {
        match self {
            PostsApiError::Api { status, .. } => match *status {
                404 => StatusCode::NOT_FOUND,
                401 | 403 => StatusCode::FORBIDDEN,
                _ => StatusCode::BAD_GATEWAY,
            },
            PostsApiError::Client(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PostsApiError::Request(_) | PostsApiError::Deserialization(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Posts API error: {0}")]
    PostsApi(#[from] PostsApiError),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

/// Error response body for JSON responses
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::PostsApi(e) => {
                tracing::warn!("Posts API error: {}", e);
                match e {
                    PostsApiError::Client(msg) => {
                        tracing::error!("HTTP client error: {}", msg);
                        (e.http_status(), "Internal server error", None)
                    }
                    PostsApiError::Api { .. } => {
                        (e.http_status(), "Posts service error", Some(e.summary()))
                    }
                    _ => (
                        e.http_status(),
                        "Posts service unavailable",
                        Some(e.summary()),
                    ),
                }
            }
            AppError::Template(e) => {
                tracing::error!("Template error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
