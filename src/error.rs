//! Application error types and HTTP response mapping.
//!
//! Defines `AppError` for every failure the dashboard pipeline can hit and
//! implements Axum's `IntoResponse` so a failed request becomes a plain-text
//! error page.
//!
//! Error mappings:
//! - `Http`, `Decode` → 502 (the upstream API misbehaved)
//! - everything else → 500

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected payload from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No repositories to summarise")]
    NoRepositories,

    #[error("Event feed still inside the window after {0} pages")]
    PageLimitExceeded(u32),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Http(_) | AppError::Decode { .. } => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::error!(error = %self, "dashboard request failed");
        (status, self.to_string()).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
