/// Unified error handling module
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Unified error response format
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("External API error: {0}")]
    ExternalApi(#[from] reqwest::Error),
    #[error("Upstream returned status {status} for {context}")]
    UpstreamStatus {
        status: reqwest::StatusCode,
        context: &'static str,
    },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = match &self {
            ApiError::ExternalApi(e) => match e.status() {
                Some(status) => upstream_code(status.as_u16()),
                None => "UPSTREAM_ERROR",
            },
            ApiError::UpstreamStatus { status, .. } => upstream_code(status.as_u16()),
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        };

        let error_response = ErrorResponse {
            ok: false,
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        // Errors ride an HTTP 200 with ok=false; clients branch on the flag.
        (StatusCode::OK, Json(error_response)).into_response()
    }
}

fn upstream_code(status: u16) -> &'static str {
    match status {
        403 => "UPSTREAM_403",
        404 => "UPSTREAM_404",
        429 => "UPSTREAM_429",
        500..=599 => "UPSTREAM_5XX",
        _ => "UPSTREAM_ERROR",
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
