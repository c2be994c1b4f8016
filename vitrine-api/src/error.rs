use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use vitrine_aggregator::AggregationError;
use vitrine_core::CoreError;

const INTERNAL_MESSAGE: &str = "An unexpected error occurred";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),
    #[error("{0}")]
    NotFoundError(String),
    #[error("{0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFoundError(_) => StatusCode::NOT_FOUND,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Attaches the request path reported in the error body
    pub fn at(self, path: impl Into<String>) -> ApiError {
        ApiError {
            error: self,
            path: path.into(),
        }
    }
}

impl From<AggregationError> for AppError {
    fn from(err: AggregationError) -> Self {
        match err {
            AggregationError::NotFound(id) => AppError::NotFoundError(format!("Product not found with ID: {}", id)),
            AggregationError::Primary(e) => AppError::InternalServerError(e.to_string()),
        }
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ValidationError(msg) => AppError::ValidationError(msg),
            CoreError::NotFound(msg) => AppError::NotFoundError(msg),
            other => AppError::InternalServerError(other.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
}

/// An [`AppError`] bound to the request that produced it
#[derive(Debug)]
pub struct ApiError {
    error: AppError,
    path: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.error.status();
        let message = match self.error {
            AppError::InternalServerError(msg) => {
                tracing::error!(path = %self.path, "Internal Server Error: {}", msg);
                INTERNAL_MESSAGE.to_string()
            }
            AppError::ValidationError(msg) | AppError::NotFoundError(msg) => msg,
        };

        let body = ErrorBody {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            message,
            path: self.path,
        };

        (status, Json(body)).into_response()
    }
}

/// Router fallback for paths no handler matches
pub async fn route_not_found(uri: Uri) -> ApiError {
    AppError::NotFoundError(format!("No handler found for {}", uri.path())).at(uri.path())
}
