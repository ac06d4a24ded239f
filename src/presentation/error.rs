// Maps domain errors onto HTTP responses
use crate::domain::errors::{DashboardError, StorageError};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug)]
pub enum ApiError {
    Dashboard(DashboardError),
    /// Body was missing, not JSON, or did not match the expected shape
    InvalidBody(JsonRejection),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl From<DashboardError> for ApiError {
    fn from(e: DashboardError) -> Self {
        Self::Dashboard(e)
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        Self::Dashboard(DashboardError::Storage(e))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            Self::Dashboard(e) => {
                let (status, code) = match e {
                    DashboardError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS"),
                    DashboardError::UnknownRole(_) => (StatusCode::BAD_REQUEST, "UNKNOWN_ROLE"),
                    DashboardError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR"),
                };
                (status, code, e.to_string())
            }
            Self::InvalidBody(rejection) => (rejection.status(), "INVALID_BODY", rejection.body_text()),
        };

        if status.is_server_error() {
            tracing::error!(error_code = code, error = %message, "Request failed");
        } else {
            tracing::debug!(error_code = code, error = %message, "Request rejected");
        }

        let body = ErrorResponse {
            error: ErrorBody { code, message },
        };
        (status, Json(body)).into_response()
    }
}
