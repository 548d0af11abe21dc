// ==========================================
// Gestão de Processos - API layer errors
// ==========================================
// Converts lower-layer failures into the `{ "error": ... }` JSON shape
// the API exposes. Messages here are exactly what the client sees.
// ==========================================

use crate::importer::error::ImportError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// API layer error type.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Caller mistakes: missing fields, bad uploads, duplicates.
    #[error("{0}")]
    InvalidInput(String),

    /// Store faults surfaced with a stable client-facing message.
    #[error("{0}")]
    DatabaseError(String),

    /// Anything unexpected.
    #[error("{0}")]
    InternalError(String),
}

/// Result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::DatabaseError(msg) | ApiError::InternalError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        if err.is_request_fatal() {
            ApiError::InvalidInput(err.to_string())
        } else {
            error!(error = %err, "falha interna durante a importação");
            ApiError::InternalError("Erro interno do servidor durante a importação.".to_string())
        }
    }
}
