use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;
use validator::ValidationErrors;

use service::errors::StoreError;

/// Request failure rendered as a JSON body under `detail`.
#[derive(Debug)]
pub enum ApiError {
    /// Input failed field validation; rejected before any store call.
    Validation(ValidationErrors),
    /// The store rejected a write or no connection is available.
    Store(StoreError),
}

impl From<ValidationErrors> for ApiError {
    fn from(e: ValidationErrors) -> Self {
        Self::Validation(e)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(serde_json::json!({ "detail": errors })),
            )
                .into_response(),
            ApiError::Store(e) => {
                let msg = e.to_string();
                error!(error = %msg, "store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "detail": msg })),
                )
                    .into_response()
            }
        }
    }
}
