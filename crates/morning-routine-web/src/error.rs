use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use morning_routine_core::ChecklistError;
use serde_json::json;

/// Failure surfaced to an HTTP client as `{ "ok": false, "error": ... }`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl From<ChecklistError> for ApiError {
    fn from(err: ChecklistError) -> Self {
        match err {
            ChecklistError::InvalidFormat { .. } => Self::new(StatusCode::BAD_REQUEST, err.to_string()),
            ChecklistError::Storage(ref source) => {
                tracing::error!(error = %source, "checklist storage failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "checklist storage unavailable")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(json!({ "ok": false, "error": self.message })),
        )
            .into_response()
    }
}
