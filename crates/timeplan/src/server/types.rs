/// Shared server response types
use crate::error::PlannerError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Structured API error response.
pub struct ApiErrorType {
    pub status: StatusCode,
    pub message: String,
    pub detail: Option<String>,
}

impl From<(StatusCode, &str, Option<String>)> for ApiErrorType {
    fn from((status, message, detail): (StatusCode, &str, Option<String>)) -> Self {
        ApiErrorType {
            status,
            message: message.to_string(),
            detail,
        }
    }
}

impl IntoResponse for ApiErrorType {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(json!({
                "error": self.message,
                "detail": self.detail,
            })),
        )
            .into_response()
    }
}

/// Maps a planner error to an API response with an appropriate status.
pub fn planner_error_to_response(error: PlannerError) -> Response {
    let status = match &error {
        PlannerError::SemesterExists { .. } => StatusCode::CONFLICT,
        PlannerError::InvalidTerm { .. } => StatusCode::BAD_REQUEST,
        e if e.is_not_found() => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    ApiErrorType::from((status, "Request failed", Some(error.to_string()))).into_response()
}
