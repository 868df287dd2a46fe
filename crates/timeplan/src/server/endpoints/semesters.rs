use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

use crate::server::types::planner_error_to_response;
use crate::types::AppState;

#[derive(Debug, Deserialize)]
pub struct UserParams {
    pub user_id: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateSemesterRequest {
    pub user_id: String,
    pub name: String,
}

/// GET /semesters?user_id=...
pub async fn get_semesters(
    State(s): State<Arc<AppState>>,
    Query(params): Query<UserParams>,
) -> Response {
    info!("GET /semesters for user {}", params.user_id);

    match s.db.semesters_for_user(&params.user_id) {
        Ok(semesters) => (StatusCode::OK, Json(semesters)).into_response(),
        Err(e) => {
            error!("Failed to list semesters: {}", e);
            planner_error_to_response(e)
        }
    }
}

/// POST /semesters
/// Creates a semester; semester names are unique per user, so a duplicate
/// yields 409.
pub async fn post_create_semester(
    State(s): State<Arc<AppState>>,
    Json(req): Json<CreateSemesterRequest>,
) -> Response {
    info!("POST /semesters - {:?} for user {}", req.name, req.user_id);

    match s.db.create_semester(&req.user_id, &req.name) {
        Ok(semester_id) => (
            StatusCode::CREATED,
            Json(json!({ "semester_id": semester_id })),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to create semester: {}", e);
            planner_error_to_response(e)
        }
    }
}
