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
pub struct CreditsParams {
    pub user_id: String,
}

/// GET /credits?user_id=...
/// Sums all scheduled credits for the user against the configured
/// graduation threshold.
pub async fn get_credits(
    State(s): State<Arc<AppState>>,
    Query(params): Query<CreditsParams>,
) -> Response {
    info!("GET /credits for user {}", params.user_id);

    match s.db.total_credits(&params.user_id) {
        Ok(completed) => {
            let required = s.config.graduation_credits;
            (
                StatusCode::OK,
                Json(json!({
                    "completed": completed,
                    "required": required,
                    "remaining": (required - completed).max(0.0),
                })),
            )
                .into_response()
        }
        Err(e) => {
            error!("Failed to sum credits: {}", e);
            planner_error_to_response(e)
        }
    }
}
