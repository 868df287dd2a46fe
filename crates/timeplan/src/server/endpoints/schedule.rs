use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::types::AppState;

/// Request body for parse previews.
#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub time_text: String,
    /// Declared lecture length in whole hours; overrides the period span
    pub hours: Option<u32>,
}

/// POST /schedule/parse
/// Parses a raw lecture time description into normalized slots without
/// touching any stored data. Used by UIs to preview a placement before
/// adding a course.
pub async fn post_parse_schedule(
    State(s): State<Arc<AppState>>,
    Json(req): Json<ParseRequest>,
) -> Response {
    info!("POST /schedule/parse - {:?}", req.time_text);

    let slots = s.parser.parse_all(&req.time_text, req.hours);
    let placed_count = slots.iter().filter(|slot| slot.is_placed()).count();

    (
        StatusCode::OK,
        Json(json!({
            "slots": slots,
            "placed_count": placed_count,
        })),
    )
        .into_response()
}
