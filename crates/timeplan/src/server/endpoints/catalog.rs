use axum::{
    extract::{Path, Query, State},
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
pub struct SearchParams {
    /// Keyword matched against course names and professors
    pub q: String,
}

/// GET /catalog/:term/search?q=...
/// Searches one term's lecture catalog. Each hit is returned together with
/// its parsed schedule slots so callers can render placements directly.
pub async fn get_search(
    Path(term): Path<String>,
    State(s): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Response {
    info!("GET /catalog/{}/search?q={}", term, params.q);

    let catalog = match s.catalogs.for_term(&term) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to load catalog for term {}: {}", term, e);
            return planner_error_to_response(e);
        }
    };

    let results: Vec<_> = catalog
        .search(&params.q)
        .into_iter()
        .map(|lecture| {
            json!({
                "name": lecture.name,
                "professor": lecture.professor,
                "credits": lecture.credits,
                "hours": lecture.hours,
                "time_text": lecture.time_text,
                "slots": s.parser.parse_all(&lecture.time_text, lecture.hours),
            })
        })
        .collect();

    (StatusCode::OK, Json(results)).into_response()
}

/// POST /catalog/:term/invalidate
/// Drops the cached catalog for a term so the next request re-reads the
/// CSV export. Used after a registrar re-export replaces the file.
pub async fn post_invalidate(Path(term): Path<String>, State(s): State<Arc<AppState>>) -> Response {
    info!("POST /catalog/{}/invalidate", term);

    s.catalogs.invalidate(&term);
    (StatusCode::OK, Json(json!({ "invalidated": term }))).into_response()
}
