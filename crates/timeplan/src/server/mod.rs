use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;

use crate::server::endpoints::{catalog, courses, credits, schedule, semesters, status};
use crate::types::AppState;

mod endpoints;
pub mod types;

/// Creates a router that can be used by `axum`.
///
/// # Parameters
/// - `app_state`: The app server state.
///
/// # Returns
/// The router.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    // Per-semester planner routes; check and commit are separate endpoints
    let semester_router = Router::new()
        .route(
            "/semesters",
            get(semesters::get_semesters).post(semesters::post_create_semester),
        )
        .route(
            "/semesters/:semester_id/courses",
            get(courses::get_courses).post(courses::post_add_course),
        )
        .route(
            "/semesters/:semester_id/courses/check",
            post(courses::post_check_course),
        )
        .route("/courses/:course_id", delete(courses::delete_course));

    Router::new()
        .route("/health", get(status::get_health))
        .route("/schedule/parse", post(schedule::post_parse_schedule))
        .route("/catalog/:term/search", get(catalog::get_search))
        .route("/catalog/:term/invalidate", post(catalog::post_invalidate))
        .route("/credits", get(credits::get_credits))
        .merge(semester_router)
        .with_state(app_state)
}
