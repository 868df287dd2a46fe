//! Course endpoints, including the two-phase conflict check.
//!
//! `POST …/courses/check` is the pure check against a semester snapshot;
//! `POST …/courses` is the commit, which re-validates before writing. The
//! two steps are not atomic: a client that allows concurrent adds should
//! re-check after a successful commit.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveTime;
use rand::seq::SliceRandom;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::db::{NewCourse, StoredCourse};
use crate::schedule::{check_conflict, hhmm, ConflictReport, DayOfWeek, ScheduleSlot};
use crate::server::types::{planner_error_to_response, ApiErrorType};
use crate::types::AppState;

/// Palette cycled through when a course is added without an explicit color.
const COURSE_COLORS: [&str; 8] = [
    "red", "blue", "green", "yellow", "purple", "pink", "indigo", "teal",
];

/// An explicit candidate placement for conflict checking.
#[derive(Debug, Deserialize)]
pub struct PlacementRequest {
    pub day: Option<DayOfWeek>,
    #[serde(default, with = "hhmm")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, with = "hhmm")]
    pub end_time: Option<NaiveTime>,
}

impl PlacementRequest {
    fn to_slot(&self) -> ScheduleSlot {
        ScheduleSlot {
            day: self.day,
            start_time: self.start_time,
            end_time: self.end_time,
            location: None,
        }
    }
}

/// Request body for adding a course.
///
/// The placement comes either from `time_text` (run through the schedule
/// parser, as catalog and roadmap flows do) or from explicit day/time
/// fields (manual entry). `time_text` wins when both are present.
#[derive(Debug, Deserialize)]
pub struct AddCourseRequest {
    pub user_id: String,
    pub name: String,
    pub professor: Option<String>,
    #[serde(default)]
    pub credits: f64,
    pub color: Option<String>,

    pub time_text: Option<String>,
    pub hours: Option<u32>,

    pub location: Option<String>,
    pub day: Option<DayOfWeek>,
    #[serde(default, with = "hhmm")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, with = "hhmm")]
    pub end_time: Option<NaiveTime>,
}

#[derive(Debug, Deserialize)]
pub struct AddCourseParams {
    /// Commit even if the placement conflicts with existing courses
    #[serde(default)]
    pub force: bool,
}

/// Validates a manually-entered placement. Parser output already upholds
/// the placed-interval invariant; explicit day/time fields must be checked
/// before they are committed: a placed course needs both times, with start
/// strictly before end. An inverted or half-specified interval would be
/// stored but never detected by later conflict checks.
fn manual_placement_is_valid(slot: &ScheduleSlot) -> bool {
    match (slot.day, slot.start_time, slot.end_time) {
        (None, _, _) => true,
        (Some(_), Some(start), Some(end)) => start < end,
        (Some(_), _, _) => false,
    }
}

/// Serializes a conflict report with the colliding courses' names, so the
/// client can tell the user exactly what is in the way.
fn conflict_json(report: &ConflictReport<'_, StoredCourse>) -> serde_json::Value {
    json!({
        "conflict": report.has_conflict(),
        "collisions": report
            .collisions
            .iter()
            .map(|c| json!({
                "course_id": c.course_id,
                "name": c.name,
                "day": c.day,
                "start_time": c.start_time,
                "end_time": c.end_time,
            }))
            .collect::<Vec<_>>(),
    })
}

/// GET /semesters/:semester_id/courses
pub async fn get_courses(
    Path(semester_id): Path<i64>,
    State(s): State<Arc<AppState>>,
) -> Response {
    info!("GET /semesters/{}/courses", semester_id);

    match s.db.courses_for_semester(semester_id) {
        Ok(courses) => (StatusCode::OK, Json(courses)).into_response(),
        Err(e) => {
            error!("Failed to list courses: {}", e);
            planner_error_to_response(e)
        }
    }
}

/// POST /semesters/:semester_id/courses/check
/// Pure conflict check of a candidate placement against the semester's
/// current courses. Nothing is written.
pub async fn post_check_course(
    Path(semester_id): Path<i64>,
    State(s): State<Arc<AppState>>,
    Json(req): Json<PlacementRequest>,
) -> Response {
    info!("POST /semesters/{}/courses/check", semester_id);

    let existing = match s.db.courses_for_semester(semester_id) {
        Ok(courses) => courses,
        Err(e) => {
            error!("Failed to load semester snapshot: {}", e);
            return planner_error_to_response(e);
        }
    };

    let report = check_conflict(&req.to_slot(), &existing);
    (StatusCode::OK, Json(conflict_json(&report))).into_response()
}

/// POST /semesters/:semester_id/courses?force=...
/// Commits a course. The placement is re-validated against the semester
/// before writing; a conflict yields 409 with the collision list unless
/// `force=true`.
pub async fn post_add_course(
    Path(semester_id): Path<i64>,
    State(s): State<Arc<AppState>>,
    Query(params): Query<AddCourseParams>,
    Json(req): Json<AddCourseRequest>,
) -> Response {
    info!(
        "POST /semesters/{}/courses - {:?} (force={})",
        semester_id, req.name, params.force
    );

    let slot = match &req.time_text {
        Some(text) => s.parser.parse(text, req.hours),
        None => {
            let slot = ScheduleSlot {
                day: req.day,
                start_time: req.start_time,
                end_time: req.end_time,
                location: req.location.clone(),
            };
            if !manual_placement_is_valid(&slot) {
                warn!("Rejected {:?}: malformed manual placement", req.name);
                return ApiErrorType::from((
                    StatusCode::BAD_REQUEST,
                    "Invalid course placement",
                    Some("a placed course needs start_time earlier than end_time".to_string()),
                ))
                .into_response();
            }
            slot
        }
    };

    let existing = match s.db.courses_for_semester(semester_id) {
        Ok(courses) => courses,
        Err(e) => {
            error!("Failed to load semester snapshot: {}", e);
            return planner_error_to_response(e);
        }
    };

    let report = check_conflict(&slot, &existing);
    if report.has_conflict() && !params.force {
        warn!(
            "Rejected {:?}: conflicts with {} existing course(s)",
            req.name,
            report.collisions.len()
        );
        return (StatusCode::CONFLICT, Json(conflict_json(&report))).into_response();
    }

    let color = req.color.clone().unwrap_or_else(|| {
        COURSE_COLORS
            .choose(&mut rand::thread_rng())
            .unwrap_or(&COURSE_COLORS[0])
            .to_string()
    });

    let course = NewCourse {
        semester_id,
        user_id: req.user_id.clone(),
        name: req.name.clone(),
        professor: req.professor.clone(),
        location: slot.location.clone().or_else(|| req.location.clone()),
        day: slot.day.map(|d| d.token().to_string()).unwrap_or_default(),
        start_time: slot
            .start_time
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default(),
        end_time: slot
            .end_time
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default(),
        color,
        credits: req.credits,
    };

    match s.db.add_course(&course) {
        Ok(course_id) => (
            StatusCode::CREATED,
            Json(json!({
                "course_id": course_id,
                "placed": slot.is_placed(),
                "forced_over_conflict": report.has_conflict(),
            })),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to add course: {}", e);
            planner_error_to_response(e)
        }
    }
}

/// DELETE /courses/:course_id
pub async fn delete_course(
    Path(course_id): Path<i64>,
    State(s): State<Arc<AppState>>,
) -> Response {
    info!("DELETE /courses/{}", course_id);

    match s.db.delete_course(course_id) {
        Ok(()) => (StatusCode::OK, Json(json!({ "deleted": course_id }))).into_response(),
        Err(e) => {
            error!("Failed to delete course: {}", e);
            planner_error_to_response(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn slot(
        day: Option<DayOfWeek>,
        start: Option<NaiveTime>,
        end: Option<NaiveTime>,
    ) -> ScheduleSlot {
        ScheduleSlot {
            day,
            start_time: start,
            end_time: end,
            location: None,
        }
    }

    #[test]
    fn test_well_formed_manual_placement_is_accepted() {
        let s = slot(Some(DayOfWeek::Mon), Some(hm(9, 0)), Some(hm(10, 0)));
        assert!(manual_placement_is_valid(&s));
    }

    #[test]
    fn test_unplaced_manual_entry_is_accepted() {
        assert!(manual_placement_is_valid(&ScheduleSlot::unplaced("사이버 강의")));
    }

    #[test]
    fn test_inverted_interval_is_rejected() {
        let s = slot(Some(DayOfWeek::Mon), Some(hm(11, 0)), Some(hm(10, 0)));
        assert!(!manual_placement_is_valid(&s));
    }

    #[test]
    fn test_zero_length_interval_is_rejected() {
        let s = slot(Some(DayOfWeek::Mon), Some(hm(10, 0)), Some(hm(10, 0)));
        assert!(!manual_placement_is_valid(&s));
    }

    #[test]
    fn test_placed_day_without_times_is_rejected() {
        assert!(!manual_placement_is_valid(&slot(
            Some(DayOfWeek::Mon),
            Some(hm(9, 0)),
            None
        )));
        assert!(!manual_placement_is_valid(&slot(Some(DayOfWeek::Mon), None, None)));
    }
}
