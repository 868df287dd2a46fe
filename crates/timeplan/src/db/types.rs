/// Database types for planner data
use crate::schedule::{DayOfWeek, Meeting};
use chrono::NaiveTime;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct StoredSemester {
    pub semester_id: i64,
    pub user_id: String,
    pub name: String,
}

/// A course as persisted in the planner database.
///
/// `day` holds the single-character day token ('월'..'일'), or an empty
/// string for courses with no grid placement (cyber lectures). Times are
/// "HH:MM" text; blank when unplaced.
#[derive(Debug, Clone, Serialize)]
pub struct StoredCourse {
    pub course_id: i64,
    pub semester_id: i64,
    pub user_id: String,
    pub name: String,
    pub professor: Option<String>,
    pub location: Option<String>,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub color: String,
    pub credits: f64,
}

/// Fields for inserting a new course row.
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub semester_id: i64,
    pub user_id: String,
    pub name: String,
    pub professor: Option<String>,
    pub location: Option<String>,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub color: String,
    pub credits: f64,
}

impl Meeting for StoredCourse {
    fn day(&self) -> Option<DayOfWeek> {
        self.day.chars().next().and_then(DayOfWeek::from_token)
    }

    fn start_time(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(&self.start_time, "%H:%M").ok()
    }

    fn end_time(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(&self.end_time, "%H:%M").ok()
    }
}
