//! Error types for the planner.

use thiserror::Error;

/// Errors that can occur in planner storage, catalog, and config operations.
///
/// Schedule parsing deliberately has no error variant: malformed time text
/// degrades to an unplaced slot instead of failing.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// SQLite operation failed
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Filesystem access failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failed
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Config file was present but could not be used
    #[error("Config error: {message}")]
    Config { message: String },

    /// A semester with this name already exists for the user
    #[error("Semester {name:?} already exists for this user")]
    SemesterExists { name: String },

    /// Referenced semester does not exist
    #[error("Semester {semester_id} not found")]
    SemesterNotFound { semester_id: i64 },

    /// Referenced course does not exist
    #[error("Course {course_id} not found")]
    CourseNotFound { course_id: i64 },

    /// No catalog file exists for the requested term
    #[error("No catalog found for term {term:?}")]
    CatalogNotFound { term: String },

    /// Term identifier is not usable as a catalog file name
    #[error("Invalid catalog term {term:?}")]
    InvalidTerm { term: String },
}

impl PlannerError {
    /// Returns true if this error means a requested entity does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PlannerError::SemesterNotFound { .. }
                | PlannerError::CourseNotFound { .. }
                | PlannerError::CatalogNotFound { .. }
        )
    }
}
