/// Database module for semesters and per-semester course schedules

mod types;

pub use types::{NewCourse, StoredCourse, StoredSemester};

use crate::error::PlannerError;
use rusqlite::Connection;
use std::sync::Mutex;

const SCHEMA_SQL: &str = include_str!("../../../../sql/init_planner.sql");

pub struct PlannerDb {
    db: Mutex<Connection>,
}

impl PlannerDb {
    /// Opens (or creates) the planner database and initializes the schema.
    pub fn open(db_path: &str) -> Result<Self, PlannerError> {
        let conn = Connection::open(db_path)?;
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self {
            db: Mutex::new(conn),
        })
    }

    /// Opens an in-memory database, used by tests.
    pub fn open_in_memory() -> Result<Self, PlannerError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self {
            db: Mutex::new(conn),
        })
    }

    /// Creates a semester for a user. Semester names are unique per user.
    pub fn create_semester(&self, user_id: &str, name: &str) -> Result<i64, PlannerError> {
        let db = self.db.lock().unwrap();

        let exists: i64 = db.query_row(
            "SELECT COUNT(*) FROM semesters WHERE user_id = ?1 AND name = ?2",
            (user_id, name),
            |row| row.get(0),
        )?;
        if exists > 0 {
            return Err(PlannerError::SemesterExists {
                name: name.to_string(),
            });
        }

        db.execute(
            "INSERT INTO semesters (user_id, name, created_at) VALUES (?1, ?2, datetime('now'))",
            (user_id, name),
        )?;
        Ok(db.last_insert_rowid())
    }

    /// Lists a user's semesters, ordered by name.
    pub fn semesters_for_user(&self, user_id: &str) -> Result<Vec<StoredSemester>, PlannerError> {
        let db = self.db.lock().unwrap();
        let mut stmt = db.prepare(
            "SELECT semester_id, user_id, name FROM semesters WHERE user_id = ? ORDER BY name",
        )?;

        let semesters = stmt
            .query_map([user_id], |row| {
                Ok(StoredSemester {
                    semester_id: row.get(0)?,
                    user_id: row.get(1)?,
                    name: row.get(2)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(semesters)
    }

    /// Returns true if the semester exists.
    pub fn semester_exists(&self, semester_id: i64) -> Result<bool, PlannerError> {
        let db = self.db.lock().unwrap();
        let count: i64 = db.query_row(
            "SELECT COUNT(*) FROM semesters WHERE semester_id = ?",
            [semester_id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Inserts a course into its semester and returns the new row id.
    pub fn add_course(&self, course: &NewCourse) -> Result<i64, PlannerError> {
        if !self.semester_exists(course.semester_id)? {
            return Err(PlannerError::SemesterNotFound {
                semester_id: course.semester_id,
            });
        }

        let db = self.db.lock().unwrap();
        db.execute(
            "INSERT INTO courses (
                semester_id, user_id, name, professor, location,
                day, start_time, end_time, color, credits, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, datetime('now'))",
            (
                course.semester_id,
                &course.user_id,
                &course.name,
                &course.professor,
                &course.location,
                &course.day,
                &course.start_time,
                &course.end_time,
                &course.color,
                course.credits,
            ),
        )?;
        Ok(db.last_insert_rowid())
    }

    /// Gets all courses scheduled in one semester.
    ///
    /// This is the snapshot conflict checks run against; it never spans
    /// semesters.
    pub fn courses_for_semester(&self, semester_id: i64) -> Result<Vec<StoredCourse>, PlannerError> {
        let db = self.db.lock().unwrap();
        let mut stmt = db.prepare(
            "SELECT course_id, semester_id, user_id, name, professor, location,
                    day, start_time, end_time, color, credits
             FROM courses WHERE semester_id = ?",
        )?;

        let courses = stmt
            .query_map([semester_id], |row| {
                Ok(StoredCourse {
                    course_id: row.get(0)?,
                    semester_id: row.get(1)?,
                    user_id: row.get(2)?,
                    name: row.get(3)?,
                    professor: row.get(4)?,
                    location: row.get(5)?,
                    day: row.get(6)?,
                    start_time: row.get(7)?,
                    end_time: row.get(8)?,
                    color: row.get(9)?,
                    credits: row.get(10)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(courses)
    }

    /// Deletes a course by id.
    pub fn delete_course(&self, course_id: i64) -> Result<(), PlannerError> {
        let db = self.db.lock().unwrap();
        let affected = db.execute("DELETE FROM courses WHERE course_id = ?", [course_id])?;
        if affected == 0 {
            return Err(PlannerError::CourseNotFound { course_id });
        }
        Ok(())
    }

    /// Sums the credits of every course a user has scheduled, across all
    /// semesters. Simple summation only.
    pub fn total_credits(&self, user_id: &str) -> Result<f64, PlannerError> {
        let db = self.db.lock().unwrap();
        let total: f64 = db.query_row(
            "SELECT COALESCE(SUM(credits), 0) FROM courses WHERE user_id = ?",
            [user_id],
            |row| row.get(0),
        )?;
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_course(semester_id: i64, name: &str, day: &str, start: &str, end: &str) -> NewCourse {
        NewCourse {
            semester_id,
            user_id: "u1".to_string(),
            name: name.to_string(),
            professor: Some("김교수".to_string()),
            location: Some("본부516".to_string()),
            day: day.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            color: "red".to_string(),
            credits: 3.0,
        }
    }

    #[test]
    fn test_create_semester_rejects_duplicates() {
        let db = PlannerDb::open_in_memory().unwrap();
        db.create_semester("u1", "1학년 1학기").unwrap();

        let err = db.create_semester("u1", "1학년 1학기").unwrap_err();
        assert!(matches!(err, PlannerError::SemesterExists { .. }));

        // same name for a different user is fine
        db.create_semester("u2", "1학년 1학기").unwrap();
    }

    #[test]
    fn test_semesters_sorted_by_name() {
        let db = PlannerDb::open_in_memory().unwrap();
        db.create_semester("u1", "2학년 1학기").unwrap();
        db.create_semester("u1", "1학년 1학기").unwrap();

        let semesters = db.semesters_for_user("u1").unwrap();
        assert_eq!(semesters.len(), 2);
        assert_eq!(semesters[0].name, "1학년 1학기");
    }

    #[test]
    fn test_add_and_list_courses() {
        let db = PlannerDb::open_in_memory().unwrap();
        let sem = db.create_semester("u1", "1학년 1학기").unwrap();

        db.add_course(&new_course(sem, "자료구조", "목", "10:00", "12:00"))
            .unwrap();
        db.add_course(&new_course(sem, "사이버윤리", "", "", ""))
            .unwrap();

        let courses = db.courses_for_semester(sem).unwrap();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].name, "자료구조");
        assert_eq!(courses[1].day, "");
    }

    #[test]
    fn test_add_course_to_missing_semester_fails() {
        let db = PlannerDb::open_in_memory().unwrap();
        let err = db
            .add_course(&new_course(999, "자료구조", "목", "10:00", "12:00"))
            .unwrap_err();
        assert!(matches!(err, PlannerError::SemesterNotFound { .. }));
    }

    #[test]
    fn test_delete_course() {
        let db = PlannerDb::open_in_memory().unwrap();
        let sem = db.create_semester("u1", "1학년 1학기").unwrap();
        let id = db
            .add_course(&new_course(sem, "자료구조", "목", "10:00", "12:00"))
            .unwrap();

        db.delete_course(id).unwrap();
        assert!(db.courses_for_semester(sem).unwrap().is_empty());

        let err = db.delete_course(id).unwrap_err();
        assert!(matches!(err, PlannerError::CourseNotFound { .. }));
    }

    #[test]
    fn test_total_credits_spans_semesters() {
        let db = PlannerDb::open_in_memory().unwrap();
        let s1 = db.create_semester("u1", "1학년 1학기").unwrap();
        let s2 = db.create_semester("u1", "1학년 2학기").unwrap();

        db.add_course(&new_course(s1, "자료구조", "목", "10:00", "12:00"))
            .unwrap();
        db.add_course(&new_course(s2, "알고리즘", "월", "09:00", "11:00"))
            .unwrap();

        assert_eq!(db.total_credits("u1").unwrap(), 6.0);
        assert_eq!(db.total_credits("nobody").unwrap(), 0.0);
    }
}
