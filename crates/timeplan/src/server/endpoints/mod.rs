pub mod catalog;
pub mod courses;
pub mod credits;
pub mod schedule;
pub mod semesters;
pub mod status;
