//! Time-overlap detection between a candidate placement and a semester's
//! existing courses.
//!
//! Detection is a pure function over in-memory data: the caller fetches one
//! semester's course snapshot, checks the candidate against it, and decides
//! what to do with a reported conflict (block, warn, or proceed). Check and
//! commit are separate steps; callers that allow concurrent adds must
//! re-validate after a successful write.

use super::types::{DayOfWeek, ScheduleSlot};
use chrono::NaiveTime;

/// Anything with an optional weekly grid placement.
///
/// Implemented by parsed [`ScheduleSlot`]s and stored course rows, so the
/// same detector serves every add-course flow.
pub trait Meeting {
    fn day(&self) -> Option<DayOfWeek>;
    fn start_time(&self) -> Option<NaiveTime>;
    fn end_time(&self) -> Option<NaiveTime>;
}

impl Meeting for ScheduleSlot {
    fn day(&self) -> Option<DayOfWeek> {
        self.day
    }

    fn start_time(&self) -> Option<NaiveTime> {
        self.start_time
    }

    fn end_time(&self) -> Option<NaiveTime> {
        self.end_time
    }
}

/// Result of checking one candidate against a semester's courses.
#[derive(Debug)]
pub struct ConflictReport<'a, M> {
    /// Existing courses whose intervals overlap the candidate.
    pub collisions: Vec<&'a M>,
}

impl<M> ConflictReport<'_, M> {
    pub fn has_conflict(&self) -> bool {
        !self.collisions.is_empty()
    }

    fn none() -> Self {
        ConflictReport {
            collisions: Vec::new(),
        }
    }
}

/// Returns true if two placed intervals on the same day overlap.
///
/// Comparison is end-exclusive: a course ending at 10:00 and another
/// starting at 10:00 are compatible.
pub fn is_time_overlapping(
    day1: DayOfWeek,
    start1: NaiveTime,
    end1: NaiveTime,
    day2: DayOfWeek,
    start2: NaiveTime,
    end2: NaiveTime,
) -> bool {
    if day1 != day2 {
        return false;
    }
    !(end1 <= start2 || end2 <= start1)
}

/// Checks a candidate placement against every course in `existing`.
///
/// A candidate with no grid placement never conflicts; existing entries
/// with a missing or unparseable placement are skipped rather than treated
/// as errors. The `existing` list must be a single semester's snapshot —
/// courses in different semesters never run concurrently and are not
/// compared.
pub fn check_conflict<'a, M: Meeting>(
    candidate: &impl Meeting,
    existing: &'a [M],
) -> ConflictReport<'a, M> {
    let (Some(day), Some(start), Some(end)) =
        (candidate.day(), candidate.start_time(), candidate.end_time())
    else {
        return ConflictReport::none();
    };

    let collisions = existing
        .iter()
        .filter(|course| {
            match (course.day(), course.start_time(), course.end_time()) {
                (Some(d), Some(s), Some(e)) => is_time_overlapping(day, start, end, d, s, e),
                _ => false,
            }
        })
        .collect();

    ConflictReport { collisions }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn placed(day: DayOfWeek, start: (u32, u32), end: (u32, u32)) -> ScheduleSlot {
        ScheduleSlot {
            day: Some(day),
            start_time: Some(hm(start.0, start.1)),
            end_time: Some(hm(end.0, end.1)),
            location: None,
        }
    }

    #[test]
    fn test_back_to_back_is_not_a_conflict() {
        let candidate = placed(DayOfWeek::Mon, (9, 0), (10, 0));
        let existing = vec![placed(DayOfWeek::Mon, (10, 0), (11, 0))];

        let report = check_conflict(&candidate, &existing);
        assert!(!report.has_conflict());
    }

    #[test]
    fn test_overlap_is_detected() {
        let candidate = placed(DayOfWeek::Mon, (9, 30), (10, 30));
        let existing = vec![placed(DayOfWeek::Mon, (10, 0), (11, 0))];

        let report = check_conflict(&candidate, &existing);
        assert!(report.has_conflict());
        assert_eq!(report.collisions.len(), 1);
    }

    #[test]
    fn test_different_days_never_conflict() {
        let candidate = placed(DayOfWeek::Tue, (9, 0), (10, 0));
        let existing = vec![placed(DayOfWeek::Wed, (9, 0), (10, 0))];

        assert!(!check_conflict(&candidate, &existing).has_conflict());
    }

    #[test]
    fn test_unplaced_candidate_never_conflicts() {
        let candidate = ScheduleSlot::unplaced("사이버 강의");
        let existing = vec![
            placed(DayOfWeek::Mon, (9, 0), (18, 0)),
            placed(DayOfWeek::Tue, (9, 0), (18, 0)),
        ];

        assert!(!check_conflict(&candidate, &existing).has_conflict());
    }

    #[test]
    fn test_unplaced_existing_course_is_skipped() {
        let candidate = placed(DayOfWeek::Mon, (9, 0), (10, 0));
        let existing = vec![ScheduleSlot::unplaced("별도 일정")];

        assert!(!check_conflict(&candidate, &existing).has_conflict());
    }

    #[test]
    fn test_containment_is_a_conflict() {
        let candidate = placed(DayOfWeek::Fri, (10, 0), (11, 0));
        let existing = vec![placed(DayOfWeek::Fri, (9, 0), (13, 0))];

        assert!(check_conflict(&candidate, &existing).has_conflict());
    }

    #[test]
    fn test_all_collisions_are_collected() {
        let candidate = placed(DayOfWeek::Mon, (9, 0), (12, 0));
        let existing = vec![
            placed(DayOfWeek::Mon, (9, 0), (10, 0)),
            placed(DayOfWeek::Mon, (13, 0), (14, 0)),
            placed(DayOfWeek::Mon, (11, 0), (13, 0)),
            placed(DayOfWeek::Tue, (9, 0), (12, 0)),
        ];

        let report = check_conflict(&candidate, &existing);
        assert_eq!(report.collisions.len(), 2);
    }

    #[test]
    fn test_empty_existing_list() {
        let candidate = placed(DayOfWeek::Mon, (9, 0), (10, 0));
        let existing: Vec<ScheduleSlot> = Vec::new();

        assert!(!check_conflict(&candidate, &existing).has_conflict());
    }
}
