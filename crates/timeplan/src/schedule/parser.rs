//! Lecture time-string parsing.
//!
//! Catalog time descriptions are semi-structured text like `"본부516 : 목2,3"`
//! (location, day token, period list), with several placement-free markers
//! and `/`-delimited repetition for courses meeting more than once a week.
//! Parsing never fails: anything the grammar does not cover degrades to an
//! unplaced slot carrying the raw text, since catalog data is externally
//! sourced and a bad row must not block the rest of the application.

use super::period::PeriodTable;
use super::types::{DayOfWeek, ScheduleSlot};
use chrono::Duration;
use regex::Regex;
use tracing::warn;

/// Display label for rows with no time information at all.
const LOC_UNSPECIFIED: &str = "시간 미지정";
/// Display label for times arranged separately outside the grid.
const LOC_ARRANGED: &str = "별도 일정";
/// Display label for fully online lectures.
const LOC_CYBER: &str = "사이버 강의";

/// Marker meaning the meeting time is arranged separately.
const ARRANGED_TOKEN: &str = "별도";
/// Markers meaning the lecture is fully online with no fixed slot.
const CYBER_TOKENS: [&str; 2] = ["사", "비대면"];

/// Parses catalog time descriptions into normalized [`ScheduleSlot`]s.
pub struct ScheduleParser {
    periods: PeriodTable,
    block_re: Regex,
}

impl ScheduleParser {
    /// Creates a parser using the given period-to-clock-time convention.
    pub fn new(periods: PeriodTable) -> Self {
        // Optional "<location> :" prefix, one day token, comma-separated periods.
        let block_re = Regex::new(r"(?:(.+?)\s*:\s*)?([월화수목금토일])([\d,\s]+)")
            .expect("schedule block pattern is valid");
        ScheduleParser { periods, block_re }
    }

    /// The period table this parser was built with.
    pub fn period_table(&self) -> &PeriodTable {
        &self.periods
    }

    /// Parses a single meeting block.
    ///
    /// For multi-block strings (`"본부516 : 목2,3/ 사"`) only the first block
    /// is considered; use [`parse_all`](Self::parse_all) for the full set.
    ///
    /// `hours`, when present and positive, is the declared lecture length and
    /// overrides the end time implied by the period list. Real catalog data
    /// sometimes spans more periods than the listed first/last pair suggests.
    pub fn parse(&self, time_text: &str, hours: Option<u32>) -> ScheduleSlot {
        let trimmed = time_text.trim();

        // Missing data markers as exported by the catalog ("nan" from the
        // upstream spreadsheet dump).
        if trimmed.is_empty() || trimmed == "nan" {
            return ScheduleSlot::unplaced(LOC_UNSPECIFIED);
        }

        if trimmed.contains(ARRANGED_TOKEN) {
            return ScheduleSlot::unplaced(LOC_ARRANGED);
        }

        if CYBER_TOKENS.contains(&trimmed) {
            return ScheduleSlot::unplaced(LOC_CYBER);
        }

        if let Some(slot) = self.parse_structured(trimmed, hours) {
            return slot;
        }

        // Unrecognized format: keep the raw text visible rather than erroring,
        // so a human can still read (and later fix) the placement.
        warn!("Unrecognized lecture time format: {:?}", time_text);
        ScheduleSlot::unplaced(trimmed)
    }

    /// Parses every `/`-delimited meeting block in the string.
    pub fn parse_all(&self, time_text: &str, hours: Option<u32>) -> Vec<ScheduleSlot> {
        let trimmed = time_text.trim();
        if trimmed.is_empty() || trimmed == "nan" {
            return Vec::new();
        }

        trimmed
            .split('/')
            .map(|part| self.parse(part.trim(), hours))
            .collect()
    }

    /// Tries the structured `<location> : <day><periods>` grammar.
    fn parse_structured(&self, text: &str, hours: Option<u32>) -> Option<ScheduleSlot> {
        let caps = self.block_re.captures(text)?;

        let location = caps
            .get(1)
            .map(|m| m.as_str().trim().to_string())
            .filter(|s| !s.is_empty());

        let day_token = caps.get(2)?.as_str().chars().next()?;
        let day = DayOfWeek::from_token(day_token)?;

        let periods: Vec<u32> = caps
            .get(3)?
            .as_str()
            .split(',')
            .filter_map(|p| p.trim().parse().ok())
            .collect();
        let (&first, &last) = (periods.first()?, periods.last()?);

        // Unknown period index falls back to the start of the academic day.
        let start = self
            .periods
            .start_of(first)
            .or_else(|| self.periods.start_of(1))?;

        let end = match hours.filter(|&h| h > 0) {
            Some(h) => start.overflowing_add_signed(Duration::hours(i64::from(h))).0,
            None => self.periods.end_of(last).unwrap_or_else(|| {
                start
                    .overflowing_add_signed(Duration::minutes(i64::from(self.periods.period_minutes)))
                    .0
            }),
        };

        // A declared duration long enough to wrap past midnight cannot be
        // represented on the grid; treat the block as unparseable instead.
        if end <= start {
            return None;
        }

        Some(ScheduleSlot {
            day: Some(day),
            start_time: Some(start),
            end_time: Some(end),
            location,
        })
    }
}

impl Default for ScheduleParser {
    fn default() -> Self {
        Self::new(PeriodTable::default())
    }
}
