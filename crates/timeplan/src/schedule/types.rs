/// Core types for parsed lecture schedules
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A day of the week, identified in catalog data by its Korean token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    #[serde(rename = "월")]
    Mon,
    #[serde(rename = "화")]
    Tue,
    #[serde(rename = "수")]
    Wed,
    #[serde(rename = "목")]
    Thu,
    #[serde(rename = "금")]
    Fri,
    #[serde(rename = "토")]
    Sat,
    #[serde(rename = "일")]
    Sun,
}

impl DayOfWeek {
    /// Maps a single day token to a day, e.g. '목' -> Thu.
    pub fn from_token(c: char) -> Option<Self> {
        match c {
            '월' => Some(DayOfWeek::Mon),
            '화' => Some(DayOfWeek::Tue),
            '수' => Some(DayOfWeek::Wed),
            '목' => Some(DayOfWeek::Thu),
            '금' => Some(DayOfWeek::Fri),
            '토' => Some(DayOfWeek::Sat),
            '일' => Some(DayOfWeek::Sun),
            _ => None,
        }
    }

    /// The single-character token used in catalog time strings and stored rows.
    pub fn token(&self) -> char {
        match self {
            DayOfWeek::Mon => '월',
            DayOfWeek::Tue => '화',
            DayOfWeek::Wed => '수',
            DayOfWeek::Thu => '목',
            DayOfWeek::Fri => '금',
            DayOfWeek::Sat => '토',
            DayOfWeek::Sun => '일',
        }
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// One normalized weekly meeting block produced by the parser.
///
/// `day` is `None` exactly when the course has no fixed grid placement
/// (cyber lectures, separately-arranged times, or free text the grammar
/// does not cover). When `day` is present both times are present and
/// `start_time < end_time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub day: Option<DayOfWeek>,
    #[serde(with = "hhmm")]
    pub start_time: Option<NaiveTime>,
    #[serde(with = "hhmm")]
    pub end_time: Option<NaiveTime>,
    pub location: Option<String>,
}

impl ScheduleSlot {
    /// A slot with no grid placement, carrying only a display label.
    pub fn unplaced(location: impl Into<String>) -> Self {
        ScheduleSlot {
            day: None,
            start_time: None,
            end_time: None,
            location: Some(location.into()),
        }
    }

    /// Returns true if this slot occupies a fixed weekly grid position.
    pub fn is_placed(&self) -> bool {
        self.day.is_some()
    }
}

/// Serde adapter for optional "HH:MM" wall-clock fields.
///
/// The surrounding data model uses empty strings, not nulls, for missing
/// times, so `None` round-trips as `""`.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(t: &Option<NaiveTime>, s: S) -> Result<S::Ok, S::Error> {
        match t {
            Some(t) => s.serialize_str(&t.format("%H:%M").to_string()),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveTime>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(text) => NaiveTime::parse_from_str(text, "%H:%M")
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_day_token_round_trip() {
        for day in [
            DayOfWeek::Mon,
            DayOfWeek::Tue,
            DayOfWeek::Wed,
            DayOfWeek::Thu,
            DayOfWeek::Fri,
            DayOfWeek::Sat,
            DayOfWeek::Sun,
        ] {
            assert_eq!(DayOfWeek::from_token(day.token()), Some(day));
        }
        assert_eq!(DayOfWeek::from_token('x'), None);
    }

    #[test]
    fn test_slot_serializes_hhmm() {
        let slot = ScheduleSlot {
            day: Some(DayOfWeek::Thu),
            start_time: NaiveTime::from_hms_opt(10, 0, 0),
            end_time: NaiveTime::from_hms_opt(12, 0, 0),
            location: Some("본부516".to_string()),
        };

        let json = serde_json::to_value(&slot).unwrap();
        assert_eq!(json["day"], "목");
        assert_eq!(json["start_time"], "10:00");
        assert_eq!(json["end_time"], "12:00");

        let back: ScheduleSlot = serde_json::from_value(json).unwrap();
        assert_eq!(back, slot);
    }

    #[test]
    fn test_unplaced_slot_serializes_empty_times() {
        let slot = ScheduleSlot::unplaced("사이버 강의");
        let json = serde_json::to_value(&slot).unwrap();
        assert_eq!(json["start_time"], "");
        assert_eq!(json["end_time"], "");
        assert!(json["day"].is_null());
    }
}
