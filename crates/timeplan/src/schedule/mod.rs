/// Schedule parsing and conflict detection
mod conflict;
mod parser;
mod period;
mod types;

pub use conflict::{check_conflict, is_time_overlapping, ConflictReport, Meeting};
pub use parser::ScheduleParser;
pub use period::PeriodTable;
pub use types::{hhmm, DayOfWeek, ScheduleSlot};
