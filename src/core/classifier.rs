//! Day classifier: maps a weekday to its schedule-pattern category from
//! the worked days and the two adjacent-week flags.
//!
//! The week is closed: Sunday's predecessor is `prev_week_night` and
//! Saturday's successor is `next_week_night`. No other day ever looks
//! at a flag, and those two never look across the week.

use crate::models::{Adjacent, DayCategory, Schedule, Weekday};

/// Was the night before `day` worked?
fn night_before(day: Weekday, schedule: &Schedule) -> bool {
    match day.previous() {
        Some(prev) => schedule.is_workday(prev),
        None => schedule.prev_week_night,
    }
}

/// Is the night after `day` worked?
fn night_after(day: Weekday, schedule: &Schedule) -> bool {
    match day.next() {
        Some(next) => schedule.is_workday(next),
        None => schedule.next_week_night,
    }
}

pub fn classify(day: Weekday, schedule: &Schedule) -> DayCategory {
    let before = Adjacent::from_worked(night_before(day, schedule));

    if schedule.is_workday(day) {
        DayCategory::NightShift { before }
    } else {
        let after = Adjacent::from_worked(night_after(day, schedule));
        DayCategory::OffDay { before, after }
    }
}

/// Categories for the whole week, in canonical order.
pub fn classify_week(schedule: &Schedule) -> [(Weekday, DayCategory); 7] {
    Weekday::ALL.map(|d| (d, classify(d, schedule)))
}
