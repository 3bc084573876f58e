pub mod day_category;
pub mod interval;
pub mod pattern;
pub mod schedule;
pub mod time_token;
pub mod weekday;

pub use day_category::{Adjacent, DayCategory};
pub use interval::Interval;
pub use pattern::SchedulePattern;
pub use schedule::Schedule;
pub use time_token::TimeToken;
pub use weekday::Weekday;
