use super::interval::Interval;
use serde::Serialize;

/// One day's activity layout. Later intervals win where they overlap
/// earlier ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchedulePattern {
    pub title: String,
    pub intervals: Vec<Interval>,
}

impl SchedulePattern {
    pub fn new(title: &str, intervals: Vec<Interval>) -> Self {
        Self {
            title: title.to_string(),
            intervals,
        }
    }
}
