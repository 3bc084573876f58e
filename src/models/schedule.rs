use super::pattern::SchedulePattern;
use super::weekday::Weekday;
use crate::errors::{AppError, AppResult};
use std::collections::{BTreeMap, BTreeSet};

/// Typed, immutable snapshot of the configuration that every derivation
/// call receives explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    pub workdays: BTreeSet<Weekday>,
    pub prev_week_night: bool,
    pub next_week_night: bool,
    pub colors: BTreeMap<String, String>,
    pub patterns: Vec<SchedulePattern>,
}

impl Schedule {
    pub fn is_workday(&self, day: Weekday) -> bool {
        self.workdays.contains(&day)
    }

    /// Index of the pattern carrying `title`. When several patterns share
    /// a title the last declared one wins.
    pub fn pattern_index(&self, title: &str) -> Option<usize> {
        self.patterns.iter().rposition(|p| p.title == title)
    }

    pub fn pattern(&self, title: &str) -> Option<&SchedulePattern> {
        self.pattern_index(title).map(|i| &self.patterns[i])
    }

    /// Color lookup used by renderers and exporters.
    pub fn color_of(&self, id: &str) -> AppResult<&str> {
        self.colors
            .get(id)
            .map(String::as_str)
            .ok_or_else(|| AppError::MissingColor(id.to_string()))
    }
}
