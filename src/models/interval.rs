use super::time_token::TimeToken;
use crate::errors::AppResult;
use serde::Serialize;

/// A named, colored span of the day. `end` may be earlier than `start`,
/// in which case the interval crosses midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interval {
    pub id: String,
    pub start: TimeToken,
    pub end: TimeToken,
    pub color: String,
}

impl Interval {
    pub fn new(id: &str, start: TimeToken, end: TimeToken, color: &str) -> Self {
        Self {
            id: id.to_string(),
            start,
            end,
            color: color.to_string(),
        }
    }

    /// Build an interval from raw `HHMM` tokens.
    pub fn parse(id: &str, start: &str, end: &str, color: &str) -> AppResult<Self> {
        Ok(Self::new(
            id,
            TimeToken::parse(start)?,
            TimeToken::parse(end)?,
            color,
        ))
    }

    pub fn crosses_midnight(&self) -> bool {
        self.end <= self.start
    }
}
