use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const MINUTES_PER_DAY: u32 = 1440;

/// A wall-clock time declared as a 4-digit `HHMM` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeToken {
    hour: u8,
    minute: u8,
}

impl TimeToken {
    pub fn new(hour: u8, minute: u8) -> AppResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(AppError::InvalidTimeFormat(format!("{hour:02}{minute:02}")));
        }
        Ok(Self { hour, minute })
    }

    /// Parse a token of exactly four ASCII digits.
    pub fn parse(token: &str) -> AppResult<Self> {
        let invalid = || AppError::InvalidTimeFormat(token.to_string());

        if token.len() != 4 || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let hour: u8 = token[..2].parse().map_err(|_| invalid())?;
        let minute: u8 = token[2..].parse().map_err(|_| invalid())?;

        if hour > 23 || minute > 59 {
            return Err(invalid());
        }

        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn is_on_the_hour(&self) -> bool {
        self.minute == 0
    }

    /// Minutes since midnight, in `0..1440`.
    pub fn minutes(&self) -> u32 {
        self.hour as u32 * 60 + self.minute as u32
    }

    /// `HH:MM`, the form used for grid labels and markers.
    pub fn to_clock_string(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeToken {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TimeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.hour, self.minute)
    }
}

impl Serialize for TimeToken {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
